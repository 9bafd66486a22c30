//! Amount type for representing currency values
//!
//! Amounts are kept at full floating precision while they are summed and are
//! rounded to two fractional digits only when formatted for display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount in currency units (e.g. euros)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Create an amount from a value in currency units
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the unrounded value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Round to cents; only for comparison and display
    pub fn rounded(&self) -> f64 {
        let cents = (self.0 * 100.0).round();
        // avoid "-0.00"
        if cents == 0.0 {
            0.0
        } else {
            cents / 100.0
        }
    }

    /// Check if the amount is zero after rounding to cents
    pub fn is_zero(&self) -> bool {
        self.rounded() == 0.0
    }

    /// Check if the amount is negative after rounding to cents
    pub fn is_negative(&self) -> bool {
        self.rounded() < 0.0
    }

    /// Largest magnitude accepted for a single entered or counted value
    ///
    /// Sums of capped values stay finite, so totals never become `inf`.
    pub const LIMIT: f64 = 1e12;

    /// Wrap `value` if it is finite and within [`Amount::LIMIT`]
    pub fn checked(value: f64) -> Option<Self> {
        (value.is_finite() && value.abs() <= Self::LIMIT).then_some(Self(value))
    }

    /// Parse user-entered text into an amount
    ///
    /// Accepts `10`, `10.50`, surrounding whitespace and a trailing currency
    /// symbol; `10,50` only when `decimal_comma` is set. Empty input is zero.
    /// Returns `None` for anything else, including `inf`, `NaN` and values
    /// beyond [`Amount::LIMIT`].
    pub fn parse_lenient(s: &str, decimal_comma: bool) -> Option<Self> {
        let s = s.trim().trim_end_matches('€').trim_end();
        if s.is_empty() {
            return Some(Self::zero());
        }
        if !s.chars().all(|c| {
            c.is_ascii_digit() || matches!(c, '.' | '-' | '+') || (decimal_comma && c == ',')
        }) {
            return None;
        }
        let value: f64 = s.replace(',', ".").parse().ok()?;
        Self::checked(value)
    }

    /// Parse user-entered text, treating anything unparseable as zero
    pub fn parse_or_zero(s: &str, decimal_comma: bool) -> Self {
        Self::parse_lenient(s, decimal_comma).unwrap_or_default()
    }

    /// Format with a currency symbol, e.g. `12.50 €`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{} {}", self, symbol)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.rounded())
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Amount {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, m| acc + m)
    }
}
