//! Cash denominations
//!
//! The drawer is counted per note and coin. Each denomination is identified
//! by its value in cents so that keys compare exactly, while the persisted key
//! is the human decimal string (`"500"`, `"0.5"`, `"0.01"`).

use std::fmt;

use super::money::Amount;
use crate::error::TillError;

/// A note or coin value tracked in the drawer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Denomination(u32);

impl Denomination {
    /// Every denomination, largest first (the display order)
    pub const ALL: [Denomination; 15] = [
        Denomination(50_000),
        Denomination(20_000),
        Denomination(10_000),
        Denomination(5_000),
        Denomination(2_000),
        Denomination(1_000),
        Denomination(500),
        Denomination(200),
        Denomination(100),
        Denomination(50),
        Denomination(20),
        Denomination(10),
        Denomination(5),
        Denomination(2),
        Denomination(1),
    ];

    /// Look up a denomination by its value in cents
    pub fn from_cents(cents: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|d| d.0 == cents)
    }

    /// Parse a key like `"500"`, `"0.5"`, `"0,05"` or `"0.50"`
    ///
    /// Returns `None` for anything that is not one of the known values.
    pub fn from_key(key: &str) -> Option<Self> {
        let value: f64 = key.trim().replace(',', ".").parse().ok()?;
        if !value.is_finite() || value <= 0.0 {
            return None;
        }
        let cents = (value * 100.0).round();
        if (cents / 100.0 - value).abs() > 1e-9 || cents > u32::MAX as f64 {
            return None;
        }
        Self::from_cents(cents as u32)
    }

    /// Parse a key, failing with a not-found error for unknown values
    pub fn parse(key: &str) -> Result<Self, TillError> {
        Self::from_key(key).ok_or_else(|| TillError::denomination_not_found(key))
    }

    /// Value in cents
    pub const fn cents(&self) -> u32 {
        self.0
    }

    /// Value in currency units
    pub fn value(&self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// Whether this is a sub-unit (cent) coin
    pub const fn is_sub_unit(&self) -> bool {
        self.0 < 100
    }

    /// Subtotal for a counted quantity of this denomination
    pub fn subtotal(&self, count: f64) -> Amount {
        Amount::new(count * self.value())
    }

    /// Subtotal, or `None` when it is not finite or beyond [`Amount::LIMIT`]
    pub fn checked_subtotal(&self, count: f64) -> Option<Amount> {
        Amount::checked(count * self.value())
    }

    /// Persisted key: shortest decimal form of the value
    pub fn key(&self) -> String {
        let units = self.0 / 100;
        let cents = self.0 % 100;
        if cents == 0 {
            units.to_string()
        } else if cents % 10 == 0 {
            format!("{}.{}", units, cents / 10)
        } else {
            format!("{}.{:02}", units, cents)
        }
    }

    /// Display label, e.g. `50 €` or `20 Cent`
    pub fn label(&self, currency_symbol: &str) -> String {
        if self.is_sub_unit() {
            format!("{} Cent", self.0)
        } else {
            format!("{} {}", self.0 / 100, currency_symbol)
        }
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
