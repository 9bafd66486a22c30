//! Ledger lines for the daily cash report
//!
//! A day's ledger has fixed scalar fields (card payments, deposits, ...) and
//! three categories of itemized lines. Every field and category is tagged as
//! income or expense; the grand total is income minus expenses.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TillError;

/// Whether a ledger line adds to or subtracts from the day's total
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Income,
    Expense,
}

/// A named ledger line
///
/// `value` holds the raw text the user entered. It is parsed only when totals
/// are computed, so a bad entry never destroys what was typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerItem {
    #[serde(default, deserialize_with = "super::lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "super::lenient::text")]
    pub value: String,
}

impl LedgerItem {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Groups of itemized ledger lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedgerCategory {
    /// Goods bought for the shop, one fixed line per vendor
    Purchases,
    /// Vouchers sold today (free-form)
    VoucherIssued,
    /// Vouchers redeemed today (free-form)
    VoucherRedeemed,
}

impl LedgerCategory {
    pub const ALL: [LedgerCategory; 3] = [
        LedgerCategory::Purchases,
        LedgerCategory::VoucherIssued,
        LedgerCategory::VoucherRedeemed,
    ];

    pub fn flow(&self) -> Flow {
        match self {
            Self::Purchases | Self::VoucherIssued => Flow::Expense,
            Self::VoucherRedeemed => Flow::Income,
        }
    }

    /// Free-form categories allow adding and removing lines
    pub fn is_free_form(&self) -> bool {
        !matches!(self, Self::Purchases)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Purchases => "Wareneinkäufe",
            Self::VoucherIssued => "Gutschein (Ausgabe)",
            Self::VoucherRedeemed => "Gutschein (Einnahme)",
        }
    }
}

impl fmt::Display for LedgerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Purchases => write!(f, "purchases"),
            Self::VoucherIssued => write!(f, "voucher-issued"),
            Self::VoucherRedeemed => write!(f, "voucher-redeemed"),
        }
    }
}

impl FromStr for LedgerCategory {
    type Err = TillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "purchases" | "purchase" => Ok(Self::Purchases),
            "voucher-issued" | "issued" => Ok(Self::VoucherIssued),
            "voucher-redeemed" | "redeemed" => Ok(Self::VoucherRedeemed),
            other => Err(TillError::Validation(format!(
                "Unknown ledger category '{}'",
                other
            ))),
        }
    }
}

/// Single-value ledger entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedgerField {
    /// Card (EC) payments taken, not in the drawer
    CardPayment,
    /// Cash deposited to the bank
    Deposit,
    /// Cash left over from the previous day
    PriorDayResidual,
    /// Cash takings
    CashInflow,
    /// Bottle deposit refunds received
    DepositReturn,
}

impl LedgerField {
    pub const ALL: [LedgerField; 5] = [
        LedgerField::CardPayment,
        LedgerField::Deposit,
        LedgerField::PriorDayResidual,
        LedgerField::CashInflow,
        LedgerField::DepositReturn,
    ];

    pub fn flow(&self) -> Flow {
        match self {
            Self::CardPayment | Self::Deposit => Flow::Expense,
            Self::PriorDayResidual | Self::CashInflow | Self::DepositReturn => Flow::Income,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::CardPayment => "EC-Karte",
            Self::Deposit => "Einzahlung",
            Self::PriorDayResidual => "abzüglich Kassennebenbestand des Vortages",
            Self::CashInflow => "Kasseneingang",
            Self::DepositReturn => "Pfandrückgabe Lidl",
        }
    }
}

impl fmt::Display for LedgerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CardPayment => write!(f, "card-payment"),
            Self::Deposit => write!(f, "deposit"),
            Self::PriorDayResidual => write!(f, "prior-day-residual"),
            Self::CashInflow => write!(f, "cash-inflow"),
            Self::DepositReturn => write!(f, "deposit-return"),
        }
    }
}

impl FromStr for LedgerField {
    type Err = TillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "card-payment" | "card" => Ok(Self::CardPayment),
            "deposit" => Ok(Self::Deposit),
            "prior-day-residual" | "residual" => Ok(Self::PriorDayResidual),
            "cash-inflow" | "inflow" => Ok(Self::CashInflow),
            "deposit-return" | "return" => Ok(Self::DepositReturn),
            other => Err(TillError::Validation(format!(
                "Unknown ledger field '{}'",
                other
            ))),
        }
    }
}
