//! The persisted snapshot of one day
//!
//! Every field carries `#[serde(default)]` so older or partial files load with
//! the missing parts at their defaults, and unknown keys are ignored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ledger::{LedgerCategory, LedgerField, LedgerItem};
use super::lenient;

/// Counted quantity of one denomination
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DenominationEntry {
    /// Last successfully evaluated result of `expression`
    #[serde(default, deserialize_with = "lenient::number")]
    pub count: f64,

    /// Raw calculator input; empty means never set
    #[serde(default, deserialize_with = "lenient::text")]
    pub expression: String,
}

impl DenominationEntry {
    pub fn new(count: f64, expression: impl Into<String>) -> Self {
        Self {
            count,
            expression: expression.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.expression.is_empty()
    }
}

/// Ledger half of a day record
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerSnapshot {
    pub purchases: Vec<LedgerItem>,
    pub vouchers_issued: Vec<LedgerItem>,
    pub vouchers_redeemed: Vec<LedgerItem>,
    #[serde(deserialize_with = "lenient::text")]
    pub card_payment: String,
    #[serde(deserialize_with = "lenient::text")]
    pub deposit: String,
    #[serde(deserialize_with = "lenient::text")]
    pub prior_day_residual: String,
    #[serde(deserialize_with = "lenient::text")]
    pub cash_inflow: String,
    #[serde(deserialize_with = "lenient::text")]
    pub deposit_return: String,
}

impl LedgerSnapshot {
    pub fn field(&self, field: LedgerField) -> &str {
        match field {
            LedgerField::CardPayment => &self.card_payment,
            LedgerField::Deposit => &self.deposit,
            LedgerField::PriorDayResidual => &self.prior_day_residual,
            LedgerField::CashInflow => &self.cash_inflow,
            LedgerField::DepositReturn => &self.deposit_return,
        }
    }

    pub fn field_mut(&mut self, field: LedgerField) -> &mut String {
        match field {
            LedgerField::CardPayment => &mut self.card_payment,
            LedgerField::Deposit => &mut self.deposit,
            LedgerField::PriorDayResidual => &mut self.prior_day_residual,
            LedgerField::CashInflow => &mut self.cash_inflow,
            LedgerField::DepositReturn => &mut self.deposit_return,
        }
    }

    pub fn items(&self, category: LedgerCategory) -> &[LedgerItem] {
        match category {
            LedgerCategory::Purchases => &self.purchases,
            LedgerCategory::VoucherIssued => &self.vouchers_issued,
            LedgerCategory::VoucherRedeemed => &self.vouchers_redeemed,
        }
    }

    pub fn items_mut(&mut self, category: LedgerCategory) -> &mut Vec<LedgerItem> {
        match category {
            LedgerCategory::Purchases => &mut self.purchases,
            LedgerCategory::VoucherIssued => &mut self.vouchers_issued,
            LedgerCategory::VoucherRedeemed => &mut self.vouchers_redeemed,
        }
    }
}

/// Full state of one calendar day, the unit of persistence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    pub date: NaiveDate,

    /// Keyed by denomination key (`"500"`, `"0.5"`, ...)
    #[serde(default)]
    pub denominations: BTreeMap<String, DenominationEntry>,

    #[serde(default)]
    pub ledger: LedgerSnapshot,
}

fn default_schema_version() -> u32 {
    1
}

impl DailyRecord {
    /// An empty record for a date
    pub fn new(date: NaiveDate) -> Self {
        Self {
            schema_version: default_schema_version(),
            date,
            denominations: BTreeMap::new(),
            ledger: LedgerSnapshot::default(),
        }
    }
}

/// A day file as read from disk
///
/// The date comes from the file name, so a stored `date` key is ignored and
/// may be missing.
#[derive(Debug, Deserialize)]
pub(crate) struct StoredDay {
    #[serde(default = "default_schema_version")]
    schema_version: u32,

    #[serde(default)]
    denominations: BTreeMap<String, DenominationEntry>,

    #[serde(default)]
    ledger: LedgerSnapshot,
}

impl StoredDay {
    pub(crate) fn into_record(self, date: NaiveDate) -> DailyRecord {
        DailyRecord {
            schema_version: self.schema_version,
            date,
            denominations: self.denominations,
            ledger: self.ledger,
        }
    }
}
