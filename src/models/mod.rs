//! Core data models for till-report
//!
//! This module contains the data structures that describe one day at the
//! register: denominations in the drawer, ledger lines and the persisted
//! day record.

pub mod denomination;
pub mod ledger;
mod lenient;
pub mod money;
pub mod record;

pub use denomination::Denomination;
pub use ledger::{Flow, LedgerCategory, LedgerField, LedgerItem};
pub use money::Amount;
pub use record::{DailyRecord, DenominationEntry, LedgerSnapshot};
pub(crate) use record::StoredDay;
