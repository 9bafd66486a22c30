//! Display formatting for terminal output
//!
//! Provides utilities for formatting the day's cash count and ledger as
//! plain-text tables.

pub mod denominations;
pub mod report;

pub use denominations::{format_count, format_denomination_table};
pub use report::{format_date, format_ledger_report, format_totals};
