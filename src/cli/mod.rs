//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod day;
pub mod log;
pub mod voucher;

pub use day::{handle_day_command, DayCommands};
pub use log::handle_log_command;
pub use voucher::{handle_voucher_command, VoucherCommands};

use chrono::{Local, NaiveDate};

use crate::error::{TillError, TillResult};

/// Parse a `--date` argument: `YYYY-MM-DD`, `DD.MM.YYYY`, or `today`
pub fn parse_date(input: &str) -> TillResult<NaiveDate> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("today") {
        return Ok(today());
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(input, "%d.%m.%Y"))
        .map_err(|_| {
            TillError::Validation(format!(
                "Invalid date '{}'. Use YYYY-MM-DD or DD.MM.YYYY",
                input
            ))
        })
}

/// Resolve an optional `--date` argument, defaulting to today
pub fn resolve_date(input: Option<&str>) -> TillResult<NaiveDate> {
    match input {
        Some(s) => parse_date(s),
        None => Ok(today()),
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
