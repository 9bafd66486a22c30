//! Day CLI commands
//!
//! Implements the commands that read or edit one day: cash count, ledger
//! fields, purchase lines and reports. Every editing command loads the day,
//! applies the change, saves and prints the result. A failed change is
//! returned as an error before anything is saved.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{
    format_count, format_date, format_denomination_table, format_ledger_report, format_totals,
};
use crate::error::TillResult;
use crate::expression::ExpressionEvaluator;
use crate::models::{Denomination, LedgerField};
use crate::services::aggregation::{daily_totals, denomination_total};
use crate::services::{DayService, LineItemStore};
use crate::storage::Storage;

/// Day subcommands
#[derive(Subcommand)]
pub enum DayCommands {
    /// Show the cash count and ledger for the day
    Show,

    /// Set the count of a denomination from an expression
    Count {
        /// Denomination value (e.g., "50", "0.2", "0,05")
        denomination: String,
        /// Count or arithmetic expression (e.g., "12", "3*20+4")
        expression: String,
    },

    /// Clear the count of a denomination
    Clear {
        /// Denomination value
        denomination: String,
    },

    /// Set a ledger field
    Set {
        /// Field (card-payment, deposit, prior-day-residual, cash-inflow, deposit-return)
        field: String,
        /// Amount (e.g., "120,50")
        value: String,
    },

    /// Set the amount of a purchase line
    Purchase {
        /// Vendor name, as configured
        vendor: String,
        /// Amount
        value: String,
    },

    /// Reset the day to an empty count and ledger
    Reset,

    /// Show only the totals
    Total,

    /// Evaluate an expression without changing anything
    Calc {
        /// Arithmetic expression
        expression: String,
    },

    /// List days with saved records
    Days,
}

/// Handle a day command
pub fn handle_day_command(
    storage: &Storage,
    settings: &Settings,
    date: NaiveDate,
    cmd: DayCommands,
) -> TillResult<()> {
    let service = DayService::new(storage, settings);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        DayCommands::Show => {
            let store = service.open(date);
            let totals = daily_totals(&store);
            println!("Kassenbericht {}", format_date(date, &settings.date_format));
            if !storage.records.exists(date) {
                println!("(no saved record for this day)");
            }
            println!();
            print!("{}", format_denomination_table(&store, symbol));
            println!();
            print!("{}", format_ledger_report(&store, &totals, symbol));
        }

        DayCommands::Count {
            denomination,
            expression,
        } => {
            let denomination = Denomination::parse(&denomination)?;
            let store = edit_day(&service, date, |store| {
                store.set_denomination_expression(denomination, &expression)?;
                Ok(())
            })?;

            let entry = store.denomination(denomination);
            println!(
                "{}: {} x = {}",
                denomination.label(symbol),
                format_count(entry.count),
                denomination
                    .subtotal(entry.count)
                    .format_with_symbol(symbol)
            );
            println!(
                "Kassenbestand: {}",
                denomination_total(&store).format_with_symbol(symbol)
            );
        }

        DayCommands::Clear { denomination } => {
            let denomination = Denomination::parse(&denomination)?;
            let store = edit_day(&service, date, |store| {
                store.clear_denomination(denomination);
                Ok(())
            })?;

            println!("Cleared {}", denomination.label(symbol));
            println!(
                "Kassenbestand: {}",
                denomination_total(&store).format_with_symbol(symbol)
            );
        }

        DayCommands::Set { field, value } => {
            let field: LedgerField = field.parse()?;
            let store = edit_day(&service, date, |store| {
                store.set_field(field, value.trim());
                Ok(())
            })?;

            println!("{}: {}", field.label(), store.field(field));
            print!("{}", format_totals(&daily_totals(&store), symbol));
        }

        DayCommands::Purchase { vendor, value } => {
            let store = edit_day(&service, date, |store| {
                store.set_purchase(vendor.trim(), value.trim())
            })?;

            println!("{}: {}", vendor.trim(), value.trim());
            print!("{}", format_totals(&daily_totals(&store), symbol));
        }

        DayCommands::Reset => {
            edit_day(&service, date, |store| {
                store.reset_all();
                Ok(())
            })?;
            println!(
                "Reset day {}",
                format_date(date, &settings.date_format)
            );
        }

        DayCommands::Total => {
            let store = service.open(date);
            print!("{}", format_totals(&daily_totals(&store), symbol));
        }

        DayCommands::Calc { expression } => {
            let value = ExpressionEvaluator::from_settings(settings).evaluate(&expression)?;
            println!("{}", format_count(value));
        }

        DayCommands::Days => {
            let dates = service.saved_dates()?;
            if dates.is_empty() {
                println!("No saved days.");
            }
            for day in dates {
                println!("{}", format_date(day, &settings.date_format));
            }
        }
    }

    Ok(())
}

/// Load the day, apply `edit`, and save only if the edit succeeded
///
/// A save whose record reached disk but whose audit entry did not is
/// reported as a warning, not a failure.
pub(crate) fn edit_day<F>(service: &DayService, date: NaiveDate, edit: F) -> TillResult<LineItemStore>
where
    F: FnOnce(&mut LineItemStore) -> TillResult<()>,
{
    let mut store = service.open(date);
    edit(&mut store)?;
    match service.save(&store, date) {
        Ok(_) => {}
        Err(e) if e.record_was_saved() => eprintln!("Warning: {}", e),
        Err(e) => return Err(e),
    }
    Ok(store)
}
