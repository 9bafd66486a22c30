//! Voucher CLI commands
//!
//! Edits the free-form voucher lists of a day. Lines are addressed by the
//! index shown in `till show`.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_totals;
use crate::error::TillResult;
use crate::models::LedgerCategory;
use crate::services::aggregation::daily_totals;
use crate::services::DayService;
use crate::storage::Storage;

use super::day::edit_day;

/// Voucher subcommands
#[derive(Subcommand)]
pub enum VoucherCommands {
    /// Add a voucher line
    Add {
        /// Category (issued, redeemed)
        category: String,
        /// Name on the voucher
        name: String,
        /// Amount
        #[arg(default_value = "0")]
        value: String,
    },
    /// Remove a voucher line
    Remove {
        /// Category (issued, redeemed)
        category: String,
        /// Line index as shown by `show`
        index: usize,
    },
    /// Edit a voucher line
    Edit {
        /// Category (issued, redeemed)
        category: String,
        /// Line index as shown by `show`
        index: usize,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New amount
        #[arg(short, long)]
        value: Option<String>,
    },
}

/// Handle a voucher command
pub fn handle_voucher_command(
    storage: &Storage,
    settings: &Settings,
    date: NaiveDate,
    cmd: VoucherCommands,
) -> TillResult<()> {
    let service = DayService::new(storage, settings);

    let store = match cmd {
        VoucherCommands::Add {
            category,
            name,
            value,
        } => {
            let category: LedgerCategory = category.parse()?;
            let mut index = 0;
            let store = edit_day(&service, date, |store| {
                index = store.add_free_form_item(category, name.trim(), value.trim())?;
                Ok(())
            })?;
            println!("Added {} [{}] {}", category.label(), index, name.trim());
            store
        }

        VoucherCommands::Remove { category, index } => {
            let category: LedgerCategory = category.parse()?;
            let mut removed = None;
            let store = edit_day(&service, date, |store| {
                removed = Some(store.remove_free_form_item(category, index)?);
                Ok(())
            })?;
            if let Some(item) = removed {
                println!("Removed {} [{}] {}", category.label(), index, item.name);
            }
            store
        }

        VoucherCommands::Edit {
            category,
            index,
            name,
            value,
        } => {
            if name.is_none() && value.is_none() {
                println!("No changes specified. Use --name or --value.");
                return Ok(());
            }

            let category: LedgerCategory = category.parse()?;
            let name = name.map(|n| n.trim().to_string());
            let value = value.map(|v| v.trim().to_string());
            let store = edit_day(&service, date, |store| {
                store.update_free_form_item(category, index, name, value)
            })?;
            println!("Updated {} [{}]", category.label(), index);
            store
        }
    };

    print!(
        "{}",
        format_totals(&daily_totals(&store), &settings.currency_symbol)
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TillPaths;
    use tempfile::TempDir;

    fn setup() -> (Storage, Settings, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TillPaths::with_base_dir(temp_dir.path().to_path_buf());
        (Storage::new(paths).unwrap(), Settings::default(), temp_dir)
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    fn add(storage: &Storage, settings: &Settings, name: &str, value: &str) {
        handle_voucher_command(
            storage,
            settings,
            date(),
            VoucherCommands::Add {
                category: "issued".into(),
                name: name.into(),
                value: value.into(),
            },
        )
        .unwrap();
    }

    #[test]
    fn test_add_edit_remove() {
        let (storage, settings, _temp) = setup();
        add(&storage, &settings, "Anna", "10");
        add(&storage, &settings, "Ben", "15");

        handle_voucher_command(
            &storage,
            &settings,
            date(),
            VoucherCommands::Edit {
                category: "issued".into(),
                index: 1,
                name: None,
                value: Some("17,50".into()),
            },
        )
        .unwrap();

        handle_voucher_command(
            &storage,
            &settings,
            date(),
            VoucherCommands::Remove {
                category: "issued".into(),
                index: 0,
            },
        )
        .unwrap();

        let record = storage.load_record(date()).unwrap();
        assert_eq!(record.ledger.vouchers_issued.len(), 1);
        assert_eq!(record.ledger.vouchers_issued[0].name, "Ben");
        assert_eq!(record.ledger.vouchers_issued[0].value, "17,50");
    }

    #[test]
    fn test_remove_out_of_range_keeps_record() {
        let (storage, settings, _temp) = setup();
        add(&storage, &settings, "Anna", "10");

        let err = handle_voucher_command(
            &storage,
            &settings,
            date(),
            VoucherCommands::Remove {
                category: "issued".into(),
                index: 4,
            },
        )
        .unwrap_err();

        assert!(err.is_not_found());
        let record = storage.load_record(date()).unwrap();
        assert_eq!(record.ledger.vouchers_issued.len(), 1);
    }

    #[test]
    fn test_purchases_are_not_free_form() {
        let (storage, settings, _temp) = setup();
        let result = handle_voucher_command(
            &storage,
            &settings,
            date(),
            VoucherCommands::Add {
                category: "purchases".into(),
                name: "Aldi".into(),
                value: "1".into(),
            },
        );
        assert!(result.is_err());
    }
}
