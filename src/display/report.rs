//! Daily report display formatting
//!
//! Formats the ledger of a day (fixed fields, itemized categories) and the
//! resulting totals.

use chrono::NaiveDate;

use crate::models::{Amount, LedgerCategory, LedgerField};
use crate::services::aggregation::DailyTotals;
use crate::services::LineItemStore;

const AMOUNT_WIDTH: usize = 14;

/// Format a date with a strftime pattern, falling back to ISO on a bad pattern
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    match write!(out, "{}", date.format(pattern)) {
        Ok(()) => out,
        Err(_) => date.format("%Y-%m-%d").to_string(),
    }
}

fn label_width(store: &LineItemStore) -> usize {
    let fields = LedgerField::ALL.iter().map(|f| f.label().chars().count());
    let items = LedgerCategory::ALL
        .iter()
        .flat_map(|c| store.items(*c))
        .map(|item| item.name.chars().count() + 7);
    fields.chain(items).max().unwrap_or(20).max(20)
}

fn amount_row(output: &mut String, label: &str, amount: Amount, symbol: &str, width: usize) {
    output.push_str(&format!(
        "{:<width$}  {:>amount_width$}\n",
        label,
        amount.format_with_symbol(symbol),
        width = width,
        amount_width = AMOUNT_WIDTH,
    ));
}

fn separator(output: &mut String, width: usize) {
    output.push_str(&format!(
        "{:-<width$}  {:->amount_width$}\n",
        "",
        "",
        width = width,
        amount_width = AMOUNT_WIDTH,
    ));
}

/// Format the full ledger with subtotals and totals
pub fn format_ledger_report(
    store: &LineItemStore,
    totals: &DailyTotals,
    currency_symbol: &str,
) -> String {
    let width = label_width(store);
    let mut output = String::new();

    for field in LedgerField::ALL {
        let raw = store.field(field);
        let label = if store.parse_value(raw).is_none() {
            format!("{} (?)", field.label())
        } else {
            field.label().to_string()
        };
        amount_row(&mut output, &label, totals.field(field), currency_symbol, width);
    }

    for category in LedgerCategory::ALL {
        output.push('\n');
        output.push_str(category.label());
        output.push('\n');

        let items = store.items(category);
        if items.is_empty() {
            output.push_str("  (keine Einträge)\n");
        }
        for (index, item) in items.iter().enumerate() {
            let amount = store.parse_value(&item.value);
            let label = if category.is_free_form() {
                format!("  [{}] {}", index, item.name)
            } else {
                format!("  {}", item.name)
            };
            match amount {
                Some(amount) => amount_row(&mut output, &label, amount, currency_symbol, width),
                None => output.push_str(&format!(
                    "{:<width$}  {:>amount_width$}\n",
                    label,
                    format!("'{}' ?", item.value),
                    width = width,
                    amount_width = AMOUNT_WIDTH,
                )),
            }
        }
        amount_row(
            &mut output,
            "  Summe",
            totals.category(category),
            currency_symbol,
            width,
        );
    }

    output.push('\n');
    output.push_str(&format_totals_with_width(totals, currency_symbol, width));
    output
}

/// Format only the totals block
pub fn format_totals(totals: &DailyTotals, currency_symbol: &str) -> String {
    format_totals_with_width(totals, currency_symbol, 20)
}

fn format_totals_with_width(totals: &DailyTotals, symbol: &str, width: usize) -> String {
    let mut output = String::new();

    separator(&mut output, width);
    amount_row(&mut output, "Einnahmen", totals.total_income, symbol, width);
    amount_row(&mut output, "Ausgaben", totals.total_expenses, symbol, width);
    amount_row(&mut output, "Gesamt", totals.grand_total, symbol, width);
    separator(&mut output, width);
    amount_row(&mut output, "Kassenbestand", totals.cash_on_hand, symbol, width);

    if totals.invalid_entries > 0 {
        output.push_str(&format!(
            "\nHinweis: {} ungültige Eingabe(n) als 0 gewertet\n",
            totals.invalid_entries
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::services::aggregation::daily_totals;

    fn store() -> LineItemStore {
        LineItemStore::from_settings(&Settings::default())
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        assert_eq!(format_date(date, "%d.%m.%Y"), "04.03.2025");
        assert_eq!(format_date(date, "%Y-%m-%d"), "2025-03-04");
    }

    #[test]
    fn test_report_sections() {
        let mut store = store();
        store.set_field(LedgerField::CashInflow, "500");
        store.set_purchase("Netto", "12,30").unwrap();
        store
            .add_free_form_item(LedgerCategory::VoucherIssued, "Mia", "25")
            .unwrap();

        let totals = daily_totals(&store);
        let report = format_ledger_report(&store, &totals, "€");

        assert!(report.contains("Kasseneingang"));
        assert!(report.contains("Wareneinkäufe"));
        assert!(report.contains("  Netto"));
        assert!(report.contains("12.30 €"));
        assert!(report.contains("[0] Mia"));
        assert!(report.contains("(keine Einträge)"));
        assert!(report.contains("Gesamt"));
        assert!(report.contains("462.70 €"));
        assert!(!report.contains("Hinweis"));
    }

    #[test]
    fn test_report_flags_invalid_values() {
        let mut store = store();
        store.set_field(LedgerField::Deposit, "abc");
        store
            .add_free_form_item(LedgerCategory::VoucherRedeemed, "Tom", "x1")
            .unwrap();

        let totals = daily_totals(&store);
        let report = format_ledger_report(&store, &totals, "€");

        assert!(report.contains("Einzahlung (?)"));
        assert!(report.contains("'x1' ?"));
        assert!(report.contains("Hinweis: 2 ungültige Eingabe(n)"));
    }

    #[test]
    fn test_format_totals() {
        let mut store = store();
        store.set_field(LedgerField::PriorDayResidual, "100");
        store.set_field(LedgerField::CardPayment, "40");

        let text = format_totals(&daily_totals(&store), "€");
        let gesamt = text.lines().find(|l| l.starts_with("Gesamt")).unwrap();
        assert!(gesamt.ends_with("60.00 €"));
    }
}
