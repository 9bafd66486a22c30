//! Cash count display formatting
//!
//! Formats the denomination rows of the day as a table.

use crate::models::Denomination;
use crate::services::aggregation::denomination_total;
use crate::services::LineItemStore;

/// Format a count without trailing zeros: `12`, `2.5`
pub fn format_count(count: f64) -> String {
    if count.fract() == 0.0 {
        format!("{:.0}", count)
    } else {
        let s = format!("{:.4}", count);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Format every denomination with count, entered expression and subtotal
pub fn format_denomination_table(store: &LineItemStore, currency_symbol: &str) -> String {
    let label_width = Denomination::ALL
        .iter()
        .map(|d| d.label(currency_symbol).chars().count())
        .max()
        .unwrap_or(5)
        .max(5);

    let expr_width = store
        .denominations()
        .map(|(_, entry)| entry.expression.chars().count())
        .max()
        .unwrap_or(7)
        .max(7);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<label_width$}  {:>8}  {:<expr_width$}  {:>14}\n",
        "Stück",
        "Anzahl",
        "Eingabe",
        "Summe",
        label_width = label_width,
        expr_width = expr_width,
    ));
    output.push_str(&format!(
        "{:-<label_width$}  {:->8}  {:-<expr_width$}  {:->14}\n",
        "",
        "",
        "",
        "",
        label_width = label_width,
        expr_width = expr_width,
    ));

    for (denomination, entry) in store.denominations() {
        output.push_str(&format!(
            "{:<label_width$}  {:>8}  {:<expr_width$}  {:>14}\n",
            denomination.label(currency_symbol),
            format_count(entry.count),
            entry.expression,
            denomination
                .subtotal(entry.count)
                .format_with_symbol(currency_symbol),
            label_width = label_width,
            expr_width = expr_width,
        ));
    }

    output.push_str(&format!(
        "{:-<label_width$}  {:->8}  {:-<expr_width$}  {:->14}\n",
        "",
        "",
        "",
        "",
        label_width = label_width,
        expr_width = expr_width,
    ));
    output.push_str(&format!(
        "{:<label_width$}  {:>8}  {:<expr_width$}  {:>14}\n",
        "Kassenbestand",
        "",
        "",
        denomination_total(store).format_with_symbol(currency_symbol),
        label_width = label_width,
        expr_width = expr_width,
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0.0), "0");
        assert_eq!(format_count(12.0), "12");
        assert_eq!(format_count(2.5), "2.5");
        assert_eq!(format_count(1.0 / 3.0), "0.3333");
    }

    #[test]
    fn test_table_lists_every_denomination() {
        let mut store = LineItemStore::from_settings(&Settings::default());
        store
            .set_denomination_expression(Denomination::from_key("20").unwrap(), "3+2")
            .unwrap();
        store
            .set_denomination_expression(Denomination::from_key("0.5").unwrap(), "4")
            .unwrap();

        let table = format_denomination_table(&store, "€");

        // header, separator, 15 rows, separator, total
        assert_eq!(table.lines().count(), 19);
        assert!(table.contains("500 €"));
        assert!(table.contains("1 Cent"));
        assert!(table.contains("3+2"));
        assert!(table.contains("100.00 €"));
        assert!(table.contains("2.00 €"));
        assert!(table.lines().last().unwrap().ends_with("102.00 €"));
    }
}
