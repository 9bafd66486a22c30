//! In-memory state of the day being edited
//!
//! `LineItemStore` owns every denomination count and ledger line. The
//! presentation layer mutates it only through the methods here, folds it into
//! a [`DailyRecord`] with [`LineItemStore::snapshot`] and unfolds a loaded
//! record with [`LineItemStore::restore`].

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::config::Settings;
use crate::error::{TillError, TillResult};
use crate::expression::ExpressionEvaluator;
use crate::models::{
    Amount, DailyRecord, Denomination, DenominationEntry, LedgerCategory, LedgerField, LedgerItem,
    LedgerSnapshot,
};

/// Default value of a fixed purchase line and of a newly added free-form line
const DEFAULT_ITEM_VALUE: &str = "0";

/// Mutable state for all denominations and ledger lines of one day
#[derive(Debug, Clone)]
pub struct LineItemStore {
    evaluator: ExpressionEvaluator,
    vendors: Vec<String>,
    denominations: BTreeMap<Denomination, DenominationEntry>,
    ledger: LedgerSnapshot,
}

impl LineItemStore {
    /// Create a store in its reset state
    pub fn new(evaluator: ExpressionEvaluator, vendors: Vec<String>) -> Self {
        let mut store = Self {
            evaluator,
            vendors,
            denominations: BTreeMap::new(),
            ledger: LedgerSnapshot::default(),
        };
        store.reset_all();
        store
    }

    /// Create a store using the configured vendors and decimal separator
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            ExpressionEvaluator::from_settings(settings),
            settings.purchase_vendors.clone(),
        )
    }

    // ------------------------------------------------------------------
    // Denominations
    // ------------------------------------------------------------------

    /// Entries in display order (largest denomination first)
    pub fn denominations(&self) -> impl Iterator<Item = (Denomination, &DenominationEntry)> + '_ {
        Denomination::ALL
            .into_iter()
            .filter_map(move |d| self.denominations.get(&d).map(|e| (d, e)))
    }

    pub fn denomination(&self, denomination: Denomination) -> &DenominationEntry {
        // every denomination is inserted by reset_all
        &self.denominations[&denomination]
    }

    /// Evaluate `expression` and store it as the count for `denomination`
    ///
    /// On failure the previous entry is left untouched and the evaluator's
    /// error is returned. A count whose subtotal would leave the amount range
    /// fails as an invalid expression.
    pub fn set_denomination_expression(
        &mut self,
        denomination: Denomination,
        expression: &str,
    ) -> TillResult<f64> {
        let count = self.evaluator.evaluate(expression)?;
        if denomination.checked_subtotal(count).is_none() {
            return Err(TillError::InvalidExpression(format!(
                "count {} is too large for {}",
                expression.trim(),
                denomination
            )));
        }
        self.denominations.insert(
            denomination,
            DenominationEntry::new(count, expression.trim()),
        );
        Ok(count)
    }

    /// Return one denomination to its unset state
    pub fn clear_denomination(&mut self, denomination: Denomination) {
        self.denominations
            .insert(denomination, DenominationEntry::default());
    }

    // ------------------------------------------------------------------
    // Ledger
    // ------------------------------------------------------------------

    /// Parse a stored ledger value with the configured decimal separator
    pub fn parse_value(&self, raw: &str) -> Option<Amount> {
        Amount::parse_lenient(raw, self.evaluator.decimal_comma())
    }

    /// Whether `,` is accepted as decimal separator
    pub fn decimal_comma(&self) -> bool {
        self.evaluator.decimal_comma()
    }

    pub fn vendors(&self) -> &[String] {
        &self.vendors
    }

    pub fn ledger(&self) -> &LedgerSnapshot {
        &self.ledger
    }

    pub fn field(&self, field: LedgerField) -> &str {
        self.ledger.field(field)
    }

    /// Set a scalar field to raw user text
    pub fn set_field(&mut self, field: LedgerField, value: impl Into<String>) {
        *self.ledger.field_mut(field) = value.into();
    }

    pub fn items(&self, category: LedgerCategory) -> &[LedgerItem] {
        self.ledger.items(category)
    }

    /// Set the value of a fixed purchase line
    pub fn set_purchase(&mut self, vendor: &str, value: impl Into<String>) -> TillResult<()> {
        let item = self
            .ledger
            .purchases
            .iter_mut()
            .find(|item| item.name == vendor)
            .ok_or_else(|| TillError::vendor_not_found(vendor))?;
        item.value = value.into();
        Ok(())
    }

    /// Append a line to a free-form category; returns its index
    pub fn add_free_form_item(
        &mut self,
        category: LedgerCategory,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> TillResult<usize> {
        let items = self.free_form_items_mut(category)?;
        items.push(LedgerItem::new(name, value));
        Ok(items.len() - 1)
    }

    /// Append a blank line (`name = ""`, `value = "0"`)
    pub fn add_blank_item(&mut self, category: LedgerCategory) -> TillResult<usize> {
        self.add_free_form_item(category, "", DEFAULT_ITEM_VALUE)
    }

    /// Remove the line at `index` from a free-form category
    pub fn remove_free_form_item(
        &mut self,
        category: LedgerCategory,
        index: usize,
    ) -> TillResult<LedgerItem> {
        let items = self.free_form_items_mut(category)?;
        if index >= items.len() {
            return Err(TillError::item_not_found(format!("{} #{}", category, index)));
        }
        Ok(items.remove(index))
    }

    /// Edit a free-form line in place; `None` keeps the current part
    pub fn update_free_form_item(
        &mut self,
        category: LedgerCategory,
        index: usize,
        name: Option<String>,
        value: Option<String>,
    ) -> TillResult<()> {
        let items = self.free_form_items_mut(category)?;
        let item = items
            .get_mut(index)
            .ok_or_else(|| TillError::item_not_found(format!("{} #{}", category, index)))?;
        if let Some(name) = name {
            item.name = name;
        }
        if let Some(value) = value {
            item.value = value;
        }
        Ok(())
    }

    fn free_form_items_mut(&mut self, category: LedgerCategory) -> TillResult<&mut Vec<LedgerItem>> {
        if !category.is_free_form() {
            return Err(TillError::Validation(format!(
                "'{}' has fixed lines; lines cannot be added or removed",
                category
            )));
        }
        Ok(self.ledger.items_mut(category))
    }

    // ------------------------------------------------------------------
    // Reset, snapshot, restore
    // ------------------------------------------------------------------

    /// Return everything to defaults
    ///
    /// Denominations become `{0, ""}`, scalar fields empty, fixed purchase
    /// lines `"0"`, free-form lists empty.
    pub fn reset_all(&mut self) {
        self.denominations = Denomination::ALL
            .iter()
            .map(|d| (*d, DenominationEntry::default()))
            .collect();

        self.ledger = LedgerSnapshot {
            purchases: self
                .vendors
                .iter()
                .map(|vendor| LedgerItem::new(vendor.clone(), DEFAULT_ITEM_VALUE))
                .collect(),
            ..LedgerSnapshot::default()
        };
    }

    /// Capture the current state as the record for `date`
    pub fn snapshot(&self, date: NaiveDate) -> DailyRecord {
        let mut record = DailyRecord::new(date);
        record.denominations = self
            .denominations
            .iter()
            .map(|(d, entry)| (d.key(), entry.clone()))
            .collect();
        record.ledger = self.ledger.clone();
        record
    }

    /// Replace the current state with `record`, or reset if there is none
    ///
    /// Unknown denomination keys and purchase lines for vendors that are not
    /// configured are ignored; anything missing keeps its reset default.
    pub fn restore(&mut self, record: Option<&DailyRecord>) {
        self.reset_all();

        let Some(record) = record else {
            return;
        };

        for (key, entry) in &record.denominations {
            let Some(denomination) = Denomination::from_key(key) else {
                continue;
            };
            let entry = if entry.expression.trim().is_empty()
                || denomination.checked_subtotal(entry.count).is_none()
            {
                DenominationEntry::default()
            } else {
                entry.clone()
            };
            self.denominations.insert(denomination, entry);
        }

        for stored in &record.ledger.purchases {
            if let Some(item) = self
                .ledger
                .purchases
                .iter_mut()
                .find(|item| item.name == stored.name)
            {
                item.value = stored.value.clone();
            }
        }

        for field in LedgerField::ALL {
            self.set_field(field, record.ledger.field(field));
        }

        self.ledger.vouchers_issued = record.ledger.vouchers_issued.clone();
        self.ledger.vouchers_redeemed = record.ledger.vouchers_redeemed.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> LineItemStore {
        LineItemStore::from_settings(&Settings::default())
    }

    fn denom(key: &str) -> Denomination {
        Denomination::from_key(key).unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    #[test]
    fn test_new_store_is_reset() {
        let store = store();
        assert_eq!(store.denominations().count(), 15);
        assert!(store.denominations().all(|(_, e)| e.count == 0.0 && e.is_empty()));
        assert_eq!(store.items(LedgerCategory::Purchases).len(), 5);
        assert!(store
            .items(LedgerCategory::Purchases)
            .iter()
            .all(|i| i.value == "0"));
        assert!(store.items(LedgerCategory::VoucherIssued).is_empty());
        assert_eq!(store.field(LedgerField::CardPayment), "");
    }

    #[test]
    fn test_denominations_in_display_order() {
        let store = store();
        let first = store.denominations().next().unwrap().0;
        let last = store.denominations().last().unwrap().0;
        assert_eq!(first.key(), "500");
        assert_eq!(last.key(), "0.01");
    }

    #[test]
    fn test_set_denomination_expression() {
        let mut store = store();
        let count = store
            .set_denomination_expression(denom("20"), " 10*3+2 ")
            .unwrap();

        assert_eq!(count, 32.0);
        let entry = store.denomination(denom("20"));
        assert_eq!(entry.count, 32.0);
        assert_eq!(entry.expression, "10*3+2");
    }

    #[test]
    fn test_invalid_expression_keeps_prior_state() {
        let mut store = store();
        store.set_denomination_expression(denom("5"), "4").unwrap();

        let err = store
            .set_denomination_expression(denom("5"), "4+abc")
            .unwrap_err();
        assert!(err.is_expression_error());

        let err = store.set_denomination_expression(denom("5"), "1/0").unwrap_err();
        assert!(matches!(err, TillError::DivisionByZero));

        let entry = store.denomination(denom("5"));
        assert_eq!(entry.count, 4.0);
        assert_eq!(entry.expression, "4");
    }

    #[test]
    fn test_count_with_overflowing_subtotal_is_rejected() {
        let mut store = store();
        store.set_denomination_expression(denom("500"), "2").unwrap();

        let huge = format!("1{}", "0".repeat(307));
        let err = store
            .set_denomination_expression(denom("500"), &huge)
            .unwrap_err();
        assert!(matches!(err, TillError::InvalidExpression(_)));

        let entry = store.denomination(denom("500"));
        assert_eq!(entry.count, 2.0);
        assert_eq!(entry.expression, "2");
    }

    #[test]
    fn test_parse_value_follows_decimal_setting() {
        let comma = store();
        assert_eq!(comma.parse_value("1,5").unwrap().value(), 1.5);

        let settings = Settings {
            decimal_comma: false,
            ..Settings::default()
        };
        let point = LineItemStore::from_settings(&settings);
        assert!(point.parse_value("1,5").is_none());
        assert_eq!(point.parse_value("1.5").unwrap().value(), 1.5);
    }

    #[test]
    fn test_clear_denomination() {
        let mut store = store();
        store.set_denomination_expression(denom("0.5"), "12").unwrap();
        store.clear_denomination(denom("0.5"));
        assert_eq!(store.denomination(denom("0.5")), &DenominationEntry::default());
    }

    #[test]
    fn test_set_purchase() {
        let mut store = store();
        store.set_purchase("Lidl", "23.40").unwrap();
        assert_eq!(store.items(LedgerCategory::Purchases)[1].value, "23.40");

        let err = store.set_purchase("Aldi", "5").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_free_form_add_update_remove() {
        let mut store = store();
        let first = store
            .add_free_form_item(LedgerCategory::VoucherIssued, "Anna", "20")
            .unwrap();
        let second = store.add_blank_item(LedgerCategory::VoucherIssued).unwrap();
        store
            .add_free_form_item(LedgerCategory::VoucherIssued, "Anna", "5")
            .unwrap();
        assert_eq!((first, second), (0, 1));

        let items = store.items(LedgerCategory::VoucherIssued);
        assert_eq!(items.len(), 3);
        assert_eq!(items[1], LedgerItem::new("", "0"));

        store
            .update_free_form_item(
                LedgerCategory::VoucherIssued,
                1,
                Some("Ben".into()),
                None,
            )
            .unwrap();
        assert_eq!(
            store.items(LedgerCategory::VoucherIssued)[1],
            LedgerItem::new("Ben", "0")
        );

        let removed = store
            .remove_free_form_item(LedgerCategory::VoucherIssued, 0)
            .unwrap();
        assert_eq!(removed, LedgerItem::new("Anna", "20"));
        let names: Vec<_> = store
            .items(LedgerCategory::VoucherIssued)
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, vec!["Ben", "Anna"]);
    }

    #[test]
    fn test_free_form_errors() {
        let mut store = store();
        assert!(store
            .remove_free_form_item(LedgerCategory::VoucherRedeemed, 0)
            .unwrap_err()
            .is_not_found());
        assert!(matches!(
            store.add_blank_item(LedgerCategory::Purchases),
            Err(TillError::Validation(_))
        ));
        assert!(store
            .update_free_form_item(LedgerCategory::VoucherRedeemed, 3, None, None)
            .is_err());
    }

    #[test]
    fn test_reset_all() {
        let mut store = store();
        store.set_denomination_expression(denom("100"), "3").unwrap();
        store.set_field(LedgerField::Deposit, "200");
        store.set_purchase("Toom", "12").unwrap();
        store
            .add_free_form_item(LedgerCategory::VoucherRedeemed, "X", "10")
            .unwrap();

        store.reset_all();

        assert_eq!(store.denomination(denom("100")).count, 0.0);
        assert_eq!(store.field(LedgerField::Deposit), "");
        assert_eq!(store.items(LedgerCategory::Purchases).len(), 5);
        assert_eq!(store.items(LedgerCategory::Purchases)[4].value, "0");
        assert!(store.items(LedgerCategory::VoucherRedeemed).is_empty());
    }

    #[test]
    fn test_snapshot_restore_round_trip() {
        let mut store = store();
        store.set_denomination_expression(denom("50"), "2+1").unwrap();
        store.set_denomination_expression(denom("0.01"), "3,5").unwrap();
        store.set_field(LedgerField::CashInflow, "512.30");
        store.set_purchase("Netto", "8,99").unwrap();
        store
            .add_free_form_item(LedgerCategory::VoucherIssued, "Gift", "25")
            .unwrap();

        let record = store.snapshot(date());

        let mut other = LineItemStore::from_settings(&Settings::default());
        other.restore(Some(&record));

        assert_eq!(other.snapshot(date()), record);
        assert_eq!(record.denominations.len(), 15);
        assert_eq!(record.denominations["50"].count, 3.0);
    }

    #[test]
    fn test_restore_none_resets() {
        let mut store = store();
        store.set_denomination_expression(denom("10"), "7").unwrap();
        store
            .add_free_form_item(LedgerCategory::VoucherIssued, "A", "1")
            .unwrap();

        store.restore(None);

        let fresh = LineItemStore::from_settings(&Settings::default());
        assert_eq!(store.snapshot(date()), fresh.snapshot(date()));
    }

    #[test]
    fn test_restore_replaces_rather_than_merges() {
        let mut store = store();
        store.set_denomination_expression(denom("10"), "7").unwrap();
        store.set_field(LedgerField::Deposit, "90");

        let mut record = DailyRecord::new(date());
        record
            .denominations
            .insert("20".into(), DenominationEntry::new(1.0, "1"));
        store.restore(Some(&record));

        assert_eq!(store.denomination(denom("10")).count, 0.0);
        assert_eq!(store.denomination(denom("20")).count, 1.0);
        assert_eq!(store.field(LedgerField::Deposit), "");
    }

    #[test]
    fn test_restore_ignores_unknown_keys() {
        let mut record = DailyRecord::new(date());
        record
            .denominations
            .insert("3".into(), DenominationEntry::new(9.0, "9"));
        record
            .denominations
            .insert("0.50".into(), DenominationEntry::new(4.0, "4"));
        record.ledger.purchases = vec![
            LedgerItem::new("Aldi", "99"),
            LedgerItem::new("Lidl", "11"),
        ];

        let mut store = store();
        store.restore(Some(&record));

        assert_eq!(store.denomination(denom("0.5")).count, 4.0);
        assert_eq!(store.items(LedgerCategory::Purchases).len(), 5);
        assert_eq!(store.items(LedgerCategory::Purchases)[1].value, "11");
        assert!(store
            .items(LedgerCategory::Purchases)
            .iter()
            .all(|i| i.name != "Aldi"));
    }

    #[test]
    fn test_restore_enforces_empty_expression_invariant() {
        let mut record = DailyRecord::new(date());
        record
            .denominations
            .insert("5".into(), DenominationEntry::new(12.0, ""));

        let mut store = store();
        store.restore(Some(&record));

        assert_eq!(store.denomination(denom("5")).count, 0.0);
    }

    #[test]
    fn test_restore_drops_out_of_range_counts() {
        let mut record = DailyRecord::new(date());
        record
            .denominations
            .insert("500".into(), DenominationEntry::new(1e300, "1e300"));
        record
            .denominations
            .insert("10".into(), DenominationEntry::new(3.0, "3"));

        let mut store = store();
        store.restore(Some(&record));

        assert_eq!(store.denomination(denom("500")), &DenominationEntry::default());
        assert_eq!(store.denomination(denom("10")).count, 3.0);
    }
}
