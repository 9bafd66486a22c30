//! Totals for the day
//!
//! Everything here is a read-only query over a [`LineItemStore`]. Sums are
//! kept at full precision; rounding to cents happens only when an
//! [`Amount`] is displayed. A ledger value that does not parse as a number,
//! or lies beyond [`Amount::LIMIT`], contributes zero instead of aborting the
//! computation. Counts are bounded the same way by the store, so no total can
//! become infinite.

use crate::models::{Amount, Flow, LedgerCategory, LedgerField, LedgerItem};

use super::line_items::LineItemStore;

/// Cash counted in the drawer: Σ count × denomination value
pub fn denomination_total(store: &LineItemStore) -> Amount {
    store
        .denominations()
        .map(|(denomination, entry)| denomination.subtotal(entry.count))
        .sum()
}

/// Sum of item values; unparseable values count as zero
pub fn category_subtotal(items: &[LedgerItem], decimal_comma: bool) -> Amount {
    items
        .iter()
        .map(|item| Amount::parse_or_zero(&item.value, decimal_comma))
        .sum()
}

/// Value of one scalar field; unparseable counts as zero
pub fn field_value(store: &LineItemStore, field: LedgerField) -> Amount {
    store.parse_value(store.field(field)).unwrap_or_default()
}

fn items_subtotal(store: &LineItemStore, category: LedgerCategory) -> Amount {
    category_subtotal(store.items(category), store.decimal_comma())
}

/// Income minus expenses over every field and category
pub fn grand_total(store: &LineItemStore) -> Amount {
    let totals = flow_totals(store);
    totals.income - totals.expenses
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct FlowTotals {
    income: Amount,
    expenses: Amount,
}

impl FlowTotals {
    fn add(&mut self, flow: Flow, amount: Amount) {
        match flow {
            Flow::Income => self.income += amount,
            Flow::Expense => self.expenses += amount,
        }
    }
}

fn flow_totals(store: &LineItemStore) -> FlowTotals {
    let mut totals = FlowTotals::default();
    for field in LedgerField::ALL {
        totals.add(field.flow(), field_value(store, field));
    }
    for category in LedgerCategory::ALL {
        totals.add(category.flow(), items_subtotal(store, category));
    }
    totals
}

/// Every figure of the day in one place, for display
#[derive(Debug, Clone, PartialEq)]
pub struct DailyTotals {
    /// Cash counted in the drawer
    pub cash_on_hand: Amount,
    /// Subtotal per category, in [`LedgerCategory::ALL`] order
    pub categories: Vec<(LedgerCategory, Amount)>,
    /// Value per scalar field, in [`LedgerField::ALL`] order
    pub fields: Vec<(LedgerField, Amount)>,
    pub total_income: Amount,
    pub total_expenses: Amount,
    /// `total_income - total_expenses`
    pub grand_total: Amount,
    /// Ledger values that were not numbers and were counted as zero
    pub invalid_entries: usize,
}

impl DailyTotals {
    pub fn category(&self, category: LedgerCategory) -> Amount {
        self.categories
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, amount)| *amount)
            .unwrap_or_default()
    }

    pub fn field(&self, field: LedgerField) -> Amount {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, amount)| *amount)
            .unwrap_or_default()
    }
}

/// Compute the full breakdown for the day
pub fn daily_totals(store: &LineItemStore) -> DailyTotals {
    let totals = flow_totals(store);

    let invalid_fields = LedgerField::ALL
        .iter()
        .filter(|f| store.parse_value(store.field(**f)).is_none())
        .count();
    let invalid_items = LedgerCategory::ALL
        .iter()
        .flat_map(|c| store.items(*c))
        .filter(|item| store.parse_value(&item.value).is_none())
        .count();

    DailyTotals {
        cash_on_hand: denomination_total(store),
        categories: LedgerCategory::ALL
            .iter()
            .map(|c| (*c, items_subtotal(store, *c)))
            .collect(),
        fields: LedgerField::ALL
            .iter()
            .map(|f| (*f, field_value(store, *f)))
            .collect(),
        total_income: totals.income,
        total_expenses: totals.expenses,
        grand_total: totals.income - totals.expenses,
        invalid_entries: invalid_fields + invalid_items,
    }
}
