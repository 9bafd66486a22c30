//! Day service
//!
//! Moves a day between storage and the in-memory [`LineItemStore`]: opening a
//! date restores its record (or defaults), saving folds the store back into a
//! record.

use chrono::NaiveDate;

use crate::audit::Operation;
use crate::config::settings::Settings;
use crate::error::TillResult;
use crate::storage::Storage;

use super::line_items::LineItemStore;

/// Service for loading and saving days
pub struct DayService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> DayService<'a> {
    /// Create a new day service
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Build the editing state for `date`
    ///
    /// A date with no usable record opens with every value at its default.
    pub fn open(&self, date: NaiveDate) -> LineItemStore {
        let mut store = LineItemStore::from_settings(self.settings);
        self.switch_to(&mut store, date);
        store
    }

    /// Replace the state of `store` with the record for `date`
    ///
    /// Returns whether a stored record was found.
    pub fn switch_to(&self, store: &mut LineItemStore, date: NaiveDate) -> bool {
        let record = self.storage.load_record(date);
        store.restore(record.as_ref());
        record.is_some()
    }

    /// Persist the current state of `store` as the record for `date`
    pub fn save(&self, store: &LineItemStore, date: NaiveDate) -> TillResult<Operation> {
        self.storage.save_record(&store.snapshot(date))
    }

    /// Dates with stored records, oldest first
    pub fn saved_dates(&self) -> TillResult<Vec<NaiveDate>> {
        self.storage.records.list_dates()
    }
}
