//! Day record repository
//!
//! One JSON file per calendar day, named `YYYY-MM-DD.json`, inside the data
//! directory. Reads never fail: a missing, unreadable or corrupt file is
//! reported as "no data for this date".

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::error::{TillError, TillResult};
use crate::models::{DailyRecord, StoredDay};

use super::file_io::{read_json_optional, write_json_atomic};

const FILE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Repository for day records
pub struct RecordStore {
    dir: PathBuf,
}

impl RecordStore {
    /// Create a new repository rooted at `dir`
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the file holding `date`
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir
            .join(format!("{}.json", date.format(FILE_DATE_FORMAT)))
    }

    /// Whether a file exists for `date`
    pub fn exists(&self, date: NaiveDate) -> bool {
        self.path_for(date).exists()
    }

    /// Write `record` under its date, replacing any previous record
    pub fn save(&self, record: &DailyRecord) -> TillResult<()> {
        write_json_atomic(self.path_for(record.date), record)
    }

    /// Load the record for `date`
    ///
    /// Returns `None` when nothing was saved for the date or the stored file
    /// cannot be read or decoded.
    pub fn load(&self, date: NaiveDate) -> Option<DailyRecord> {
        self.try_load(date).ok().flatten()
    }

    /// Load the record for `date`, distinguishing corrupt files
    ///
    /// The returned record always carries `date`; a `date` key inside the
    /// file is not required and not trusted.
    pub fn try_load(&self, date: NaiveDate) -> TillResult<Option<DailyRecord>> {
        let stored: Option<StoredDay> = read_json_optional(self.path_for(date))?;
        Ok(stored.map(|day| day.into_record(date)))
    }

    /// Dates that have a stored file, oldest first
    pub fn list_dates(&self) -> TillResult<Vec<NaiveDate>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(TillError::Storage(format!(
                    "Failed to list {}: {}",
                    self.dir.display(),
                    e
                )))
            }
        };

        let mut dates: Vec<NaiveDate> = entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                let name = entry.file_name();
                let stem = name.to_str()?.strip_suffix(".json")?;
                NaiveDate::parse_from_str(stem, FILE_DATE_FORMAT).ok()
            })
            .collect();

        dates.sort();
        Ok(dates)
    }
}
