//! Storage layer for till-report
//!
//! Provides JSON file storage with atomic writes, one file per day, and
//! audit logging of every save.

pub mod file_io;
pub mod records;

pub use file_io::{read_json_optional, write_json_atomic};
pub use records::RecordStore;

use chrono::NaiveDate;

use crate::audit::{generate_diff, AuditEntry, AuditLogger, EntityType, Operation};
use crate::config::paths::TillPaths;
use crate::error::TillError;
use crate::models::DailyRecord;

/// Main storage coordinator
pub struct Storage {
    paths: TillPaths,
    pub records: RecordStore,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: TillPaths) -> Result<Self, TillError> {
        paths.ensure_directories()?;

        Ok(Self {
            records: RecordStore::new(paths.data_dir()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &TillPaths {
        &self.paths
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load the record for a date; `None` for missing or corrupt data
    pub fn load_record(&self, date: NaiveDate) -> Option<DailyRecord> {
        self.records.load(date)
    }

    /// Save a record, replacing whatever was stored for its date
    ///
    /// Writes are reported, never swallowed. The save is audited as a create
    /// for a new date and as an update (with diff) otherwise; a corrupt
    /// previous file counts as new. When only the audit append fails the
    /// error is [`TillError::AuditNotRecorded`], and the record is on disk.
    pub fn save_record(&self, record: &DailyRecord) -> Result<Operation, TillError> {
        let previous = self.records.load(record.date);

        self.records.save(record)?;

        let entity_id = record.date.format("%Y-%m-%d").to_string();
        let entry = match previous {
            Some(before) => {
                let diff = match (serde_json::to_value(&before), serde_json::to_value(record)) {
                    (Ok(b), Ok(a)) => generate_diff(&b, &a),
                    _ => None,
                };
                AuditEntry::update(EntityType::DailyRecord, entity_id, None, &before, record, diff)
            }
            None => AuditEntry::create(EntityType::DailyRecord, entity_id, None, record),
        };
        self.audit
            .log(&entry)
            .map_err(|e| TillError::AuditNotRecorded {
                date: entry.entity_id.clone(),
                reason: e.to_string(),
            })?;

        Ok(entry.operation)
    }
}
