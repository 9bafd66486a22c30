//! Audit logging system for till-report
//!
//! Every save of a day record is appended to `audit.log` as one JSON line,
//! with the stored and saved versions and a readable diff for overwrites.
//!
//! # Example
//!
//! ```rust,ignore
//! use till_report::audit::{AuditEntry, AuditLogger, EntityType, generate_diff};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! let diff = generate_diff(&before_json, &after_json);
//! let entry = AuditEntry::update(EntityType::DailyRecord, "2025-03-14", None, &before, &after, diff);
//! logger.log(&entry)?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::{generate_detailed_diff, generate_diff};
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
