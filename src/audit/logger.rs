//! Append-only JSONL log of saved days
//!
//! One entry per line. Lines are never rewritten; a blank line is skipped
//! when reading, a malformed one is an error naming its line number.

use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::error::{TillError, TillResult};

use super::entry::AuditEntry;

fn log_io_error(action: &str, err: std::io::Error) -> TillError {
    TillError::Io(format!("Audit log {}: {}", action, err))
}

pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append `entry`; the line is complete on disk when this returns `Ok`
    pub fn log(&self, entry: &AuditEntry) -> TillResult<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| log_io_error("open", e))?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, entry)?;
        writer
            .write_all(b"\n")
            .and_then(|()| writer.flush())
            .map_err(|e| log_io_error("write", e))
    }

    /// Every entry in the log, oldest first
    pub fn read_all(&self) -> TillResult<Vec<AuditEntry>> {
        let content = match fs::read_to_string(&self.log_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(log_io_error("read", e)),
        };

        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| {
                serde_json::from_str(line).map_err(|e| {
                    TillError::Json(format!("Audit log line {}: {}", index + 1, e))
                })
            })
            .collect()
    }

    pub fn read_recent(&self, count: usize) -> TillResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let keep_from = entries.len().saturating_sub(count);
        Ok(entries.split_off(keep_from))
    }
}
