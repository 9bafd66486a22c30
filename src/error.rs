//! Custom error types for till-report
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for till-report operations
#[derive(Error, Debug)]
pub enum TillError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Malformed or disallowed arithmetic input
    #[error("Invalid expression: {0}")]
    InvalidExpression(String),

    /// Arithmetic input that divides by zero
    #[error("Division by zero")]
    DivisionByZero,

    /// A stored day record exists but cannot be decoded
    #[error("Stored record is corrupt: {0}")]
    StorageCorrupt(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// The record was written but its audit entry was not
    #[error("Record for {date} was saved, but the audit log could not be written: {reason}")]
    AuditNotRecorded { date: String, reason: String },
}

impl TillError {
    /// Create a "not found" error for denominations
    pub fn denomination_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Denomination",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for purchase vendors
    pub fn vendor_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Vendor",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for free-form ledger items
    pub fn item_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Ledger item",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if the failed operation still persisted the record
    pub fn record_was_saved(&self) -> bool {
        matches!(self, Self::AuditNotRecorded { .. })
    }

    /// Check if this error came from the expression evaluator
    pub fn is_expression_error(&self) -> bool {
        matches!(self, Self::InvalidExpression(_) | Self::DivisionByZero)
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for TillError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TillError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for till-report operations
pub type TillResult<T> = Result<T, TillError>;
