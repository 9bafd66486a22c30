//! till-report - daily cash register reconciliation
//!
//! This library provides the core of a daily till report: counting the cash
//! drawer by denomination, recording the day's ledger (card payments,
//! deposits, purchases, vouchers, ...), computing totals, and persisting one
//! record per calendar day.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `expression`: Arithmetic evaluator for count input
//! - `models`: Core data models (denominations, ledger lines, day records)
//! - `storage`: JSON file storage layer
//! - `services`: Line item state, aggregation and day loading
//! - `audit`: Audit logging system
//! - `display`: Plain-text report formatting
//! - `cli`: Command handlers for the `till` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use till_report::config::{paths::TillPaths, settings::Settings};
//! use till_report::services::DayService;
//! use till_report::storage::Storage;
//!
//! let paths = TillPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths)?;
//! let store = DayService::new(&storage, &settings).open(date);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod expression;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{TillError, TillResult};
