//! Configuration module for till-report
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::TillPaths;
pub use settings::Settings;
