//! Path management for till-report
//!
//! Provides XDG-compliant path resolution for configuration, day records and
//! the audit log.
//!
//! ## Path Resolution Order
//!
//! 1. `TILL_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/till-report` or `~/.config/till-report`
//! 3. Windows: `%APPDATA%\till-report`

use std::path::PathBuf;

use crate::error::TillError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "TILL_DATA_DIR";

/// Manages all paths used by till-report
#[derive(Debug, Clone)]
pub struct TillPaths {
    /// Base directory for all till-report data
    base_dir: PathBuf,
}

impl TillPaths {
    /// Create a new TillPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TillError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create TillPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/till-report/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the directory holding one JSON file per day
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), TillError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TillError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| TillError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if till-report has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, TillError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| TillError::Config("HOME environment variable not set".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("till-report"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, TillError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| TillError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("till-report"))
}
