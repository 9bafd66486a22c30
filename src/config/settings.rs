//! User settings for till-report
//!
//! Manages user preferences: currency symbol, decimal separator handling,
//! date display format and the fixed list of purchase vendors.

use serde::{Deserialize, Serialize};

use super::paths::TillPaths;
use crate::error::TillError;

/// Vendors shown as fixed purchase lines when no settings file overrides them
pub const DEFAULT_PURCHASE_VENDORS: [&str; 5] =
    ["Sok Supermarket", "Lidl", "Netto", "Dimitrakopoulos", "Toom"];

/// User settings for till-report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in every displayed amount
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Accept `,` as decimal separator in calculator input
    #[serde(default = "default_decimal_comma")]
    pub decimal_comma: bool,

    /// Date format preference for display (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Fixed-name purchase lines, in display order
    #[serde(default = "default_purchase_vendors")]
    pub purchase_vendors: Vec<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "€".to_string()
}

fn default_decimal_comma() -> bool {
    true
}

fn default_date_format() -> String {
    "%d.%m.%Y".to_string()
}

fn default_purchase_vendors() -> Vec<String> {
    DEFAULT_PURCHASE_VENDORS
        .iter()
        .map(|v| v.to_string())
        .collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            decimal_comma: default_decimal_comma(),
            date_format: default_date_format(),
            purchase_vendors: default_purchase_vendors(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &TillPaths) -> Result<Self, TillError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| TillError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TillError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TillPaths) -> Result<(), TillError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TillError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| TillError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
