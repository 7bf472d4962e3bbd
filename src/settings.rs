//! # Settings Module
//!
//! ## Purpose
//! Holds the user configuration of the crate: where to read the element and solubility
//! tables from (the embedded tables are used when no file is given) and the log level of
//! the binary.
//!
//! ## Configuration Format
//! ```json
//! {
//!   "elements_file": "my_elements.json",
//!   "solubility_file": null,
//!   "log_level": "debug"
//! }
//! ```
//!
//! ## Usage Pattern
//! ```rust
//! use ChemHelpers::settings::{Settings, DEFAULT_CONFIG_FILE};
//!
//! let settings = Settings::load_or_default(DEFAULT_CONFIG_FILE).unwrap();
//! println!("log level: {}", settings.log_level);
//! ```

use crate::chem_errors::ChemError;
use log::{LevelFilter, debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "chem_config.json";

/// Configuration of data sources and logging.
///
/// # Fields
/// * `elements_file` - JSON array of `{symbol, atomic_weight, oxidation_states}` records,
///   `None` for the embedded periodic table
/// * `solubility_file` - JSON map cation -> anion -> descriptor, `None` for the embedded chart
/// * `log_level` - one of "off", "error", "warn", "info", "debug", "trace"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub elements_file: Option<String>,
    pub solubility_file: Option<String>,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            elements_file: None,
            solubility_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads settings from a JSON file, fields absent from the file keep their defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ChemError> {
        let content = fs::read_to_string(path.as_ref())?;
        let settings: Settings = serde_json::from_str(&content)?;
        debug!("settings loaded from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Same as `load` but returns the defaults when the file does not exist.
    /// A file that exists and cannot be parsed is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ChemError> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Writes settings as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ChemError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        debug!("settings saved to {}", path.as_ref().display());
        Ok(())
    }

    /// `log_level` as a filter for the logger, unknown names fall back to Info
    pub fn level_filter(&self) -> LevelFilter {
        match self.log_level.parse::<LevelFilter>() {
            Ok(level) => level,
            Err(_) => {
                warn!("unknown log level {:?}, using info", self.log_level);
                LevelFilter::Info
            }
        }
    }
}
