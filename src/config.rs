//! TOML configuration file for the scraper.
//!
//! Every field is optional; anything missing falls back to its default.
//!
//! ```toml
//! [search]
//! max_results = 20
//! timeout_seconds = 15
//!
//! [search.selectors]
//! version = "duckduckgo-html-v1"
//! container = "div.result"
//!
//! [output]
//! directory = "results"
//! ```

use crate::error::AppError;
use ddg_search::SearchConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration loaded from `--config`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Search endpoint, count, timeout, identity and selector settings.
    pub search: SearchConfig,
    /// Where results files go.
    pub output: OutputConfig,
}

/// Output file placement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for the default `<term>.txt` file. An explicit `--output`
    /// path is used as given.
    pub directory: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from a TOML file, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("invalid {}: {e}", path.display())))
    }
}
