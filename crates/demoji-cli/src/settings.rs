//! Configuration settings
//!
//! Loaded from `demoji.toml`. Every field has a default, so an empty file
//! (or no file at all) is valid.
//!
//! ```toml
//! [report]
//! format = "json"
//! ```

use clap::ValueEnum;
use serde::Deserialize;

/// How the run summary is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripts and CI
    Json,
}

/// Top-level settings structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Report settings
    pub report: ReportSettings,
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }
}

/// Report configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Default report format when `--format` is not given
    pub format: ReportFormat,
}
