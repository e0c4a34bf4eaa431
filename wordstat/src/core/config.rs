// src/core/config.rs
pub mod loader;

pub use loader::{CONFIG_FILE_NAME, load_config};

use crate::core::report::ReportFormat;
use serde::Deserialize;
use std::path::PathBuf;

/// Defaults read from a `.wordstat.toml` file. Command-line flags take precedence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub include_stop_words: bool,
    pub format: ReportFormat,
    /// Report path used when saving without an explicit destination.
    pub output: PathBuf,
    /// Number of files listed by a directory scan.
    pub top: usize,
    /// Directory names skipped by a directory scan.
    pub exclude: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            include_stop_words: false,
            format: ReportFormat::Json,
            output: PathBuf::from("analysis.json"),
            top: 10,
            exclude: vec![String::from(".git")],
        }
    }
}

impl Config {
    /// Parses configuration from TOML text. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or contains unknown keys
    /// or values of the wrong type.
    #[inline]
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
