// src/core/report.rs
use anyhow::{Context as _, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// Text encodings available for saved reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Json,
    Yaml,
}

/// Serializes a report as pretty-printed JSON.
///
/// Output is indented by two spaces and non-ASCII characters are written
/// verbatim rather than escaped.
///
/// # Errors
///
/// Returns an error if the value cannot be represented as JSON.
#[inline]
pub fn to_json<T: Serialize>(report: &T) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize report as JSON")
}

/// Serializes a report as YAML.
///
/// # Errors
///
/// Returns an error if the value cannot be represented as YAML.
#[inline]
pub fn to_yaml<T: Serialize>(report: &T) -> Result<String> {
    serde_yaml_ng::to_string(report).context("Failed to serialize report as YAML")
}

/// Serializes a report in the requested format.
///
/// # Errors
///
/// Returns an error if serialization fails.
#[inline]
pub fn serialize<T: Serialize>(report: &T, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Json => to_json(report),
        ReportFormat::Yaml => to_yaml(report),
    }
}

/// Writes a serialized report to `path`, replacing any existing file.
///
/// # Arguments
///
/// * `report` - The analysis or comparison to save
/// * `path` - Destination file
/// * `format` - Encoding to use
///
/// # Errors
///
/// This function may return an error if:
/// * The report cannot be serialized
/// * The destination cannot be written
pub fn save_report<T: Serialize>(report: &T, path: &Path, format: ReportFormat) -> Result<()> {
    let mut content = serialize(report, format)?;
    if !content.ends_with('\n') {
        content.push('\n');
    }
    fs::write(path, content)
        .with_context(|| format!("Failed to write report: {}", path.display()))?;
    info!(path = %path.display(), ?format, "saved report");
    Ok(())
}
