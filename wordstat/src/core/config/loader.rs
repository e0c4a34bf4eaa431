// src/core/config/loader.rs
use crate::core::config::Config;
use anyhow::{Context as _, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = ".wordstat.toml";

/// Loads configuration from a `.wordstat.toml` file starting from the given
/// directory and recursively checking parent directories until a file is found.
///
/// # Arguments
///
/// * `dir` - The starting directory to search for `.wordstat.toml` files
///
/// # Returns
///
/// * `Ok(Config)` - The loaded configuration, or defaults when no file exists
///
/// # Errors
///
/// This function may return an error if:
/// * The `.wordstat.toml` file exists but cannot be read
/// * The file contains invalid TOML or unknown keys
#[inline]
pub fn load_config(dir: &Path) -> Result<Config> {
    let mut current_dir = dir.to_path_buf();
    let mut visited = HashSet::new();

    while !visited.contains(&current_dir) {
        visited.insert(current_dir.clone());

        let config_file = current_dir.join(CONFIG_FILE_NAME);

        if config_file.is_file() {
            let content = fs::read_to_string(&config_file).with_context(|| {
                format!("Failed to read config file: {}", config_file.display())
            })?;
            debug!(path = %config_file.display(), "loaded config");

            return Config::from_toml(&content).with_context(|| {
                format!("Failed to parse config file: {}", config_file.display())
            });
        }

        if let Some(parent) = current_dir.parent() {
            current_dir = parent.to_path_buf();
        } else {
            break;
        }
    }

    Ok(Config::default())
}
