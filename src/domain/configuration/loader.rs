//! Configuration file discovery and parsing.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppConfig, AppError};

/// File consulted in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "penh.toml";

/// Load configuration from `path`, or from `./penh.toml` when present.
///
/// An explicit path must exist; the implicit default falls back to built-in
/// defaults when absent.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, AppError> {
    let (config_path, required) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };

    if !config_path.exists() {
        if required {
            return Err(AppError::config_error(format!(
                "Config file not found: {}",
                config_path.display()
            )));
        }
        tracing::debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(&config_path)?;
    tracing::debug!(path = %config_path.display(), "loaded configuration");
    parse_config_content(&content)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
