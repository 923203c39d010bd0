// src/config/io.rs
use std::fs;
use std::path::Path;

use tracing::debug;

use super::QualityGateConfig;
use crate::error::{QualityError, Result};

/// Reads and parses a TOML config file. Any section left out falls back to
/// its defaults.
///
/// # Errors
/// Returns [`QualityError::Config`] if the file cannot be read or is not valid TOML
/// for the config schema.
pub fn load_from_file(path: &Path) -> Result<QualityGateConfig> {
    let content = fs::read_to_string(path).map_err(|e| QualityError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    debug!(path = %path.display(), bytes = content.len(), "read quality gate config");
    parse_toml(&content).map_err(|message| QualityError::Config {
        path: path.to_path_buf(),
        message,
    })
}

/// Parses config text, reporting a malformed document as a message.
pub fn parse_toml(content: &str) -> std::result::Result<QualityGateConfig, String> {
    toml::from_str(content).map_err(|e| e.to_string())
}
