// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QualityError {
    #[error("Failed to load config {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("Invalid configuration:\n{}", format_config_errors(.0))]
    InvalidConfig(Vec<String>),

    #[error("Parser failure: {0}")]
    Parser(String),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Report serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QualityError>;

fn format_config_errors(errors: &[String]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}
