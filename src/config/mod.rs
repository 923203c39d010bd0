// src/config/mod.rs
pub mod io;
pub mod types;
pub mod validation;

use std::path::Path;

pub use self::types::{
    ArchitectureConfig, ComplexityConfig, CoverageConfig, DocumentationConfig,
    ErrorHandlingConfig, FileSizeConfig, PerformanceConfig, QualityGateConfig, SecurityConfig,
    TestingConfig, TypeHintsConfig,
};
use crate::error::{QualityError, Result};

impl QualityGateConfig {
    /// Loads the config at `path`, or the built-in defaults when `path` is `None`.
    ///
    /// The result is not validated; call [`QualityGateConfig::validate`] before use.
    ///
    /// # Errors
    /// Returns error if an explicitly given file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => io::load_from_file(p),
            None => Ok(Self::default()),
        }
    }

    /// Parses config from TOML text.
    ///
    /// # Errors
    /// Returns error if the text is not a valid config document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        io::parse_toml(content).map_err(|message| QualityError::Config {
            path: "<inline>".into(),
            message,
        })
    }

    /// Loads and validates in one step, returning the config together with
    /// its validation errors.
    ///
    /// # Errors
    /// Returns error only if the file cannot be read or parsed.
    pub fn load_validated(path: Option<&Path>) -> Result<(Self, Vec<String>)> {
        let config = Self::load(path)?;
        let errors = config.validate();
        Ok((config, errors))
    }

    /// Lists every out-of-range or inconsistent field. Empty means valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        validation::validate(self)
    }
}
