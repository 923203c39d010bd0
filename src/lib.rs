pub mod analysis;
pub mod architecture;
pub mod config;
pub mod discovery;
pub mod error;
pub mod reporting;
pub mod types;

pub use analysis::{Validator, DEFAULT_PATTERN};
pub use config::QualityGateConfig;
pub use error::{QualityError, Result};
pub use types::{Category, Severity, Summary, Violation};
