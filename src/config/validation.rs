// src/config/validation.rs
//! Range and consistency checks over a loaded [`QualityGateConfig`].
//!
//! Validation never fails: every problem is collected as a message so the
//! caller can report them all at once before any file is scanned.

use super::types::{ArchitectureConfig, QualityGateConfig};
use crate::architecture::ModulePattern;

/// Returns every invalid field as a human-readable message. Empty means valid.
#[must_use]
pub fn validate(config: &QualityGateConfig) -> Vec<String> {
    let mut errors = Vec::new();

    check_percent(&mut errors, "coverage.minimum", config.coverage.minimum);
    check_percent(&mut errors, "coverage.fail_under", config.coverage.fail_under);

    check_positive(&mut errors, "file_size.max_lines", config.file_size.max_lines);
    check_positive(&mut errors, "file_size.max_imports", config.file_size.max_imports);
    check_positive(&mut errors, "file_size.max_functions", config.file_size.max_functions);
    check_positive(&mut errors, "complexity.max_cc", config.complexity.max_cc);

    if let Some(perf) = &config.performance {
        check_positive(&mut errors, "performance.max_nesting_depth", perf.max_nesting_depth);
    }

    if let Some(testing) = &config.testing {
        let ratio = testing.min_test_to_code_ratio;
        if !ratio.is_finite() || ratio < 0.0 {
            errors.push(format!(
                "testing.min_test_to_code_ratio must be a non-negative number, got {ratio}"
            ));
        }
    }

    check_architecture(&mut errors, &config.architecture);
    errors
}

fn check_percent(errors: &mut Vec<String>, field: &str, value: f64) {
    if !(0.0..=100.0).contains(&value) {
        errors.push(format!("{field} must be between 0 and 100, got {value}"));
    }
}

fn check_positive(errors: &mut Vec<String>, field: &str, value: usize) {
    if value == 0 {
        errors.push(format!("{field} must be at least 1, got 0"));
    }
}

fn check_architecture(errors: &mut Vec<String>, arch: &ArchitectureConfig) {
    for (layer, patterns) in &arch.layers {
        if patterns.is_empty() {
            errors.push(format!("architecture.layers.{layer} has no module patterns"));
        }
        for pattern in patterns {
            if let Err(reason) = ModulePattern::parse(pattern) {
                errors.push(format!(
                    "architecture.layers.{layer}: invalid pattern '{pattern}': {reason}"
                ));
            }
        }
    }

    for (layer, targets) in &arch.allowed {
        if !arch.layers.contains_key(layer) {
            errors.push(format!("architecture.allowed.{layer} refers to an undeclared layer"));
        }
        for target in targets {
            if !arch.layers.contains_key(target) {
                errors.push(format!(
                    "architecture.allowed.{layer} allows undeclared layer '{target}'"
                ));
            }
        }
    }
}
