// src/reporting.rs
//! Text and JSON renderings of a validation run.

use colored::Colorize;
use serde::Serialize;
use std::fmt::Write;

use crate::error::Result;
use crate::types::{Summary, Violation};

const RULE: &str = "============================================================";

/// Renders the plain-text report. Output depends only on the violations:
/// details are sorted by path, line, then category.
#[must_use]
pub fn render_report(violations: &[Violation], summary: &Summary) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_report(&mut out, violations, summary);
    out
}

fn write_report(out: &mut String, violations: &[Violation], summary: &Summary) -> std::fmt::Result {
    writeln!(out, "{RULE}")?;
    writeln!(out, "Quality Gate Validation Report")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "Total violations: {}", summary.total)?;
    writeln!(out, "  Errors: {}", summary.errors)?;
    writeln!(out, "  Warnings: {}", summary.warnings)?;

    if !summary.by_category.is_empty() {
        writeln!(out)?;
        writeln!(out, "Violations by category:")?;
        for (category, count) in &summary.by_category {
            writeln!(out, "  {category}: {count}")?;
        }
    }

    if !violations.is_empty() {
        writeln!(out)?;
        writeln!(out, "{RULE}")?;
        writeln!(out, "Detailed violations:")?;
        writeln!(out, "{RULE}")?;
        for v in sorted(violations) {
            writeln!(out, "{v}")?;
        }
    }

    writeln!(out, "{RULE}")
}

fn sorted(violations: &[Violation]) -> Vec<&Violation> {
    let mut refs: Vec<&Violation> = violations.iter().collect();
    refs.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    refs
}

/// Prints the report to stdout followed by a colored verdict line.
pub fn print_report(violations: &[Violation], summary: &Summary) {
    print!("{}", render_report(violations, summary));
    if summary.passed() {
        println!("{}", "Quality gate PASSED".green().bold());
    } else {
        println!(
            "{}",
            format!("Quality gate FAILED ({} errors)", summary.errors).red().bold()
        );
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    passed: bool,
    summary: &'a Summary,
    violations: Vec<&'a Violation>,
}

/// Machine-readable report with the same ordering as the text form.
///
/// # Errors
/// Returns error if serialization fails.
pub fn render_json(violations: &[Violation], summary: &Summary) -> Result<String> {
    let report = JsonReport {
        passed: summary.passed(),
        summary,
        violations: sorted(violations),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
