// src/analysis/checks/security.rs
//! Text-level security heuristics.
//!
//! This pass scans raw text, not the tree: it cannot tell code from comments
//! or string contents, so both false positives (a commented-out assignment,
//! `literal_eval(`) and false negatives (secrets built by concatenation) are
//! expected.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::SecurityConfig;
use crate::types::{Category, Violation};

use super::CheckContext;

const SECRET_NAMES: [&str; 4] = ["password", "api_key", "secret", "token"];
const EVAL_CALL: &str = "eval(";

static SECRET_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    SECRET_NAMES
        .iter()
        .filter_map(|name| Regex::new(&format!(r#"(?i){name}\s*=\s*["']([^"']+)["']"#)).ok())
        .collect()
});

pub fn check_security(ctx: &CheckContext, config: &SecurityConfig, out: &mut Vec<Violation>) {
    if config.forbid_hardcoded_secrets {
        for pattern in SECRET_PATTERNS.iter() {
            for m in pattern.find_iter(ctx.source) {
                out.push(Violation::error(
                    Category::Security,
                    ctx.path,
                    Some(line_at(ctx.source, m.start())),
                    "Possible hardcoded secret detected".to_string(),
                ));
            }
        }
    }

    if config.forbid_eval_usage {
        if let Some(offset) = ctx.source.find(EVAL_CALL) {
            out.push(Violation::error(
                Category::Security,
                ctx.path,
                Some(line_at(ctx.source, offset)),
                "Use of eval() detected (security risk)".to_string(),
            ));
        }
    }
}

/// 1-based line containing byte `offset`.
fn line_at(source: &str, offset: usize) -> usize {
    source.as_bytes()[..offset]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
        + 1
}
