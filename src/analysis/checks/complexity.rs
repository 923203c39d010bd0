// src/analysis/checks/complexity.rs
//! Cyclomatic complexity per function.

use crate::analysis::{ast, metrics};
use crate::config::ComplexityConfig;
use crate::types::{Category, Violation};

use super::CheckContext;

/// Reports every function whose complexity exceeds `max_cc`.
pub fn check_complexity(ctx: &CheckContext, config: &ComplexityConfig, out: &mut Vec<Violation>) {
    for def in ast::functions(ctx.root) {
        let complexity = metrics::cyclomatic_complexity(def.node);
        if complexity > config.max_cc {
            out.push(Violation::error(
                Category::Complexity,
                ctx.path,
                Some(def.line),
                format!(
                    "Function '{}' has complexity {complexity} (max: {})",
                    def.name(ctx.source),
                    config.max_cc
                ),
            ));
        }
    }
}
