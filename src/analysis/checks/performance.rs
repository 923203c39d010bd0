// src/analysis/checks/performance.rs
//! Block nesting depth per function.

use crate::analysis::{ast, metrics};
use crate::config::PerformanceConfig;
use crate::types::{Category, Violation};

use super::CheckContext;

pub fn check_performance(ctx: &CheckContext, config: &PerformanceConfig, out: &mut Vec<Violation>) {
    for def in ast::functions(ctx.root) {
        let depth = metrics::nesting_depth(def.node);
        if depth > config.max_nesting_depth {
            out.push(Violation::warning(
                Category::Performance,
                ctx.path,
                Some(def.line),
                format!(
                    "Function '{}' has nesting depth {depth} (max: {})",
                    def.name(ctx.source),
                    config.max_nesting_depth
                ),
            ));
        }
    }
}
