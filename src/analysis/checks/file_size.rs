// src/analysis/checks/file_size.rs
//! File size limits: raw lines, imports, function definitions.

use crate::analysis::ast;
use crate::config::FileSizeConfig;
use crate::types::{Category, Violation};

use super::CheckContext;

/// Emits up to three file-level findings: line count (error), import count
/// and function count (warnings).
pub fn check_file_size(ctx: &CheckContext, config: &FileSizeConfig, out: &mut Vec<Violation>) {
    let line_count = raw_line_count(ctx.source);
    if line_count > config.max_lines {
        out.push(Violation::error(
            Category::FileSize,
            ctx.path,
            None,
            format!("File too large: {line_count} lines (max: {})", config.max_lines),
        ));
    }

    let import_count = ast::count_imports(ctx.root);
    if import_count > config.max_imports {
        out.push(Violation::warning(
            Category::Imports,
            ctx.path,
            None,
            format!("Too many imports: {import_count} (max: {})", config.max_imports),
        ));
    }

    let function_count = ast::count_functions(ctx.root);
    if function_count > config.max_functions {
        out.push(Violation::warning(
            Category::Functions,
            ctx.path,
            None,
            format!("Too many functions: {function_count} (max: {})", config.max_functions),
        ));
    }
}

/// Number of `\n`-separated segments. Blank and comment lines count, and a
/// trailing newline adds a final empty segment.
fn raw_line_count(source: &str) -> usize {
    source.split('\n').count()
}
