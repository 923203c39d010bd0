// src/analysis/checks.rs
//! Per-file checks. Each one reads the file's text and tree and appends its
//! findings to the list it is handed; none of them keeps state between files.

mod complexity;
mod documentation;
mod error_handling;
mod file_size;
mod performance;
mod security;
mod type_hints;

use std::path::Path;

use tree_sitter::Node;

pub use complexity::check_complexity;
pub use documentation::check_documentation;
pub use error_handling::check_error_handling;
pub use file_size::check_file_size;
pub use performance::check_performance;
pub use security::check_security;
pub use type_hints::check_type_hints;

/// Context for running checks on a single file.
#[derive(Clone, Copy)]
pub struct CheckContext<'a> {
    pub root: Node<'a>,
    pub source: &'a str,
    pub path: &'a Path,
    /// Directory that dotted module paths are computed from.
    pub source_root: &'a Path,
}
