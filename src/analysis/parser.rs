// src/analysis/parser.rs
//! Source text to syntax tree.
//!
//! tree-sitter never refuses input: malformed code yields a tree with `ERROR`
//! or `MISSING` nodes. Those are turned into a localized [`ParseError::Syntax`]
//! so the caller can treat a broken file as data rather than as a crash.

use thiserror::Error;
use tree_sitter::{Node, Parser, Tree};

use super::ast;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The file is not well-formed Python. `line` is 1-based.
    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },

    /// The parser itself failed. Indicates an engine bug, not bad input.
    #[error("{0}")]
    Engine(String),
}

pub struct SourceParser {
    parser: Parser,
}

impl SourceParser {
    /// Creates a parser loaded with the Python grammar.
    ///
    /// # Errors
    /// Returns [`ParseError::Engine`] if the bundled grammar is incompatible with
    /// the tree-sitter runtime.
    pub fn new() -> Result<Self, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(tree_sitter_python::language())
            .map_err(|e| ParseError::Engine(format!("cannot load Python grammar: {e:?}")))?;
        Ok(Self { parser })
    }

    /// Parses `source` into a tree, or reports the first syntax error.
    ///
    /// # Errors
    /// [`ParseError::Syntax`] for malformed input, [`ParseError::Engine`] if the
    /// parser produced no tree at all.
    pub fn parse(&mut self, source: &str) -> Result<Tree, ParseError> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| ParseError::Engine("parser returned no tree".into()))?;

        if let Some(err) = first_syntax_error(tree.root_node()) {
            return Err(err);
        }
        Ok(tree)
    }
}

/// Finds the first `ERROR` or `MISSING` node in document order. Only
/// subtrees flagged with an error are entered.
fn first_syntax_error(root: Node) -> Option<ParseError> {
    let mut found = None;
    ast::traverse(root, |node| {
        if found.is_some() || !node.has_error() {
            return false;
        }
        let message = if node.is_missing() {
            format!("missing '{}'", node.kind())
        } else if node.is_error() {
            "invalid syntax".to_string()
        } else {
            return true;
        };
        found = Some(ParseError::Syntax {
            line: ast::line_of(node),
            message,
        });
        false
    });
    found
}
