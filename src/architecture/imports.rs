// src/architecture/imports.rs
//! Import edges of a Python file, resolved to absolute dotted module paths.

use std::path::{Component, Path};

use tree_sitter::Node;

use crate::analysis::ast::{self, Construct};

/// Dotted module path of a source file, split into segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModulePath {
    pub segments: Vec<String>,
    /// True for `__init__.py`, whose package is the module itself.
    pub is_package: bool,
}

impl ModulePath {
    /// Derives the module path from a file path: directories become segments,
    /// the `.py` suffix is dropped and `__init__` names its package.
    #[must_use]
    pub fn from_file(path: &Path) -> Self {
        let mut segments: Vec<String> = path
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();

        if let Some(last) = segments.last_mut() {
            if let Some(stem) = last.strip_suffix(".py") {
                *last = stem.to_string();
            }
        }

        let is_package = segments.last().is_some_and(|s| s == "__init__");
        if is_package {
            segments.pop();
        }
        Self { segments, is_package }
    }

    /// Module path of `path` as seen from `root`. Falls back to the whole path
    /// when the file does not live under `root`.
    #[must_use]
    pub fn relative_to(path: &Path, root: &Path) -> Self {
        Self::from_file(path.strip_prefix(root).unwrap_or(path))
    }

    /// Resolves a relative import with `level` leading dots.
    fn resolve_relative(&self, level: usize, rest: Option<&str>) -> Option<Vec<String>> {
        let mut base = self.segments.clone();
        if !self.is_package {
            base.pop()?;
        }
        for _ in 1..level {
            base.pop()?;
        }
        if let Some(rest) = rest {
            base.extend(split_dotted(rest));
        }
        Some(base)
    }
}

/// One import of another module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportEdge {
    pub line: usize,
    /// Absolute candidate module paths, most specific first.
    pub candidates: Vec<Vec<String>>,
}

impl ImportEdge {
    #[must_use]
    pub fn display_target(&self) -> String {
        self.candidates
            .last()
            .map(|c| c.join("."))
            .unwrap_or_default()
    }
}

/// Collects every import in the file. `from a import b` yields the candidates
/// `a.b` then `a`, since `b` may be a submodule or a name defined in `a`.
#[must_use]
pub fn import_edges(root: Node, source: &str, module: &ModulePath) -> Vec<ImportEdge> {
    let mut edges = Vec::new();
    ast::walk(root, &mut |node| {
        if Construct::of(node) != Construct::Import {
            return;
        }
        match node.kind() {
            "import_statement" => collect_plain(node, source, &mut edges),
            "import_from_statement" => {
                if let Some(edge) = from_import(node, source, module) {
                    edges.push(edge);
                }
            }
            _ => {}
        }
    });
    edges
}

fn collect_plain(node: Node, source: &str, edges: &mut Vec<ImportEdge>) {
    let mut cursor = node.walk();
    for name in node.children_by_field_name("name", &mut cursor) {
        let dotted = match name.kind() {
            "aliased_import" => name.child_by_field_name("name"),
            _ => Some(name),
        };
        if let Some(dotted) = dotted {
            edges.push(ImportEdge {
                line: ast::line_of(node),
                candidates: vec![split_dotted(ast::text_of(dotted, source))],
            });
        }
    }
}

fn from_import(node: Node, source: &str, module: &ModulePath) -> Option<ImportEdge> {
    let target = node.child_by_field_name("module_name")?;
    let base = if target.kind() == "relative_import" {
        resolve_relative_node(target, source, module)?
    } else {
        split_dotted(ast::text_of(target, source))
    };

    let mut candidates = Vec::new();
    let mut cursor = node.walk();
    for name in node.children_by_field_name("name", &mut cursor) {
        let dotted = match name.kind() {
            "aliased_import" => name.child_by_field_name("name"),
            _ => Some(name),
        };
        if let Some(dotted) = dotted {
            let mut candidate = base.clone();
            candidate.extend(split_dotted(ast::text_of(dotted, source)));
            candidates.push(candidate);
        }
    }
    candidates.push(base);

    Some(ImportEdge {
        line: ast::line_of(node),
        candidates,
    })
}

fn resolve_relative_node(node: Node, source: &str, module: &ModulePath) -> Option<Vec<String>> {
    let mut level = 0;
    let mut rest = None;
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            "import_prefix" => level = ast::text_of(child, source).matches('.').count(),
            "dotted_name" => rest = Some(ast::text_of(child, source)),
            _ => {}
        }
    }
    module.resolve_relative(level, rest)
}

fn split_dotted(dotted: &str) -> Vec<String> {
    dotted
        .split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
