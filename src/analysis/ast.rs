// src/analysis/ast.rs
//! Tree helpers shared by the checks.
//!
//! Checks never match on raw grammar kinds; they go through [`Construct`], a
//! closed taxonomy of the handful of Python node kinds the gate cares about.

use tree_sitter::Node;

/// Structural role of a syntax node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construct {
    /// `if` statement.
    Conditional,
    /// `elif` branch of an `if`.
    Alternative,
    /// `for`, `async for`, `while`.
    Loop,
    /// `try` statement.
    Try,
    /// `except` clause.
    Handler,
    /// `with`, `async with`.
    ScopedResource,
    /// `and` / `or`.
    BooleanOp,
    /// List, set and dict comprehensions, generator expressions.
    Comprehension,
    /// `def` / `async def`.
    Definition,
    Class,
    /// `import x`, `from x import y`, `from __future__ import y`.
    Import,
    /// String literal.
    Literal,
    Other,
}

impl Construct {
    #[must_use]
    pub fn of(node: Node) -> Self {
        match node.kind() {
            "if_statement" => Self::Conditional,
            "elif_clause" => Self::Alternative,
            "for_statement" | "while_statement" => Self::Loop,
            "try_statement" => Self::Try,
            "except_clause" => Self::Handler,
            "with_statement" => Self::ScopedResource,
            "boolean_operator" => Self::BooleanOp,
            "list_comprehension"
            | "set_comprehension"
            | "dictionary_comprehension"
            | "generator_expression" => Self::Comprehension,
            "function_definition" => Self::Definition,
            "class_definition" => Self::Class,
            "import_statement" | "import_from_statement" | "future_import_statement" => {
                Self::Import
            }
            "string" | "concatenated_string" => Self::Literal,
            _ => Self::Other,
        }
    }

    /// Adds one path to a function's cyclomatic complexity.
    #[must_use]
    pub const fn is_decision_point(self) -> bool {
        matches!(
            self,
            Self::Conditional
                | Self::Alternative
                | Self::Loop
                | Self::Handler
                | Self::BooleanOp
                | Self::Comprehension
        )
    }

    /// Opens one more level of block nesting.
    #[must_use]
    pub const fn opens_nesting(self) -> bool {
        matches!(
            self,
            Self::Conditional | Self::Alternative | Self::Loop | Self::ScopedResource | Self::Try
        )
    }
}

/// A `def` or `async def` found in the tree.
#[derive(Debug, Clone, Copy)]
pub struct FunctionDef<'tree> {
    pub node: Node<'tree>,
    pub line: usize,
}

impl<'tree> FunctionDef<'tree> {
    #[must_use]
    pub fn name<'s>(&self, source: &'s str) -> &'s str {
        self.node
            .child_by_field_name("name")
            .and_then(|n| n.utf8_text(source.as_bytes()).ok())
            .unwrap_or("<anonymous>")
    }

    #[must_use]
    pub fn has_return_annotation(&self) -> bool {
        self.node.child_by_field_name("return_type").is_some()
    }

    #[must_use]
    pub fn parameters(&self) -> Option<Node<'tree>> {
        self.node.child_by_field_name("parameters")
    }

    #[must_use]
    pub fn body(&self) -> Option<Node<'tree>> {
        self.node.child_by_field_name("body")
    }
}

/// 1-based line of a node's first character.
#[must_use]
pub fn line_of(node: Node) -> usize {
    node.start_position().row + 1
}

#[must_use]
pub fn text_of<'s>(node: Node, source: &'s str) -> &'s str {
    node.utf8_text(source.as_bytes()).unwrap_or("")
}

/// Pre-order traversal of the subtree under `root` with a single cursor.
/// `enter` sees every reached node, `root` included; returning `false` skips
/// that node's children. Iterative, so deep expression trees are safe.
pub fn traverse<'tree, F>(root: Node<'tree>, mut enter: F)
where
    F: FnMut(Node<'tree>) -> bool,
{
    let mut cursor = root.walk();
    let mut descend = enter(root);
    loop {
        if descend && cursor.goto_first_child() {
            descend = enter(cursor.node());
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                descend = enter(cursor.node());
                break;
            }
            if !cursor.goto_parent() {
                return;
            }
        }
    }
}

/// Visits every node of the subtree in document order, `root` included.
pub fn walk<'tree, F>(root: Node<'tree>, visit: &mut F)
where
    F: FnMut(Node<'tree>),
{
    traverse(root, |node| {
        visit(node);
        true
    });
}

/// Visits the descendants of a definition that belong to its own body,
/// stopping at nested `def`s (they are measured on their own).
pub fn walk_own_scope<'tree, F>(def: Node<'tree>, visit: &mut F)
where
    F: FnMut(Node<'tree>),
{
    let scope = def.id();
    traverse(def, |node| {
        if node.id() == scope {
            return true;
        }
        if Construct::of(node) == Construct::Definition {
            return false;
        }
        visit(node);
        true
    });
}

/// All function and method definitions, including nested and async ones.
#[must_use]
pub fn functions(root: Node) -> Vec<FunctionDef> {
    let mut defs = Vec::new();
    walk(root, &mut |node| {
        if Construct::of(node) == Construct::Definition {
            defs.push(FunctionDef {
                node,
                line: line_of(node),
            });
        }
    });
    defs
}

#[must_use]
pub fn count_of(root: Node, construct: Construct) -> usize {
    let mut count = 0;
    walk(root, &mut |node| {
        if Construct::of(node) == construct {
            count += 1;
        }
    });
    count
}

/// Import statements anywhere in the tree.
#[must_use]
pub fn count_imports(root: Node) -> usize {
    count_of(root, Construct::Import)
}

/// Function definitions anywhere in the tree.
#[must_use]
pub fn count_functions(root: Node) -> usize {
    count_of(root, Construct::Definition)
}

/// True when the first statement of a module or block is a bare string.
#[must_use]
pub fn has_docstring(block: Node) -> bool {
    let mut cursor = block.walk();
    let first = block
        .named_children(&mut cursor)
        .find(|n| n.kind() != "comment");
    let Some(stmt) = first else {
        return false;
    };
    if stmt.kind() != "expression_statement" || stmt.named_child_count() != 1 {
        return false;
    }
    stmt.named_child(0)
        .is_some_and(|expr| Construct::of(expr) == Construct::Literal)
}
