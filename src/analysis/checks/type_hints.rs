// src/analysis/checks/type_hints.rs
//! Return and parameter annotation requirements.

use tree_sitter::Node;

use crate::analysis::ast::{self, FunctionDef};
use crate::config::TypeHintsConfig;
use crate::types::{Category, Violation};

use super::CheckContext;

const RECEIVER: &str = "self";

pub fn check_type_hints(ctx: &CheckContext, config: &TypeHintsConfig, out: &mut Vec<Violation>) {
    for def in ast::functions(ctx.root) {
        let name = def.name(ctx.source);

        if config.require_return_types && !def.has_return_annotation() {
            out.push(Violation::error(
                Category::TypeHints,
                ctx.path,
                Some(def.line),
                format!("Function '{name}' missing return type annotation"),
            ));
        }

        if config.require_param_types {
            check_parameters(ctx, &def, name, out);
        }
    }
}

fn check_parameters(ctx: &CheckContext, def: &FunctionDef, func: &str, out: &mut Vec<Violation>) {
    let Some(params) = def.parameters() else {
        return;
    };
    let mut cursor = params.walk();
    for param in params.named_children(&mut cursor) {
        let Some(ident) = unannotated_name(param) else {
            continue;
        };
        let param_name = ast::text_of(ident, ctx.source);
        if param_name == RECEIVER {
            continue;
        }
        out.push(Violation::warning(
            Category::TypeHints,
            ctx.path,
            Some(ast::line_of(param)),
            format!("Parameter '{param_name}' of function '{func}' missing type annotation"),
        ));
    }
}

/// The name node of a parameter that carries no annotation. Annotated
/// parameters, `*args`, `**kwargs` and the bare `*` / `/` markers yield `None`.
fn unannotated_name(param: Node) -> Option<Node> {
    match param.kind() {
        "identifier" => Some(param),
        "default_parameter" => param.child_by_field_name("name"),
        _ => None,
    }
}
