// src/analysis/checks/documentation.rs
//! Docstring requirements.

use crate::analysis::ast::{self, Construct};
use crate::config::DocumentationConfig;
use crate::types::{Category, Violation};

use super::CheckContext;

pub fn check_documentation(
    ctx: &CheckContext,
    config: &DocumentationConfig,
    out: &mut Vec<Violation>,
) {
    if config.require_module_docstrings && !ast::has_docstring(ctx.root) {
        out.push(Violation::warning(
            Category::Documentation,
            ctx.path,
            Some(1),
            "Module missing docstring".to_string(),
        ));
    }

    if !config.require_class_docstrings && !config.require_function_docstrings {
        return;
    }

    ast::walk(ctx.root, &mut |node| {
        let label = match Construct::of(node) {
            Construct::Class if config.require_class_docstrings => "Class",
            Construct::Definition if config.require_function_docstrings => "Function",
            _ => return,
        };
        let documented = node
            .child_by_field_name("body")
            .is_some_and(ast::has_docstring);
        if documented {
            return;
        }
        let name = node
            .child_by_field_name("name")
            .map_or("<anonymous>", |n| ast::text_of(n, ctx.source));
        out.push(Violation::warning(
            Category::Documentation,
            ctx.path,
            Some(ast::line_of(node)),
            format!("{label} '{name}' missing docstring"),
        ));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::checks::test_support::run;

    fn check(code: &str, config: &DocumentationConfig) -> Vec<Violation> {
        run(code, |ctx, out| check_documentation(ctx, config, out))
    }

    #[test]
    fn test_missing_module_docstring() {
        let out = check("x = 1\n", &DocumentationConfig::default());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].line, Some(1));
        assert_eq!(out[0].message, "Module missing docstring");
        assert!(!out[0].is_error());
    }

    #[test]
    fn test_present_module_docstring() {
        assert!(check("\"\"\"Tools.\"\"\"\nx = 1\n", &DocumentationConfig::default()).is_empty());
    }

    #[test]
    fn test_class_and_function_docstrings() {
        let config = DocumentationConfig {
            enabled: true,
            require_module_docstrings: false,
            require_class_docstrings: true,
            require_function_docstrings: true,
        };
        let code = "\
class Documented:
    \"\"\"Has one.\"\"\"

    def method(self):
        return 1

def helper():
    \"\"\"Has one.\"\"\"
";
        let out = check(code, &config);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].message, "Function 'method' missing docstring");
        assert_eq!(out[0].line, Some(4));
    }
}
