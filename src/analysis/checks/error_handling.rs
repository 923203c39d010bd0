// src/analysis/checks/error_handling.rs
//! Catch-all exception handlers.

use tree_sitter::Node;

use crate::analysis::ast::{self, Construct};
use crate::config::ErrorHandlingConfig;
use crate::types::{Category, Violation};

use super::CheckContext;

/// Reports each `except:` clause that names no exception type.
pub fn check_error_handling(
    ctx: &CheckContext,
    config: &ErrorHandlingConfig,
    out: &mut Vec<Violation>,
) {
    if !config.forbid_bare_except {
        return;
    }
    ast::walk(ctx.root, &mut |node| {
        if Construct::of(node) == Construct::Handler && is_bare(node) {
            out.push(Violation::error(
                Category::ErrorHandling,
                ctx.path,
                Some(ast::line_of(node)),
                "Bare except clause detected".to_string(),
            ));
        }
    });
}

fn is_bare(handler: Node) -> bool {
    let mut cursor = handler.walk();
    let catches_type = handler
        .named_children(&mut cursor)
        .any(|n| !matches!(n.kind(), "block" | "comment"));
    !catches_type
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::checks::test_support::run;

    fn check(code: &str, forbid: bool) -> Vec<Violation> {
        let config = ErrorHandlingConfig {
            enabled: true,
            forbid_bare_except: forbid,
        };
        run(code, |ctx, out| check_error_handling(ctx, &config, out))
    }

    #[test]
    fn test_bare_except_reported_at_handler_line() {
        let code = "\ntry:\n    risky_operation()\nexcept:\n    pass\n";
        let out = check(code, true);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].line, Some(4));
        assert!(out[0].is_error());
    }

    #[test]
    fn test_typed_handlers_are_fine() {
        let code = "\
try:
    pass
except ValueError:
    pass
except (KeyError, TypeError) as exc:
    pass
except Exception:
    pass
";
        assert!(check(code, true).is_empty());
    }

    #[test]
    fn test_nested_and_multiple_bare_handlers() {
        let code = "\
def f():
    try:
        pass
    except ValueError:
        try:
            pass
        except:
            pass
    except:
        pass
";
        let lines: Vec<_> = check(code, true).iter().map(|v| v.line).collect();
        assert_eq!(lines, vec![Some(7), Some(9)]);
    }

    #[test]
    fn test_allowed_when_not_forbidden() {
        assert!(check("try:\n    pass\nexcept:\n    pass\n", false).is_empty());
    }
}
