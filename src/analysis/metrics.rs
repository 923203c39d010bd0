use tree_sitter::Node;

use super::ast::{self, Construct};

/// Calculates `McCabe` cyclomatic complexity of a function: one plus every
/// decision point in its own body. Nested definitions are not counted here;
/// each is scored on its own.
#[must_use]
pub fn cyclomatic_complexity(def: Node) -> usize {
    let mut complexity = 1;
    ast::walk_own_scope(def, &mut |node| {
        if Construct::of(node).is_decision_point() {
            complexity += 1;
        }
    });
    complexity
}

/// Calculates the maximum block nesting depth of a function.
///
/// Depth grows by one for each `if`, `elif`, loop, `with` or `try` entered.
/// Any other node is walked through at the current depth.
#[must_use]
pub fn nesting_depth(def: Node) -> usize {
    let mut max = 0;
    let mut pending = vec![(def, 0)];

    while let Some((node, depth)) = pending.pop() {
        max = max.max(depth);
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            let construct = Construct::of(child);
            if construct == Construct::Definition {
                continue;
            }
            let next = if construct.opens_nesting() { depth + 1 } else { depth };
            pending.push((child, next));
        }
    }
    max
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ast::functions;
    use crate::analysis::parser::SourceParser;

    fn first_fn<T>(code: &str, measure: impl Fn(Node) -> T) -> T {
        let tree = SourceParser::new().unwrap().parse(code).unwrap();
        let def = functions(tree.root_node())[0];
        measure(def.node)
    }

    #[test]
    fn test_straight_line_function() {
        assert_eq!(first_fn("def f():\n    return 1\n", cyclomatic_complexity), 1);
        assert_eq!(first_fn("def f():\n    return 1\n", nesting_depth), 0);
    }

    #[test]
    fn test_independent_branches() {
        let code = "\
def f(x):
    if x:
        pass
    if x > 1:
        pass
    if x > 2:
        pass
";
        assert_eq!(first_fn(code, cyclomatic_complexity), 4);
        assert_eq!(first_fn(code, nesting_depth), 1);
    }

    #[test]
    fn test_every_decision_kind() {
        let code = "\
async def f(xs):
    if xs:
        pass
    elif not xs:
        pass
    for x in xs:
        pass
    async for y in xs:
        pass
    while False:
        pass
    try:
        pass
    except ValueError:
        pass
    except:
        pass
    ok = xs and xs or None
    a = [x for x in xs]
    b = {x for x in xs}
    c = {x: x for x in xs}
    d = sum(x for x in xs)
";
        // if, elif, for, async for, while, 2 excepts, and, or, 4 comprehensions
        assert_eq!(first_fn(code, cyclomatic_complexity), 1 + 13);
    }

    #[test]
    fn test_nested_function_scored_separately() {
        let code = "\
def outer():
    if a:
        pass
    def inner():
        if b:
            if c:
                pass
";
        assert_eq!(first_fn(code, cyclomatic_complexity), 2);
        assert_eq!(first_fn(code, nesting_depth), 1);
    }

    #[test]
    fn test_nesting_through_all_block_kinds() {
        let code = "\
def f(path):
    with open(path) as fh:
        for line in fh:
            try:
                while line:
                    if line:
                        pass
            except OSError:
                pass
";
        assert_eq!(first_fn(code, nesting_depth), 5);
    }

    #[test]
    fn test_elif_branch_nests() {
        let code = "\
def f(a):
    if a:
        pass
    elif a > 1:
        if a > 2:
            pass
";
        assert_eq!(first_fn(code, nesting_depth), 3);
    }

    #[test]
    fn test_deep_expression_does_not_recurse() {
        let terms = vec!["a"; 50_000].join(" + ");
        let code = format!("def f(a):\n    x = {terms}\n    if a:\n        return x\n");
        assert_eq!(first_fn(&code, nesting_depth), 1);
        assert_eq!(first_fn(&code, cyclomatic_complexity), 2);
    }

    #[test]
    fn test_else_branch_is_same_depth() {
        let code = "\
def f(x):
    if x:
        pass
    else:
        if x:
            pass
";
        assert_eq!(first_fn(code, nesting_depth), 2);
    }
}
