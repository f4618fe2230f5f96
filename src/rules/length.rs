//! Function length: flag functions whose bodies hold more statements than
//! the configured threshold.

use crate::ast::{Block, ElseBranch, FuncDecl, IfStmt, Stmt};
use crate::summary::{Category, Offender};

use super::Context;

pub fn check(func: &FuncDecl, ctx: &Context) -> Option<Offender> {
    let count = statement_count(func.statements());
    if count <= ctx.thresholds.statement {
        return None;
    }
    Some(ctx.offender(func, func.pos, count, Category::TooLong))
}

/// Number of statements in `stmts`, including everything nested in them.
/// Blocks that are a statement's body are containers and do not count
/// themselves; an explicit `{ ... }` statement does.
pub fn statement_count(stmts: &[Stmt]) -> usize {
    stmts.iter().map(count_stmt).sum()
}

fn count_stmt(stmt: &Stmt) -> usize {
    1 + match stmt {
        Stmt::Simple(s) => closure_count(&s.closures),
        Stmt::Block(b) => statement_count(&b.stmts),
        Stmt::If(node) => count_if_parts(node),
        Stmt::Loop(node) => {
            statement_count(&node.header) + closure_count(&node.closures) + statement_count(&node.body.stmts)
        }
        Stmt::Switch(node) => {
            node.init.as_deref().map_or(0, count_stmt)
                + closure_count(&node.closures)
                + node
                    .clauses
                    .iter()
                    .map(|c| c.comm.as_deref().map_or(0, count_stmt) + statement_count(&c.body.stmts))
                    .sum::<usize>()
        }
        Stmt::Labeled(node) => count_stmt(&node.stmt),
    }
}

fn closure_count(bodies: &[Block]) -> usize {
    bodies.iter().map(|b| statement_count(&b.stmts)).sum()
}

/// Everything under a conditional except the conditional itself; an
/// `else if` link is a statement of its own.
fn count_if_parts(node: &IfStmt) -> usize {
    let head = node.init.as_deref().map_or(0, count_stmt)
        + closure_count(&node.closures)
        + statement_count(&node.body.stmts);
    head + match &node.else_branch {
        None => 0,
        Some(ElseBranch::If(next)) => 1 + count_if_parts(next),
        Some(ElseBranch::Block(block)) => statement_count(&block.stmts),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Thresholds;
    use crate::parser::parse_go_from_str;

    fn func(src: &str) -> FuncDecl {
        parse_go_from_str(src).unwrap().functions.remove(0)
    }

    fn body_of(n: usize) -> String {
        (0..n).map(|i| format!("\tx{i} := {i}\n")).collect()
    }

    #[test]
    fn counts_nested_statements() {
        let f = func(
            "package p\nfunc f(xs []int) {\n\tn := 0\n\tfor _, x := range xs {\n\t\tif x > 0 {\n\t\t\tn++\n\t\t} else if x < 0 {\n\t\t\tn--\n\t\t} else {\n\t\t\tcontinue\n\t\t}\n\t}\n\tswitch n {\n\tcase 0:\n\t\tprintln(n)\n\t}\n}\n",
        );
        // n :=, for, if, n++, else-if, n--, continue, switch, println
        assert_eq!(statement_count(f.statements()), 9);
    }

    #[test]
    fn counting_is_compositional() {
        let both = func("package p\nfunc f() {\n\ta := 1\n\tif a > 0 {\n\t\ta++\n\t}\n}\n");
        let first = func("package p\nfunc f() {\n\ta := 1\n}\n");
        let second = func("package p\nfunc f() {\n\tif a > 0 {\n\t\ta++\n\t}\n}\n");
        assert_eq!(
            statement_count(both.statements()),
            statement_count(first.statements()) + statement_count(second.statements())
        );
    }

    #[test]
    fn includes_init_statements_and_closures() {
        let f = func(
            "package p\nfunc f() {\n\tif err := g(); err != nil {\n\t\treturn\n\t}\n\th := func() {\n\t\tprintln(1)\n\t\tprintln(2)\n\t}\n\th()\n}\n",
        );
        // if, err :=, return, h :=, 2 x println, h()
        assert_eq!(statement_count(f.statements()), 7);
    }

    #[test]
    fn closures_in_headers_count() {
        let cond = func(
            "package p\nfunc f() {\n\tif func() bool { a := 1; b := 2; return a < b }() {\n\t\tprintln()\n\t}\n}\n",
        );
        // if, 3 in the literal, println
        assert_eq!(statement_count(cond.statements()), 5);

        let ranged = func(
            "package p\nfunc f() {\n\tfor _, v := range func() []int { a := 1; return []int{a} }() {\n\t\tprintln(v)\n\t}\n}\n",
        );
        assert_eq!(statement_count(ranged.statements()), 4);

        let looped = func(
            "package p\nfunc f() {\n\tfor i := 0; func() bool { return i < 3 }(); i++ {\n\t}\n}\n",
        );
        // for, i :=, i++, return
        assert_eq!(statement_count(looped.statements()), 4);

        let switched = func(
            "package p\nfunc f(x int) {\n\tswitch func() int { return x }() {\n\tcase func() int { y := 1; return y }():\n\t}\n}\n",
        );
        // switch, return, y :=, return
        assert_eq!(statement_count(switched.statements()), 4);
    }

    #[test]
    fn continued_declarations_are_one_statement() {
        let f = func("package p\nfunc f(a, b bool) {\n\tvar x = a ||\n\t\tb\n\t_ = x\n}\n");
        assert_eq!(statement_count(f.statements()), 2);

        let listed = func("package p\nfunc f() {\n\tvar xs = []int{1,\n\t\t2}\n\tvar a, b = 1,\n\t\t2\n\t_, _, _ = xs, a, b\n}\n");
        assert_eq!(statement_count(listed.statements()), 3);
    }

    #[test]
    fn threshold_is_strict() {
        let thresholds = Thresholds {
            statement: 30,
            ..Thresholds::default()
        };
        let ctx = Context {
            filename: "a.go",
            thresholds: &thresholds,
        };

        let at_limit = func(&format!("package p\nfunc f() {{\n{}}}\n", body_of(30)));
        assert!(check(&at_limit, &ctx).is_none());

        let over = func(&format!("package p\nfunc f() {{\n{}}}\n", body_of(31)));
        let offender = check(&over, &ctx).unwrap();
        assert_eq!(offender.count, 31);
        assert_eq!(offender.category, Category::TooLong);
        assert_eq!((offender.line, offender.column), (2, 1));
    }

    #[test]
    fn missing_body_counts_as_empty() {
        let f = func("package p\nfunc f(x int) int\n");
        assert_eq!(statement_count(f.statements()), 0);
    }
}
