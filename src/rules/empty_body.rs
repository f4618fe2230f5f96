//! Empty if bodies: `if cond {}` usually means a branch was left
//! unfinished. Every conditional in the function is checked, including
//! nested ones and `else if` links.

use crate::ast::FuncDecl;
use crate::summary::{Category, Offender};

use super::utils::for_each_if;
use super::Context;

pub fn check(func: &FuncDecl, ctx: &Context) -> Vec<Offender> {
    let mut offenders = Vec::new();
    for_each_if(func.statements(), &mut |node, _| {
        if node.body.stmts.is_empty() {
            offenders.push(ctx.offender(func, node.pos, 0, Category::EmptyIfBody));
        }
    });
    offenders
}
