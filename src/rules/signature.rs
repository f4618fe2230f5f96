//! Parameter and result counts, taken straight from the declaration.

use crate::ast::FuncDecl;
use crate::summary::{Category, Offender};

use super::Context;

pub fn check_params(func: &FuncDecl, ctx: &Context) -> Option<Offender> {
    let count = func.param_count();
    if count <= ctx.thresholds.param {
        return None;
    }
    Some(ctx.offender(func, func.pos, count, Category::TooManyParams))
}

pub fn check_results(func: &FuncDecl, ctx: &Context) -> Option<Offender> {
    let count = func.result_count();
    if count <= ctx.thresholds.result {
        return None;
    }
    Some(ctx.offender(func, func.pos, count, Category::TooManyResults))
}
