//! Function checks. Each rule looks at one function declaration and
//! returns the offenders it finds; none of them keeps state between calls.

pub mod empty_body;
pub mod if_chain;
pub mod length;
pub mod signature;
pub mod utils;

use crate::ast::{FuncDecl, Position};
use crate::config::Thresholds;
use crate::summary::{Category, Offender};

/// What a rule needs to know besides the function itself.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub filename: &'a str,
    pub thresholds: &'a Thresholds,
}

impl Context<'_> {
    pub fn offender(&self, func: &FuncDecl, pos: Position, count: usize, category: Category) -> Offender {
        Offender {
            filename: self.filename.to_owned(),
            function: func.name.clone(),
            line: pos.line,
            column: pos.column,
            count,
            category,
        }
    }
}

/// Runs every check on `func`, in a fixed order: length, params, results,
/// empty if bodies, if/else chains.
pub fn examine_func(func: &FuncDecl, ctx: &Context) -> Vec<Offender> {
    let mut offenders = Vec::new();
    offenders.extend(length::check(func, ctx));
    offenders.extend(signature::check_params(func, ctx));
    offenders.extend(signature::check_results(func, ctx));
    offenders.extend(empty_body::check(func, ctx));
    offenders.extend(if_chain::check(func, ctx));
    offenders
}
