//! Long if/else chains: a ladder of `else if` links is usually a switch
//! (or a lookup table) in disguise.

use crate::ast::{ElseBranch, FuncDecl, IfStmt};
use crate::summary::{Category, Offender};

use super::utils::{for_each_if, ChainLink};
use super::Context;

/// Only chain heads are measured, so a chain is reported once no matter how
/// many links it has. Conditionals nested inside a link's body start
/// chains of their own.
pub fn check(func: &FuncDecl, ctx: &Context) -> Vec<Offender> {
    let mut offenders = Vec::new();
    for_each_if(func.statements(), &mut |node, link| {
        if link != ChainLink::Head {
            return;
        }
        let length = chain_length(node);
        if length > ctx.thresholds.if_chain {
            offenders.push(ctx.offender(func, node.pos, length, Category::LongIfChain));
        }
    });
    offenders
}

/// Number of `else` links hanging off `node`; a terminal `else { }` is a
/// link too.
pub fn chain_length(node: &IfStmt) -> usize {
    match &node.else_branch {
        None => 0,
        Some(ElseBranch::If(next)) => 1 + chain_length(next),
        Some(ElseBranch::Block(_)) => 1,
    }
}
