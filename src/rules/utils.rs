//! Shared traversal helpers for the rules.

use crate::ast::{ElseBranch, IfStmt, Stmt};

/// Where a conditional sits in its if/else chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainLink {
    /// Not reached through another conditional's `else`.
    Head,
    /// The `if` of an `else if`.
    Continuation,
}

/// Calls `visit` on every conditional under `stmts` in source order
/// (a conditional before its body, its body before its `else`).
///
/// Function literals are not entered: their conditionals belong to the
/// literal, not to the declaration being checked.
pub fn for_each_if<'a, F>(stmts: &'a [Stmt], visit: &mut F)
where
    F: FnMut(&'a IfStmt, ChainLink),
{
    for stmt in stmts {
        walk_stmt(stmt, visit);
    }
}

fn walk_stmt<'a, F>(stmt: &'a Stmt, visit: &mut F)
where
    F: FnMut(&'a IfStmt, ChainLink),
{
    match stmt {
        Stmt::Simple(_) => {}
        Stmt::Block(block) => for_each_if(&block.stmts, visit),
        Stmt::If(node) => walk_if(node, ChainLink::Head, visit),
        Stmt::Loop(node) => for_each_if(&node.body.stmts, visit),
        Stmt::Switch(node) => {
            for clause in &node.clauses {
                for_each_if(&clause.body.stmts, visit);
            }
        }
        Stmt::Labeled(node) => walk_stmt(&node.stmt, visit),
    }
}

fn walk_if<'a, F>(node: &'a IfStmt, link: ChainLink, visit: &mut F)
where
    F: FnMut(&'a IfStmt, ChainLink),
{
    visit(node, link);
    for_each_if(&node.body.stmts, visit);
    match &node.else_branch {
        None => {}
        Some(ElseBranch::If(next)) => walk_if(next, ChainLink::Continuation, visit),
        Some(ElseBranch::Block(block)) => for_each_if(&block.stmts, visit),
    }
}
