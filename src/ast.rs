//! Syntax model consumed by the checks.
//! Only the shapes the rules reason about are kept: function declarations,
//! statement lists, conditionals and the blocks that nest them. Expressions
//! are not modelled, except for the bodies of function literals, whose
//! statements still count toward the enclosing function.

use std::fmt;

/// A parsed source file.
#[derive(Debug, Clone, Default)]
pub struct SourceFile {
    pub package: String,
    pub functions: Vec<FuncDecl>,
}

/// 1-based line and column of a node's first character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A top-level `func` declaration (plain function or method).
#[derive(Debug, Clone)]
pub struct FuncDecl {
    pub name: String,
    pub params: Option<FieldList>,
    pub results: Option<FieldList>,
    /// `None` for declarations without a body (e.g. assembly stubs).
    pub body: Option<Block>,
    pub pos: Position,
}

impl FuncDecl {
    pub fn param_count(&self) -> usize {
        self.params.as_ref().map_or(0, |p| p.fields.len())
    }

    pub fn result_count(&self) -> usize {
        self.results.as_ref().map_or(0, |r| r.fields.len())
    }

    /// Top-level statements of the body, empty when there is no body.
    pub fn statements(&self) -> &[Stmt] {
        self.body.as_ref().map(|b| b.stmts.as_slice()).unwrap_or_default()
    }
}

/// Parameter or result list. Every declared name is one field; an unnamed
/// entry (`func(int, error)`) is one field as well.
#[derive(Debug, Clone, Default)]
pub struct FieldList {
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone)]
pub struct Field {
    pub name: Option<String>,
    pub ty: String,
}

/// A brace-delimited statement list (or a case clause body).
#[derive(Debug, Clone, Default)]
pub struct Block {
    pub pos: Position,
    pub stmts: Vec<Stmt>,
}

/// Statements form the imperative body of a function.
#[derive(Debug, Clone)]
pub enum Stmt {
    /// Anything without a nested statement list of its own: assignments,
    /// calls, `return`, `go`, `defer`, branches, local declarations.
    Simple(SimpleStmt),
    /// A nested `{ ... }` block.
    Block(Block),
    /// `if [init;] cond { ... } [else ...]`
    If(IfStmt),
    /// Any form of `for`.
    Loop(LoopStmt),
    /// `switch`, type switch and `select`.
    Switch(SwitchStmt),
    /// `Label: stmt`
    Labeled(LabeledStmt),
}

#[derive(Debug, Clone)]
pub struct SimpleStmt {
    pub pos: Position,
    /// Bodies of the function literals appearing in this statement.
    pub closures: Vec<Block>,
}

#[derive(Debug, Clone)]
pub struct IfStmt {
    pub pos: Position,
    pub init: Option<Box<Stmt>>,
    /// Bodies of the function literals in the condition.
    pub closures: Vec<Block>,
    pub body: Block,
    pub else_branch: Option<ElseBranch>,
}

/// The `else` arm of a conditional: either the next link of the chain or
/// the terminal block.
#[derive(Debug, Clone)]
pub enum ElseBranch {
    If(Box<IfStmt>),
    Block(Block),
}

#[derive(Debug, Clone)]
pub struct LoopStmt {
    pub pos: Position,
    /// Init and post statements of a three-clause loop.
    pub header: Vec<Stmt>,
    /// Function literal bodies in the condition or range expression.
    pub closures: Vec<Block>,
    pub body: Block,
}

#[derive(Debug, Clone)]
pub struct SwitchStmt {
    pub pos: Position,
    pub init: Option<Box<Stmt>>,
    /// Function literal bodies in the tag, the type guard or a case list.
    pub closures: Vec<Block>,
    pub clauses: Vec<CaseClause>,
}

#[derive(Debug, Clone)]
pub struct CaseClause {
    /// Communication statement of a `select` case.
    pub comm: Option<Box<Stmt>>,
    pub body: Block,
}

#[derive(Debug, Clone)]
pub struct LabeledStmt {
    pub pos: Position,
    pub label: String,
    pub stmt: Box<Stmt>,
}
