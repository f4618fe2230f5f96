//! Go parser implemented with Pest.
//! This parser consumes the parse tree generated from `go.pest` and
//! builds the syntax model defined in `ast.rs`.

use pest::iterators::Pair;
use pest::Parser;

use super::ParseError;
use crate::ast::{
    Block, CaseClause, ElseBranch, Field, FieldList, FuncDecl, IfStmt, LabeledStmt, LoopStmt,
    Position, SimpleStmt, SourceFile, Stmt, SwitchStmt,
};

#[derive(pest_derive::Parser)]
#[grammar = "parser/go.pest"]
pub struct GoParser;

pub fn parse_go_from_str(src: &str) -> Result<SourceFile, ParseError> {
    let pairs = GoParser::parse(Rule::file, src).map_err(|e| ParseError::Syntax(Box::new(e)))?;
    let mut file = SourceFile::default();

    for pair in pairs {
        if let Rule::file = pair.as_rule() {
            for decl in pair.into_inner() {
                match decl.as_rule() {
                    Rule::package_clause => {
                        file.package = first_of(decl, Rule::identifier)
                            .map(|p| p.as_str().to_owned())
                            .unwrap_or_default();
                    }
                    Rule::func_decl => file.functions.push(build_func(decl)),
                    _ => {}
                }
            }
        }
    }

    Ok(file)
}

fn position(pair: &Pair<Rule>) -> Position {
    let (line, column) = pair.as_span().start_pos().line_col();
    Position { line, column }
}

fn first_of(pair: Pair<Rule>, rule: Rule) -> Option<Pair<Rule>> {
    pair.into_inner().find(|p| p.as_rule() == rule)
}

fn build_func(pair: Pair<Rule>) -> FuncDecl {
    let pos = position(&pair);
    let mut name = String::new();
    let mut params = None;
    let mut results = None;
    let mut body = None;

    for part in pair.into_inner() {
        match part.as_rule() {
            Rule::identifier => name = part.as_str().to_owned(),
            Rule::signature => {
                let (p, r) = build_signature(part);
                params = Some(p);
                results = r;
            }
            Rule::block => body = Some(build_block(part)),
            _ => {}
        }
    }

    FuncDecl {
        name,
        params,
        results,
        body,
        pos,
    }
}

fn build_signature(pair: Pair<Rule>) -> (FieldList, Option<FieldList>) {
    let mut params = FieldList::default();
    let mut results = None;

    for part in pair.into_inner() {
        match part.as_rule() {
            Rule::parameters => params = build_fields(part),
            Rule::result => {
                results = part.into_inner().next().map(|inner| match inner.as_rule() {
                    Rule::parameters => build_fields(inner),
                    _ => FieldList {
                        fields: vec![Field {
                            name: None,
                            ty: inner.as_str().to_owned(),
                        }],
                    },
                });
            }
            _ => {}
        }
    }

    (params, results)
}

/// `a, b int, c string` yields three fields; `int, error` yields two.
fn build_fields(pair: Pair<Rule>) -> FieldList {
    let mut fields = Vec::new();

    for decl in pair.into_inner().filter(|p| p.as_rule() == Rule::param_decl) {
        let Some(inner) = decl.into_inner().next() else {
            continue;
        };
        match inner.as_rule() {
            Rule::named_params => {
                let mut names = Vec::new();
                let mut ty = String::new();
                for part in inner.into_inner() {
                    match part.as_rule() {
                        Rule::identifier => names.push(part.as_str().to_owned()),
                        Rule::type_expr => ty = part.as_str().to_owned(),
                        _ => {}
                    }
                }
                fields.extend(names.into_iter().map(|name| Field {
                    name: Some(name),
                    ty: ty.clone(),
                }));
            }
            _ => fields.push(Field {
                name: None,
                ty: inner.as_str().trim_start_matches("...").trim().to_owned(),
            }),
        }
    }

    FieldList { fields }
}

/// Builds a block from any pair whose children are statements
/// (`block` or a case clause body).
fn build_block(pair: Pair<Rule>) -> Block {
    let pos = position(&pair);
    Block {
        pos,
        stmts: pair.into_inner().map(build_stmt).collect(),
    }
}

fn build_stmt(pair: Pair<Rule>) -> Stmt {
    let pos = position(&pair);
    match pair.as_rule() {
        Rule::block => Stmt::Block(build_block(pair)),
        Rule::if_stmt => Stmt::If(build_if(pair)),
        Rule::for_stmt => Stmt::Loop(build_loop(pair)),
        Rule::switch_stmt | Rule::select_stmt => Stmt::Switch(build_switch(pair)),
        Rule::labeled_stmt => {
            let mut inner = pair.into_inner();
            let label = inner.next().map(|p| p.as_str().to_owned()).unwrap_or_default();
            match inner.next() {
                Some(stmt) => Stmt::Labeled(LabeledStmt {
                    pos,
                    label,
                    stmt: Box::new(build_stmt(stmt)),
                }),
                None => Stmt::Simple(SimpleStmt {
                    pos,
                    closures: Vec::new(),
                }),
            }
        }
        _ => Stmt::Simple(SimpleStmt {
            pos,
            closures: collect_closures(pair),
        }),
    }
}

fn build_if(pair: Pair<Rule>) -> IfStmt {
    let pos = position(&pair);
    let mut init = None;
    let mut closures = Vec::new();
    let mut body = None;
    let mut else_branch = None;

    for part in pair.into_inner() {
        match part.as_rule() {
            Rule::h_simple_stmt => init = Some(Box::new(build_stmt(part))),
            Rule::hexpr => gather_closures(part, &mut closures),
            Rule::block if body.is_none() => body = Some(build_block(part)),
            Rule::block => else_branch = Some(ElseBranch::Block(build_block(part))),
            Rule::if_stmt => else_branch = Some(ElseBranch::If(Box::new(build_if(part)))),
            _ => {}
        }
    }

    IfStmt {
        pos,
        init,
        closures,
        body: body.unwrap_or_default(),
        else_branch,
    }
}

fn build_loop(pair: Pair<Rule>) -> LoopStmt {
    let pos = position(&pair);
    let mut header = Vec::new();
    let mut closures = Vec::new();
    let mut body = Block::default();

    for part in pair.into_inner() {
        match part.as_rule() {
            Rule::for_clause => {
                for clause in part.into_inner() {
                    match clause.as_rule() {
                        Rule::h_simple_stmt => header.push(build_stmt(clause)),
                        _ => gather_closures(clause, &mut closures),
                    }
                }
            }
            Rule::range_clause | Rule::hexpr => gather_closures(part, &mut closures),
            Rule::block => body = build_block(part),
            _ => {}
        }
    }

    LoopStmt {
        pos,
        header,
        closures,
        body,
    }
}

fn build_switch(pair: Pair<Rule>) -> SwitchStmt {
    let pos = position(&pair);
    let mut init = None;
    let mut closures = Vec::new();
    let mut clauses = Vec::new();

    for part in pair.into_inner() {
        match part.as_rule() {
            Rule::h_simple_stmt => init = Some(Box::new(build_stmt(part))),
            Rule::hexpr | Rule::switch_guard => gather_closures(part, &mut closures),
            Rule::case_clause | Rule::comm_clause => {
                let mut comm = None;
                let mut body = Block::default();
                for piece in part.into_inner() {
                    match piece.as_rule() {
                        Rule::simple_stmt => comm = Some(Box::new(build_stmt(piece))),
                        Rule::case_body => body = build_block(piece),
                        Rule::expr | Rule::type_expr => gather_closures(piece, &mut closures),
                        _ => {}
                    }
                }
                clauses.push(CaseClause { comm, body });
            }
            _ => {}
        }
    }

    SwitchStmt {
        pos,
        init,
        closures,
        clauses,
    }
}

/// Bodies of the outermost function literals inside `pair`. Literals nested
/// in those bodies belong to the statements of the bodies themselves.
fn collect_closures(pair: Pair<Rule>) -> Vec<Block> {
    let mut found = Vec::new();
    gather_closures(pair, &mut found);
    found
}

fn gather_closures(pair: Pair<Rule>, found: &mut Vec<Block>) {
    for inner in pair.into_inner() {
        if inner.as_rule() == Rule::func_lit {
            if let Some(block) = first_of(inner, Rule::block) {
                found.push(build_block(block));
            }
        } else {
            gather_closures(inner, found);
        }
    }
}
