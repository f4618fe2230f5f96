//! Findings and the per-run summary that aggregates them.

use std::fmt;

use serde::Serialize;

use crate::ast::Position;

/// What an offender violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    TooLong,
    TooManyParams,
    TooManyResults,
    EmptyIfBody,
    LongIfChain,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::TooLong => "too long",
            Category::TooManyParams => "too many params",
            Category::TooManyResults => "too many results",
            Category::EmptyIfBody => "empty body",
            Category::LongIfChain => "long if/else chain",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One recorded violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Offender {
    pub filename: String,
    pub function: String,
    pub line: usize,
    pub column: usize,
    /// Statement count, arity or chain length depending on the category;
    /// always 0 for empty if bodies.
    pub count: usize,
    pub category: Category,
}

impl Offender {
    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }
}

/// Offenders of a whole run, partitioned by category.
///
/// The counters duplicate the sequence lengths so the structured report
/// carries them directly; both only change through [`Summary::add`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Summary {
    statement: Vec<Offender>,
    param: Vec<Offender>,
    result: Vec<Offender>,
    empty_if_body: Vec<Offender>,
    if_chain: Vec<Offender>,

    num_above_statement_threshold: usize,
    num_above_param_threshold: usize,
    num_above_result_threshold: usize,
    num_empty_if_body: usize,
    num_above_if_chain_threshold: usize,
}

impl Summary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, offender: Offender) {
        let (list, count) = match offender.category {
            Category::TooLong => (&mut self.statement, &mut self.num_above_statement_threshold),
            Category::TooManyParams => (&mut self.param, &mut self.num_above_param_threshold),
            Category::TooManyResults => (&mut self.result, &mut self.num_above_result_threshold),
            Category::EmptyIfBody => (&mut self.empty_if_body, &mut self.num_empty_if_body),
            Category::LongIfChain => (&mut self.if_chain, &mut self.num_above_if_chain_threshold),
        };
        list.push(offender);
        *count += 1;
    }

    pub fn offenders(&self, category: Category) -> &[Offender] {
        match category {
            Category::TooLong => &self.statement,
            Category::TooManyParams => &self.param,
            Category::TooManyResults => &self.result,
            Category::EmptyIfBody => &self.empty_if_body,
            Category::LongIfChain => &self.if_chain,
        }
    }

    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::TooLong => self.num_above_statement_threshold,
            Category::TooManyParams => self.num_above_param_threshold,
            Category::TooManyResults => self.num_above_result_threshold,
            Category::EmptyIfBody => self.num_empty_if_body,
            Category::LongIfChain => self.num_above_if_chain_threshold,
        }
    }
}

impl Extend<Offender> for Summary {
    fn extend<I: IntoIterator<Item = Offender>>(&mut self, iter: I) {
        for offender in iter {
            self.add(offender);
        }
    }
}
