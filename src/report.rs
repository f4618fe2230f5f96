//! Output renderers: readable warnings or a JSON summary.

use std::io::{self, Write};

use colored::Colorize;
use serde::Serialize;

use crate::analyzer::{FileFailure, FileReport};
use crate::summary::{Category, Offender, Summary};

/// Receives a run's results as they are produced.
pub trait Reporter {
    fn file(&mut self, report: &FileReport) -> io::Result<()>;
    fn failure(&mut self, failure: &FileFailure) -> io::Result<()>;
    fn finish(&mut self, summary: &Summary) -> io::Result<()>;
}

/// One warning per finding, grouped under the file name, followed by the
/// totals per category.
pub struct TextReporter<W: Write> {
    out: W,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn describe(offender: &Offender) -> String {
    let name = &offender.function;
    let count = offender.count.to_string().yellow();
    match offender.category {
        Category::TooLong => format!("function {name} too long: {count}"),
        Category::TooManyParams => format!("function {name} has too many params: {count}"),
        Category::TooManyResults => format!("function {name} has too many results: {count}"),
        Category::EmptyIfBody => format!(
            "function {name} has an empty if body at {}",
            offender.position()
        ),
        Category::LongIfChain => format!(
            "function {name} has an if/else chain too long: {count} (at {})",
            offender.position()
        ),
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn file(&mut self, report: &FileReport) -> io::Result<()> {
        for finding in report.findings() {
            if finding.first_in_file {
                writeln!(self.out, "\n{}", report.filename.bold())?;
            }
            writeln!(self.out, "{}", describe(finding.offender))?;
        }
        Ok(())
    }

    fn failure(&mut self, failure: &FileFailure) -> io::Result<()> {
        writeln!(
            self.out,
            "{} {}: {}",
            "error parsing".red(),
            failure.filename,
            failure.message
        )
    }

    fn finish(&mut self, summary: &Summary) -> io::Result<()> {
        writeln!(self.out)?;
        let lines = [
            ("Number of functions above statement threshold", Category::TooLong),
            ("Number of functions above param threshold", Category::TooManyParams),
            ("Number of functions above result threshold", Category::TooManyResults),
            ("Number of empty if bodies", Category::EmptyIfBody),
            ("Number of if/else chains above threshold", Category::LongIfChain),
        ];
        for (label, category) in lines {
            writeln!(self.out, "{label}: {}", summary.count(category))?;
        }
        Ok(())
    }
}

/// Stays silent until the end, then writes the whole summary as JSON.
pub struct JsonReporter<W: Write> {
    out: W,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn file(&mut self, _report: &FileReport) -> io::Result<()> {
        Ok(())
    }

    fn failure(&mut self, failure: &FileFailure) -> io::Result<()> {
        log::warn!("error parsing {}: {}", failure.filename, failure.message);
        Ok(())
    }

    fn finish(&mut self, summary: &Summary) -> io::Result<()> {
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
        let mut serializer = serde_json::Serializer::with_formatter(&mut self.out, formatter);
        summary.serialize(&mut serializer)?;
        writeln!(self.out)
    }
}
