//! Drives the checks over files and folds the results into one summary.

use std::path::{Path, PathBuf};

use crate::ast::SourceFile;
use crate::config::Config;
use crate::parser::{self, ParseError};
use crate::report::Reporter;
use crate::rules::{self, Context};
use crate::summary::{Offender, Summary};

/// Offenders found in one file, in declaration order then check order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileReport {
    pub filename: String,
    pub offenders: Vec<Offender>,
}

/// An offender together with whether it is the first one of its file,
/// which is when readable output announces the filename.
#[derive(Debug, Clone, Copy)]
pub struct Finding<'a> {
    pub first_in_file: bool,
    pub offender: &'a Offender,
}

impl FileReport {
    pub fn findings(&self) -> impl Iterator<Item = Finding<'_>> {
        self.offenders.iter().enumerate().map(|(i, offender)| Finding {
            first_in_file: i == 0,
            offender,
        })
    }

    pub fn is_clean(&self) -> bool {
        self.offenders.is_empty()
    }
}

/// A file that could not be analyzed. It contributes no offenders and
/// does not stop the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub filename: String,
    pub message: String,
}

impl FileFailure {
    fn from_parse_error(filename: &str, err: &ParseError) -> Self {
        Self {
            filename: filename.to_owned(),
            message: err.to_string(),
        }
    }
}

pub fn analyze_tree(filename: &str, tree: &SourceFile, config: &Config) -> FileReport {
    let ctx = Context {
        filename,
        thresholds: &config.thresholds,
    };
    FileReport {
        filename: filename.to_owned(),
        offenders: tree
            .functions
            .iter()
            .flat_map(|func| rules::examine_func(func, &ctx))
            .collect(),
    }
}

pub fn analyze_source(filename: &str, source: &str, config: &Config) -> Result<FileReport, ParseError> {
    let tree = parser::parse_file_from_str(source, filename)?;
    Ok(analyze_tree(filename, &tree, config))
}

pub fn analyze_path(path: &Path, config: &Config) -> Result<FileReport, FileFailure> {
    let filename = path.display().to_string();
    let tree = parser::parse_file(path).map_err(|e| FileFailure::from_parse_error(&filename, &e))?;
    Ok(analyze_tree(&filename, &tree, config))
}

/// Everything a run produced.
#[derive(Debug, Clone, Default)]
pub struct RunOutcome {
    pub summary: Summary,
    pub failures: Vec<FileFailure>,
}

/// Analyzes `paths` one after the other, in the given order. Each file's
/// report or failure goes to `reporter` as soon as it is known; the
/// finished summary is handed over once every file has been seen.
pub fn execute<R>(paths: &[PathBuf], config: &Config, reporter: &mut R) -> std::io::Result<RunOutcome>
where
    R: Reporter + ?Sized,
{
    let mut outcome = RunOutcome::default();

    for path in paths {
        match analyze_path(path, config) {
            Ok(report) => {
                log::debug!("{}: {} offender(s)", report.filename, report.offenders.len());
                for offender in &report.offenders {
                    log::trace!(
                        "{}: {} {} ({})",
                        offender.position(),
                        offender.function,
                        offender.category,
                        offender.count
                    );
                }
                reporter.file(&report)?;
                outcome.summary.extend(report.offenders);
            }
            Err(failure) => {
                log::debug!("{}: skipped ({})", failure.filename, failure.message);
                reporter.failure(&failure)?;
                outcome.failures.push(failure);
            }
        }
    }

    reporter.finish(&outcome.summary)?;
    Ok(outcome)
}
