//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::ConfigFile;

/// splint: find Go functions that are getting out of hand.
///
/// Reports functions with too many statements, parameters or results,
/// empty if bodies and long if/else chains. Thresholds are exclusive: a
/// function is reported only when it goes above them.
#[derive(Parser, Debug)]
#[command(name = "splint")]
#[command(version)]
#[command(about = "Heuristic complexity linter for Go sources", long_about = None)]
pub struct Cli {
    /// Go files or directories to analyze
    pub paths: Vec<PathBuf>,

    /// Statement threshold [default: 30]
    #[arg(short = 's', long = "statements", allow_negative_numbers = true)]
    pub statements: Option<i64>,

    /// Parameter threshold [default: 5]
    #[arg(short = 'p', long = "params", allow_negative_numbers = true)]
    pub params: Option<i64>,

    /// Result threshold [default: 5]
    #[arg(short = 'r', long = "results", allow_negative_numbers = true)]
    pub results: Option<i64>,

    /// If/else chain threshold [default: 2]
    #[arg(short = 'i', long = "if-chain", allow_negative_numbers = true)]
    pub if_chain: Option<i64>,

    /// Print a JSON summary instead of warnings
    #[arg(short = 'j', long = "json")]
    pub json: bool,

    /// Skip files ending in _test.go
    #[arg(short = 't', long = "ignore-tests")]
    pub ignore_tests: bool,

    /// JSON file with threshold settings; flags override it
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// The settings given as flags, as the topmost configuration layer.
    pub fn to_config_layer(&self) -> ConfigFile {
        ConfigFile {
            statement_threshold: self.statements,
            param_threshold: self.params,
            result_threshold: self.results,
            if_chain_threshold: self.if_chain,
            ignore_test_files: self.ignore_tests.then_some(true),
        }
    }
}
