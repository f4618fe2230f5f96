//! Library crate for splint.
//!
//! The binary is a thin shell over these modules: the Go front-end builds
//! an AST, the rules inspect each function declaration, and the analyzer
//! folds their findings into a [`summary::Summary`] that a reporter renders.

pub mod analyzer;
pub mod ast;
pub mod cli;
pub mod config;
pub mod files;
pub mod parser;
pub mod report;
pub mod rules;
pub mod summary;

use wasm_bindgen::prelude::*;

use crate::config::{parse_config_from_text, ConfigFile};
use crate::summary::Summary;

fn error_json(message: String) -> String {
    serde_json::json!({ "error": message }).to_string()
}

// Entry point for the browser build: lints one in-memory file.
#[wasm_bindgen]
pub fn lint_source(source_code: &str, config_json: &str, file_name: &str) -> String {
    let trimmed = config_json.trim();
    let layer = if trimmed.is_empty() {
        Ok(ConfigFile::default())
    } else {
        parse_config_from_text(trimmed)
    };
    let config = match layer.and_then(ConfigFile::resolve) {
        Ok(config) => config,
        Err(e) => return error_json(e.to_string()),
    };

    let report = match analyzer::analyze_source(file_name, source_code, &config) {
        Ok(report) => report,
        Err(e) => return error_json(format!("Parse Error: {e}")),
    };

    let mut summary = Summary::new();
    summary.extend(report.offenders);
    serde_json::to_string(&summary).unwrap_or_else(|_| "{}".into())
}
