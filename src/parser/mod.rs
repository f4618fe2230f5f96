//! Language front-ends. Each one turns raw source text into the syntax
//! model defined in `ast.rs`; the checks never see anything else.

pub mod go;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::ast::SourceFile;

pub use go::parse_go_from_str;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("read error: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0}")]
    Syntax(Box<pest::error::Error<go::Rule>>),
    #[error("unsupported file type: {0}")]
    UnsupportedLanguage(String),
}

/// Reads `path` and parses it with the front-end matching its extension.
pub fn parse_file(path: &Path) -> Result<SourceFile, ParseError> {
    let src = fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_file_from_str(&src, &path.to_string_lossy())
}

/// Parses `src` with the front-end matching the extension of `file_name`.
pub fn parse_file_from_str(src: &str, file_name: &str) -> Result<SourceFile, ParseError> {
    match Path::new(file_name).extension().and_then(|e| e.to_str()) {
        Some("go") => parse_go_from_str(src),
        _ => Err(ParseError::UnsupportedLanguage(file_name.to_owned())),
    }
}

/// Whether some front-end accepts files named like `path`.
pub fn is_supported(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("go")
}
