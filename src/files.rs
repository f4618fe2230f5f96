//! Turns the paths given on the command line into the list of files to
//! analyze.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use walkdir::{DirEntry, WalkDir};

use crate::parser;

static TEST_FILE: Lazy<Regex> = Lazy::new(|| Regex::new(r"_test\.go$").expect("valid regex"));

pub fn is_test_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| TEST_FILE.is_match(name))
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

fn walk(dir: &Path, files: &mut Vec<PathBuf>) {
    let entries = WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !(e.file_type().is_dir() && is_hidden(e)));
    for entry in entries {
        match entry {
            Ok(entry) if entry.file_type().is_file() && parser::is_supported(entry.path()) => {
                files.push(entry.into_path());
            }
            Ok(_) => {}
            Err(err) => log::warn!("skipping directory entry: {err}"),
        }
    }
}

/// Files are kept as given, directories are searched recursively for Go
/// sources. Order follows the arguments; within a directory, names are
/// sorted. Test files are dropped when `ignore_test_files` is set.
pub fn expand_paths(paths: &[PathBuf], ignore_test_files: bool) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            walk(path, &mut files);
        } else {
            files.push(path.clone());
        }
    }
    if ignore_test_files {
        files.retain(|path| {
            let keep = !is_test_file(path);
            if !keep {
                log::debug!("ignoring test file {}", path.display());
            }
            keep
        });
    }
    files
}
