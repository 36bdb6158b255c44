//! Resolve command-line paths into the list of files to process.
//!
//! Explicit files must carry a configured extension; directories contribute their matching
//! files, recursively when the configuration asks for it. Symlinked directories are never
//! descended into, and a file reachable under several names is kept once, so no file is
//! toggled twice in one run.

use crate::config::Config;
use crate::error::ToggleError;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Expand files and directories into a sorted, deduplicated list of matching files.
///
/// # Errors
///
/// Returns an error if a path does not exist, if an explicit file has the wrong extension,
/// or if a directory cannot be listed.
pub fn find_documents(paths: &[PathBuf], config: &Config) -> Result<Vec<PathBuf>, ToggleError> {
    let mut documents = Vec::new();

    for path in paths {
        if path.is_file() {
            if !config.matches_extension(path) {
                return Err(ToggleError::UnsupportedExtension {
                    path: path.clone(),
                    expected: config.file_extensions.join(", "),
                });
            }
            documents.push(path.clone());
        } else if path.is_dir() {
            collect_dir(path, config, &mut documents)?;
        } else {
            return Err(ToggleError::NotFound(path.clone()));
        }
    }

    documents.sort();
    dedup_by_target(documents)
}

/// Keep the first path for each distinct file on disk.
fn dedup_by_target(documents: Vec<PathBuf>) -> Result<Vec<PathBuf>, ToggleError> {
    let mut seen = BTreeSet::new();
    let mut unique = Vec::with_capacity(documents.len());

    for path in documents {
        let target = fs::canonicalize(&path).map_err(|source| ToggleError::Read {
            path: path.clone(),
            source,
        })?;
        if seen.insert(target) {
            unique.push(path);
        }
    }

    Ok(unique)
}

fn collect_dir(dir: &Path, config: &Config, out: &mut Vec<PathBuf>) -> Result<(), ToggleError> {
    let max_depth = if config.recursive { usize::MAX } else { 1 };

    for next in WalkDir::new(dir).max_depth(max_depth).follow_links(false) {
        match next {
            Ok(entry) => {
                if let Some(path) = matching_file(entry, config) {
                    out.push(path);
                }
            }
            Err(err) => {
                if err.loop_ancestor().is_some() {
                    continue;
                }
                let path = err.path().unwrap_or(dir).to_path_buf();
                let message = err.to_string();
                let source = err
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other(message));
                return Err(ToggleError::Read { path, source });
            }
        }
    }

    Ok(())
}

/// A walked entry worth processing: a regular file, or a symlink resolving to one, with a
/// configured extension.
fn matching_file(entry: DirEntry, config: &Config) -> Option<PathBuf> {
    if entry.file_type().is_dir() {
        return None;
    }
    let path = entry.into_path();
    (path.is_file() && config.matches_extension(&path)).then_some(path)
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
