//! The batch layer turns engine output into actual edits on disk.
//!
//! Each file is read, transformed and written back in one pass, and only when the text
//! actually changed. A failure is recorded against its file and the batch carries on.
//! Writes are plain overwrites, so an interrupted write can leave a file truncated.

use crate::config::Config;
use crate::error::ToggleError;
use crate::report::{BatchReport, FileFailure, FileOutcome, FileReport};
use crate::scanner::{split_lines, transform_text, Filter, Transition};
use crate::section::{locate_sections, DebugSection};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Apply a transition to one file, rewriting it only when its content changes.
///
/// With `dry_run` set the file is never written, but the report still counts the sections
/// that would change.
///
/// # Errors
///
/// Returns an error if the file cannot be read as UTF-8 or cannot be written back.
pub fn process_file(
    path: &Path,
    transition: Transition,
    filter: &Filter,
    config: &Config,
    dry_run: bool,
) -> Result<FileReport, ToggleError> {
    let original = fs::read_to_string(path).map_err(|source| ToggleError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let outcome = transform_text(&original, transition, filter, config);
    for diagnostic in &outcome.diagnostics {
        warn!(path = %path.display(), "{diagnostic}");
    }

    let changed = outcome.text != original;
    let written = changed && !dry_run;
    if written {
        fs::write(path, &outcome.text).map_err(|source| ToggleError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }
    debug!(
        path = %path.display(),
        %transition,
        changes = outcome.changes,
        written,
        "processed file"
    );

    Ok(FileReport {
        path: path.to_path_buf(),
        changes: outcome.changes,
        written,
        dry_run,
        tags: outcome.tags,
        diagnostics: outcome.diagnostics,
    })
}

/// List the debug sections of a file without changing it.
///
/// # Errors
///
/// Returns an error if the file cannot be read as UTF-8.
pub fn inspect_file(path: &Path, config: &Config) -> Result<Vec<DebugSection>, ToggleError> {
    let text = fs::read_to_string(path).map_err(|source| ToggleError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(locate_sections(&split_lines(&text), config))
}

/// Apply a transition to each file in turn, recording one outcome per file in order.
pub fn process_files(
    paths: &[PathBuf],
    transition: Transition,
    filter: &Filter,
    config: &Config,
    dry_run: bool,
) -> BatchReport {
    let mut report = BatchReport::default();

    for path in paths {
        match process_file(path, transition, filter, config, dry_run) {
            Ok(file) => report.outcomes.push(FileOutcome::Processed(file)),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to process file");
                report.outcomes.push(FileOutcome::Failed(FileFailure {
                    path: path.clone(),
                    error: e.to_string(),
                }));
            }
        }
    }

    report
}

#[cfg(test)]
#[path = "tests/batch.rs"]
mod tests;
