//! Per-file and per-batch results, printable for people and serialisable for tools.

use crate::scanner::Diagnostic;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
/// Outcome of processing one file successfully.
pub struct FileReport {
    /// File that was scanned.
    pub path: PathBuf,
    /// Sections whose comment state changed (or would change, in a dry run).
    pub changes: usize,
    /// Whether the file content on disk was rewritten.
    pub written: bool,
    /// Whether the run was a dry run that left the file untouched.
    pub dry_run: bool,
    /// Every tag found in the file.
    pub tags: BTreeSet<String>,
    /// Structural problems found while scanning.
    pub diagnostics: Vec<Diagnostic>,
}

impl fmt::Display for FileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path.display();
        if self.changes == 0 {
            write!(f, "○ No changes needed: {path}")?;
        } else if self.dry_run {
            write!(f, "~ Would modify: {path} ({} debug section(s))", self.changes)?;
        } else {
            write!(
                f,
                "✓ Modified: {path} ({} debug section(s) toggled)",
                self.changes
            )?;
        }
        for diagnostic in &self.diagnostics {
            write!(f, "\n  ! {diagnostic}")?;
        }
        Ok(())
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
/// A file that could not be processed.
pub struct FileFailure {
    /// File that failed.
    pub path: PathBuf,
    /// Human-readable reason.
    pub error: String,
}

impl fmt::Display for FileFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "✗ Error processing {}: {}", self.path.display(), self.error)
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
/// What happened to one file of a batch.
pub enum FileOutcome {
    /// The file was scanned (and possibly rewritten).
    Processed(FileReport),
    /// The file could not be processed.
    Failed(FileFailure),
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Processed(report) => fmt::Display::fmt(report, f),
            Self::Failed(failure) => fmt::Display::fmt(failure, f),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Collected results of processing a list of files.
pub struct BatchReport {
    /// One outcome per attempted file, in processing order.
    pub outcomes: Vec<FileOutcome>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    files: &'a [FileOutcome],
    changes: usize,
    tags: BTreeSet<String>,
    summary: String,
}

impl BatchReport {
    /// Files processed successfully, in processing order.
    pub fn processed(&self) -> impl Iterator<Item = &FileReport> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            FileOutcome::Processed(report) => Some(report),
            FileOutcome::Failed(_) => None,
        })
    }

    /// Files that failed, in processing order.
    pub fn failures(&self) -> impl Iterator<Item = &FileFailure> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            FileOutcome::Failed(failure) => Some(failure),
            FileOutcome::Processed(_) => None,
        })
    }

    #[must_use]
    /// Number of files attempted.
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    #[must_use]
    /// Total sections changed across all files.
    pub fn changes(&self) -> usize {
        self.processed().map(|file| file.changes).sum()
    }

    #[must_use]
    /// Union of tags found across all files.
    pub fn tags(&self) -> BTreeSet<String> {
        self.processed()
            .flat_map(|file| file.tags.iter().cloned())
            .collect()
    }

    #[must_use]
    /// Whether every attempted file was processed.
    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }

    #[must_use]
    /// One-line tally in the form `3/4 files processed successfully`.
    pub fn summary(&self) -> String {
        format!(
            "{}/{} files processed successfully",
            self.processed().count(),
            self.total()
        )
    }

    /// Render the report as pretty-printed JSON, with the per-file outcomes in order followed
    /// by the batch totals.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&JsonReport {
            files: &self.outcomes,
            changes: self.changes(),
            tags: self.tags(),
            summary: self.summary(),
        })
    }
}
