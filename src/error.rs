//! Error types for file processing, configuration and the command language.
//!
//! Malformed debug sections are deliberately absent here: the scanner reports them as
//! [`Diagnostic`](crate::scanner::Diagnostic) values and copies the text through unchanged.

use std::io;
use std::path::PathBuf;

/// Failures scoped to a single file or to the invocation's configuration.
#[derive(thiserror::Error, Debug)]
pub enum ToggleError {
    /// The file exists but could not be read as UTF-8 text.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// The transformed content could not be written back.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// File that failed to save.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// A path given on the command line does not exist.
    #[error("{} not found", .0.display())]
    NotFound(PathBuf),

    /// A file was named explicitly but its suffix is not one of the configured extensions.
    #[error("{} is not a matching file (expected extension: {expected})", .path.display())]
    UnsupportedExtension {
        /// Offending file.
        path: PathBuf,
        /// Comma-separated list of accepted extensions.
        expected: String,
    },

    /// The configuration file is missing or does not parse.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Reasons an interactive command is rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing but whitespace was entered.
    #[error("empty command")]
    Empty,

    /// The first word is not `comment`, `uncomment` or `toggle`.
    #[error("unknown action '{0}' (expected comment, uncomment or toggle)")]
    UnknownAction(String),

    /// A word follows the tag list; tags are separated by commas, not spaces.
    #[error("unexpected word '{0}' (separate tags with commas)")]
    UnexpectedWord(String),

    /// `in` was given without any file names after it.
    #[error("no files given after 'in'")]
    MissingFiles,

    /// `except` was given without any tags after it.
    #[error("no tags given after 'except'")]
    MissingExceptTags,
}
