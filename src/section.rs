//! Debug section representation for marker-delimited spans of source text.
//!
//! A section runs from a start-marker line to the first end-marker line after it. Sections do
//! not nest: a second start marker before the end marker is just interior content. Sections are
//! rebuilt from the raw lines on every invocation, so nothing here outlives a single scan.

use crate::config::Config;
use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// Whether a section is currently wrapped in a block comment.
pub enum CommentState {
    /// The line after the start marker is a bare open-comment token.
    Commented,
    /// Anything else directly follows the start marker.
    Uncommented,
}

impl fmt::Display for CommentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Commented => f.write_str("commented"),
            Self::Uncommented => f.write_str("uncommented"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// Marker-delimited span of lines subject to comment toggling.
pub struct DebugSection {
    /// Index of the start-marker line (0-based).
    pub start_line: usize,
    /// Index of the end-marker line, or of the last line when unterminated.
    pub end_line: usize,
    /// Bracketed name after the start marker, if any.
    pub tag: Option<String>,
    /// Comment state inferred from the line after the start marker.
    pub state: CommentState,
    /// False when the input ended before an end marker was found.
    pub terminated: bool,
}

/// Find every debug section in a line sequence, in order.
///
/// An unterminated section swallows the rest of the input, so it is always the last one
/// returned.
pub fn locate_sections<S: AsRef<str>>(lines: &[S], config: &Config) -> Vec<DebugSection> {
    let mut sections = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i].as_ref();
        if !config.is_start_marker(line) {
            i += 1;
            continue;
        }

        let state = match lines.get(i + 1) {
            Some(next) if config.is_open_token(next.as_ref()) => CommentState::Commented,
            _ => CommentState::Uncommented,
        };
        let tag = config.tag_of(line);
        let end = (i + 1..lines.len()).find(|&j| config.is_end_marker(lines[j].as_ref()));

        if let Some(end_line) = end {
            sections.push(DebugSection {
                start_line: i,
                end_line,
                tag,
                state,
                terminated: true,
            });
            i = end_line + 1;
        } else {
            sections.push(DebugSection {
                start_line: i,
                end_line: lines.len() - 1,
                tag,
                state,
                terminated: false,
            });
            break;
        }
    }

    sections
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
