//! The toggling engine: apply a comment transition to the debug sections of a line sequence.
//!
//! Sections are located first (see [`locate_sections`]), then the output is assembled by
//! copying the gaps between sections verbatim and rewriting only the sections the [`Filter`]
//! selects. Tags are collected from every section regardless of the filter, so callers can
//! report what exists even when they only touch part of it.

use crate::config::Config;
use crate::section::{locate_sections, CommentState};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
/// Requested change to the comment state of selected sections.
pub enum Transition {
    /// Wrap uncommented sections; leave commented ones alone.
    Comment,
    /// Unwrap commented sections; leave uncommented ones alone.
    Uncomment,
    /// Flip every selected section.
    Toggle,
}

impl Transition {
    #[must_use]
    /// The word used for this transition on the command line and in commands.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::Uncomment => "uncomment",
            Self::Toggle => "toggle",
        }
    }

    fn wants_comment(self, state: CommentState) -> bool {
        match self {
            Self::Comment => true,
            Self::Uncomment => false,
            Self::Toggle => state == CommentState::Uncommented,
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Transition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "comment" => Ok(Self::Comment),
            "uncomment" => Ok(Self::Uncomment),
            "toggle" => Ok(Self::Toggle),
            _ => Err(s.to_string()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Inclusion and exclusion tag sets deciding which sections a transition rewrites.
///
/// `None` in either position means "no constraint". Untagged sections only pass when `only`
/// is unset, and are never caught by `except`.
pub struct Filter {
    /// When set, only sections carrying one of these tags are selected.
    pub only: Option<BTreeSet<String>>,
    /// When set, sections carrying one of these tags are never selected.
    pub except: Option<BTreeSet<String>>,
}

impl Filter {
    #[must_use]
    /// A filter that selects every section.
    pub fn all() -> Self {
        Self::default()
    }

    #[must_use]
    /// Restrict the filter to sections carrying one of these tags.
    pub fn with_only<I>(mut self, tags: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.only = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    /// Exclude sections carrying one of these tags.
    pub fn with_except<I>(mut self, tags: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.except = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    /// Whether a section with this tag should be rewritten.
    pub fn selects(&self, tag: Option<&str>) -> bool {
        let included = match (&self.only, tag) {
            (None, _) => true,
            (Some(only), Some(tag)) => only.contains(tag),
            (Some(_), None) => false,
        };
        let excluded = match (&self.except, tag) {
            (Some(except), Some(tag)) => except.contains(tag),
            _ => false,
        };
        included && !excluded
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// Non-fatal findings about the structure of the input.
pub enum Diagnostic {
    /// A start marker with no end marker before the end of input; copied through untouched.
    UnterminatedSection {
        /// 1-based line number of the start marker.
        line: usize,
        /// Tag of the unterminated section, if any.
        tag: Option<String>,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedSection { line, tag: Some(tag) } => {
                write!(f, "unterminated debug section [{tag}] starting at line {line}")
            }
            Self::UnterminatedSection { line, tag: None } => {
                write!(f, "unterminated debug section starting at line {line}")
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Result of transforming one line sequence.
pub struct ScanOutcome {
    /// The transformed lines.
    pub lines: Vec<String>,
    /// Number of sections whose comment state was changed.
    pub changes: usize,
    /// Every tag seen in the input, selected or not.
    pub tags: BTreeSet<String>,
    /// Structural problems found while scanning.
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Result of transforming a whole text buffer.
pub struct TextOutcome {
    /// The transformed text, identical to the input when nothing changed.
    pub text: String,
    /// Number of sections whose comment state was changed.
    pub changes: usize,
    /// Every tag seen in the input, selected or not.
    pub tags: BTreeSet<String>,
    /// Structural problems found while scanning.
    pub diagnostics: Vec<Diagnostic>,
}

/// Apply a transition to every section the filter selects.
///
/// Lines outside sections, excluded sections, sections already in the desired state and
/// unterminated sections are all copied verbatim.
pub fn scan_and_transform<S: AsRef<str>>(
    lines: &[S],
    transition: Transition,
    filter: &Filter,
    config: &Config,
) -> ScanOutcome {
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut changes = 0;
    let mut tags = BTreeSet::new();
    let mut diagnostics = Vec::new();
    let mut cursor = 0;

    let copy = |out: &mut Vec<String>, span: &[S]| {
        out.extend(span.iter().map(|line| line.as_ref().to_string()));
    };

    for section in locate_sections(lines, config) {
        copy(&mut out, &lines[cursor..section.start_line]);
        if let Some(tag) = &section.tag {
            tags.insert(tag.clone());
        }
        let span = &lines[section.start_line..=section.end_line];
        cursor = section.end_line + 1;

        if !section.terminated {
            diagnostics.push(Diagnostic::UnterminatedSection {
                line: section.start_line + 1,
                tag: section.tag.clone(),
            });
            copy(&mut out, span);
            continue;
        }
        if !filter.selects(section.tag.as_deref()) {
            copy(&mut out, span);
            continue;
        }

        let wants_comment = transition.wants_comment(section.state);
        match (section.state, wants_comment) {
            (CommentState::Uncommented, true) => {
                wrap(&mut out, span, config);
                changes += 1;
            }
            (CommentState::Commented, false) => {
                unwrap(&mut out, span, config);
                changes += 1;
            }
            _ => copy(&mut out, span),
        }
        tracing::trace!(
            line = section.start_line + 1,
            tag = section.tag.as_deref().unwrap_or(""),
            state = %section.state,
            %transition,
            "visited debug section"
        );
    }
    copy(&mut out, &lines[cursor.min(lines.len())..]);

    ScanOutcome {
        lines: out,
        changes,
        tags,
        diagnostics,
    }
}

/// Apply a transition to a whole text buffer, preserving every line ending.
///
/// The buffer is split on `'\n'` and rejoined with it, so a line ending in `"\r\n"` keeps
/// its `'\r'` and an untouched buffer comes back byte-for-byte. Inserted comment tokens take
/// the ending of the marker line they sit next to, which keeps mixed-ending files consistent
/// section by section.
pub fn transform_text(
    text: &str,
    transition: Transition,
    filter: &Filter,
    config: &Config,
) -> TextOutcome {
    let lines = split_lines(text);
    let outcome = scan_and_transform(&lines, transition, filter, config);

    let text = if outcome.changes == 0 {
        text.to_string()
    } else {
        outcome.lines.join("\n")
    };

    TextOutcome {
        text,
        changes: outcome.changes,
        tags: outcome.tags,
        diagnostics: outcome.diagnostics,
    }
}

#[must_use]
/// Split a buffer into lines on `'\n'`; a CRLF line keeps its trailing `'\r'`.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// The carriage return a line carries before its newline, if any.
fn line_ending(line: &str) -> &'static str {
    if line.ends_with('\r') {
        "\r"
    } else {
        ""
    }
}

/// Emit `span` (start marker through end marker) wrapped in the comment tokens.
fn wrap<S: AsRef<str>>(out: &mut Vec<String>, span: &[S], config: &Config) {
    let (first, (interior, last)) = split_ends(span);
    out.push(first.to_string());
    out.push(format!("{}{}", config.open_token, line_ending(first)));
    out.extend(interior.iter().map(|line| line.as_ref().to_string()));
    out.push(format!("{}{}", config.close_token, line_ending(last)));
    out.push(last.to_string());
}

/// Emit `span` with the open token after the start marker removed, and the close token
/// before the end marker removed when present.
fn unwrap<S: AsRef<str>>(out: &mut Vec<String>, span: &[S], config: &Config) {
    let (first, (interior, last)) = split_ends(span);
    out.push(first.to_string());
    let mut interior = interior.get(1..).unwrap_or_default();
    if let Some((tail, body)) = interior.split_last() {
        if config.is_close_token(tail.as_ref()) {
            interior = body;
        }
    }
    out.extend(interior.iter().map(|line| line.as_ref().to_string()));
    out.push(last.to_string());
}

/// Split a terminated section into its start line, interior lines and end line.
fn split_ends<S: AsRef<str>>(span: &[S]) -> (&str, (&[S], &str)) {
    let first = span.first().map_or("", |line| line.as_ref());
    let last = span.last().map_or("", |line| line.as_ref());
    let interior = span.get(1..span.len().saturating_sub(1)).unwrap_or_default();
    (first, (interior, last))
}

#[cfg(test)]
#[path = "tests/scanner.rs"]
mod tests;
