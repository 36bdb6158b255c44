//! Parser for the interactive command language.
//!
//! ```text
//! <action> [<tags>] [in <files>] [except <tags>]
//! ```
//!
//! `<action>` is `comment`, `uncomment` or `toggle`; `<tags>` is `all` or a comma-separated
//! list of single-word tags; `<files>` is a comma-separated list of file names or path
//! suffixes. `except` may follow either the main clause or the file clause. When both carry
//! one, the file clause wins.

use crate::error::ParseError;
use crate::scanner::{Filter, Transition};
use std::collections::BTreeSet;
use std::path::Path;

const IN: &str = " in ";
const EXCEPT: &str = " except ";
const ALL: &str = "all";

#[derive(Clone, Debug, PartialEq, Eq)]
/// A fully resolved interactive command.
pub struct CommandRequest {
    /// Transition to apply.
    pub action: Transition,
    /// Tags to touch; `None` means every section.
    pub tags: Option<BTreeSet<String>>,
    /// Files to touch; `None` means every file in the session.
    pub files: Option<BTreeSet<String>>,
    /// Tags to leave alone; `None` means exclude nothing.
    pub except_tags: Option<BTreeSet<String>>,
}

impl CommandRequest {
    #[must_use]
    /// The section filter this request implies.
    pub fn filter(&self) -> Filter {
        Filter {
            only: self.tags.clone(),
            except: self.except_tags.clone(),
        }
    }

    #[must_use]
    /// Whether the request's file set covers this path.
    ///
    /// A file reference matches the full path, the bare file name, or any trailing run of
    /// path components (`src/app.ts` matches `/repo/src/app.ts`).
    pub fn matches_file(&self, path: &Path) -> bool {
        self.files
            .as_ref()
            .is_none_or(|files| files.iter().any(|file| file_ref_matches(file, path)))
    }
}

/// Whether a single file reference names this path.
#[must_use]
pub fn file_ref_matches(file: &str, path: &Path) -> bool {
    let reference = Path::new(file);
    path == reference || path.ends_with(reference)
}

/// Parse one command line into a request.
///
/// # Errors
///
/// Returns a [`ParseError`] for an empty command, an unknown action, a tag list followed by
/// another word, or an `in`/`except` keyword with nothing after it.
pub fn parse_command(command: &str) -> Result<CommandRequest, ParseError> {
    let command = command.trim();
    if command.is_empty() {
        return Err(ParseError::Empty);
    }

    let (main, file_clause) = match command.split_once(IN) {
        Some((main, rest)) => (main, Some(rest)),
        None => (command, None),
    };

    let mut files = None;
    let mut except_tags = None;

    if let Some(clause) = file_clause {
        let (file_list, except_list) = match clause.split_once(EXCEPT) {
            Some((files, except)) => (files, Some(except)),
            None if clause.ends_with(" except") => return Err(ParseError::MissingExceptTags),
            None => (clause, None),
        };
        let list = split_list(file_list).ok_or(ParseError::MissingFiles)?;
        files = (!is_all(&list)).then_some(list);
        if let Some(list) = except_list {
            except_tags = Some(split_list(list).ok_or(ParseError::MissingExceptTags)?);
        }
    } else if main.ends_with(" in") {
        return Err(ParseError::MissingFiles);
    }

    let head = match main.split_once(EXCEPT) {
        Some((head, list)) => {
            let list = split_list(list).ok_or(ParseError::MissingExceptTags)?;
            // First writer wins: an exclusion from the file clause is kept.
            if except_tags.is_none() {
                except_tags = Some(list);
            }
            head
        }
        None if main.ends_with(" except") => return Err(ParseError::MissingExceptTags),
        None => main,
    };

    // Spaces around commas belong to the list, not between words.
    let head = head.split(',').map(str::trim).collect::<Vec<_>>().join(",");
    let mut words = head.split_whitespace();
    let action = words
        .next()
        .ok_or(ParseError::Empty)?
        .parse::<Transition>()
        .map_err(ParseError::UnknownAction)?;
    let tags = words
        .next()
        .and_then(split_list)
        .filter(|list| !is_all(list));
    if let Some(extra) = words.next() {
        return Err(ParseError::UnexpectedWord(extra.to_string()));
    }

    Ok(CommandRequest {
        action,
        tags,
        files,
        except_tags,
    })
}

/// Split a comma-separated list, trimming items and dropping empty ones.
fn split_list(list: &str) -> Option<BTreeSet<String>> {
    let items: BTreeSet<String> = list
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();
    (!items.is_empty()).then_some(items)
}

fn is_all(list: &BTreeSet<String>) -> bool {
    list.len() == 1 && list.contains(ALL)
}

#[cfg(test)]
#[path = "tests/command.rs"]
mod tests;
