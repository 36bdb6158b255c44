//! The interactive session: read a command, run it against the loaded files, print the result.
//!
//! Each command completes before the next line is read, so there is nothing to roll back when
//! the session ends. The loop is generic over its reader and writer, which keeps it testable
//! without a terminal.

use crate::batch::{inspect_file, process_files};
use crate::command::{file_ref_matches, parse_command, CommandRequest};
use crate::config::Config;
use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const HELP: &str = "\
Commands:
  <action> [<tags>] [in <files>] [except <tags>]
      action: comment | uncomment | toggle
      tags:   all, or a comma-separated list (e.g. perf,net)
      files:  comma-separated file names or path suffixes
  files      list the files in this session
  tags       list the tags found in each file
  sections   list every debug section with its state
  help       show this message
  quit       leave the session (also: exit, q)

Examples:
  comment all
  uncomment perf,net in app.ts
  toggle all in a.ts,b.ts except temp";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Whether the session keeps reading after a command.
pub enum Flow {
    /// Read the next command.
    Continue,
    /// Stop the session.
    Quit,
}

/// An interactive session over a fixed set of files.
pub struct Session<'a> {
    files: Vec<PathBuf>,
    config: &'a Config,
    dry_run: bool,
}

impl<'a> Session<'a> {
    #[must_use]
    /// Create a session over already-discovered files.
    pub fn new(files: Vec<PathBuf>, config: &'a Config, dry_run: bool) -> Self {
        Self {
            files,
            config,
            dry_run,
        }
    }

    /// Prompt for and execute commands until end of input or a quit command.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails; rejected commands and
    /// per-file failures are reported inline and the session continues.
    pub fn run<R: BufRead, W: Write>(&self, input: R, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "{} file(s) loaded. Type 'help' for commands.",
            self.files.len()
        )?;

        let mut lines = input.lines();
        loop {
            write!(out, "> ")?;
            out.flush()?;
            let Some(line) = lines.next() else {
                writeln!(out)?;
                break;
            };
            if self.execute(&line?, out)? == Flow::Quit {
                break;
            }
        }

        Ok(())
    }

    /// Execute a single command line.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing output fails.
    pub fn execute<W: Write>(&self, line: &str, out: &mut W) -> io::Result<Flow> {
        match line.trim() {
            "" => {}
            "quit" | "exit" | "q" => return Ok(Flow::Quit),
            "help" => writeln!(out, "{HELP}")?,
            "files" => {
                for file in &self.files {
                    writeln!(out, "{}", file.display())?;
                }
            }
            "tags" => self.list_tags(out)?,
            "sections" => self.list_sections(out)?,
            command => match parse_command(command) {
                Ok(request) => self.apply(&request, out)?,
                Err(e) => writeln!(out, "Invalid command: {e}")?,
            },
        }
        Ok(Flow::Continue)
    }

    fn apply<W: Write>(&self, request: &CommandRequest, out: &mut W) -> io::Result<()> {
        for file in request.files.iter().flatten() {
            if !self.files.iter().any(|path| file_ref_matches(file, path)) {
                writeln!(out, "⚠ No file matches '{file}'")?;
            }
        }

        let targets: Vec<PathBuf> = self
            .files
            .iter()
            .filter(|path| request.matches_file(path))
            .cloned()
            .collect();
        if targets.is_empty() {
            writeln!(out, "No files selected")?;
            return Ok(());
        }

        let report = process_files(
            &targets,
            request.action,
            &request.filter(),
            self.config,
            self.dry_run,
        );
        for outcome in &report.outcomes {
            writeln!(out, "{outcome}")?;
        }
        writeln!(out, "{}", report.summary())
    }

    fn list_tags<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for file in &self.files {
            match inspect_file(file, self.config) {
                Ok(sections) => {
                    let tags: BTreeSet<String> =
                        sections.into_iter().filter_map(|s| s.tag).collect();
                    if tags.is_empty() {
                        writeln!(out, "{}: (no tags)", file.display())?;
                    } else {
                        let tags: Vec<String> = tags.into_iter().collect();
                        writeln!(out, "{}: {}", file.display(), tags.join(", "))?;
                    }
                }
                Err(e) => writeln!(out, "✗ {e}")?,
            }
        }
        Ok(())
    }

    fn list_sections<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for file in &self.files {
            let sections = match inspect_file(file, self.config) {
                Ok(sections) => sections,
                Err(e) => {
                    writeln!(out, "✗ {e}")?;
                    continue;
                }
            };
            for section in sections {
                let tag = section
                    .tag
                    .as_deref()
                    .map_or_else(String::new, |tag| format!(" [{tag}]"));
                let unterminated = if section.terminated {
                    ""
                } else {
                    " (unterminated)"
                };
                writeln!(
                    out,
                    "{}:{}{tag} {}{unterminated}",
                    file.display(),
                    section.start_line + 1,
                    section.state,
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/session.rs"]
mod tests;
