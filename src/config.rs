//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find a debug-toggle.toml, and if present we load settings from there.
//! This provides the marker strings, the comment delimiters and the file extension preferences.
//! The loaded value is never mutated once processing starts; every component borrows it.

use crate::error::ToggleError;
use facet::Facet;
use std::fs;
use std::path::Path;

/// File looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE: &str = "debug-toggle.toml";

const START_MARKER: &str = "// DEBUG START";
const END_MARKER: &str = "// DEBUG END";
const OPEN_TOKEN: &str = "/*";
const CLOSE_TOKEN: &str = "*/";

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from debug-toggle.toml or falling back to defaults.
pub struct Config {
    #[facet(default = vec!["ts".to_string()])]
    /// File suffixes to match when scanning directories.
    pub file_extensions: Vec<String>,
    #[facet(default = false)]
    /// Descend into subdirectories when a directory is given.
    pub recursive: bool,
    #[facet(default = START_MARKER.to_string())]
    /// Substring that opens a debug section.
    pub start_marker: String,
    #[facet(default = END_MARKER.to_string())]
    /// Substring that closes a debug section.
    pub end_marker: String,
    #[facet(default = OPEN_TOKEN.to_string())]
    /// Line content that opens the block comment.
    pub open_token: String,
    #[facet(default = CLOSE_TOKEN.to_string())]
    /// Line content that closes the block comment.
    pub close_token: String,
    #[facet(default = "warn".to_string())]
    /// Tracing filter directive used when `DEBUG_TOGGLE_LOG` is unset.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file_extensions: vec!["ts".to_string()],
            recursive: false,
            start_marker: START_MARKER.to_string(),
            end_marker: END_MARKER.to_string(),
            open_token: OPEN_TOKEN.to_string(),
            close_token: CLOSE_TOKEN.to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from debug-toggle.toml if present, defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ToggleError> {
        let path = Path::new(CONFIG_FILE);
        if path.is_file() {
            Self::load_from(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable or not valid TOML for this schema.
    pub fn load_from(path: &Path) -> Result<Self, ToggleError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ToggleError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml(&contents)
            .map_err(|e| ToggleError::Config(format!("{}: {e}", path.display())))
    }

    /// Parse configuration from TOML text; absent keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns the parser's message if the text does not match the schema.
    pub fn from_toml(contents: &str) -> Result<Self, String> {
        facet_toml::from_str::<Self>(contents).map_err(|e| e.to_string())
    }

    #[must_use]
    /// Whether the path's suffix is one of the configured extensions.
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.file_extensions
                    .iter()
                    .any(|wanted| wanted.trim_start_matches('.') == ext)
            })
    }

    #[must_use]
    /// Whether the line opens a debug section.
    pub fn is_start_marker(&self, line: &str) -> bool {
        line.contains(&self.start_marker)
    }

    #[must_use]
    /// Whether the line closes a debug section.
    pub fn is_end_marker(&self, line: &str) -> bool {
        line.contains(&self.end_marker)
    }

    #[must_use]
    /// Whether the line is a bare open-comment token, ignoring surrounding whitespace.
    pub fn is_open_token(&self, line: &str) -> bool {
        line.trim() == self.open_token
    }

    #[must_use]
    /// Whether the line is a bare close-comment token, ignoring surrounding whitespace.
    pub fn is_close_token(&self, line: &str) -> bool {
        line.trim() == self.close_token
    }

    #[must_use]
    /// Extract the bracketed tag following the start marker, as in `// DEBUG START [perf]`.
    ///
    /// Returns `None` when the line has no start marker, no brackets, or empty brackets.
    pub fn tag_of(&self, line: &str) -> Option<String> {
        let (_, after) = line.split_once(&self.start_marker)?;
        let rest = after.trim_start().strip_prefix('[')?;
        let (tag, _) = rest.split_once(']')?;
        let tag = tag.trim();
        (!tag.is_empty()).then(|| tag.to_string())
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
