//! Report configuration.
//!
//! Holds the source directory, file pattern, verbosity and the report
//! creation timestamp. The timestamp is part of the configuration so that
//! two runs over the same files can produce identical output.

use crate::constants::{DEFAULT_DIRECTORY, DEFAULT_PATTERN};
use crate::error::Result;
use chrono::{DateTime, Utc};
use std::path::{MAIN_SEPARATOR, Path, PathBuf};
use tracing::debug;

/// Configuration for a daily rainfall report run
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Absolute source directory ending with a path separator
    pub directory: PathBuf,

    /// Glob pattern applied inside `directory`
    pub pattern: String,

    /// Echo each file path before it is processed
    pub verbose: bool,

    /// Timestamp written to the "File Created" header line
    pub created_at: DateTime<Utc>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_DIRECTORY),
            pattern: DEFAULT_PATTERN.to_string(),
            verbose: false,
            created_at: Utc::now(),
        }
    }
}

impl ReportConfig {
    /// Create configuration for a directory, normalizing it
    pub fn new(directory: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            directory: normalize_directory(directory.as_ref())?,
            ..Self::default()
        })
    }

    /// Set the file matching pattern
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Enable verbose output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Fix the report creation timestamp
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Directory and pattern joined, as handed to the glob expansion
    pub fn search_pattern(&self) -> String {
        format!("{}{}", self.directory.display(), self.pattern)
    }
}

/// Expand a leading `~`, make the path absolute and end it with a separator.
///
/// `.` and `..` components are resolved lexically; the directory does not
/// have to exist.
pub fn normalize_directory(directory: &Path) -> Result<PathBuf> {
    let expanded = expand_home(directory);
    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        std::env::current_dir()?.join(expanded)
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            std::path::Component::CurDir => {}
            std::path::Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }

    let mut text = normalized.into_os_string();
    if !text.to_string_lossy().ends_with(MAIN_SEPARATOR) {
        text.push(MAIN_SEPARATOR.to_string());
    }

    let normalized = PathBuf::from(text);
    debug!(
        "Normalized directory {} to {}",
        directory.display(),
        normalized.display()
    );
    Ok(normalized)
}

fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}
