//! File discovery for daily GeoJSON downloads
//!
//! Expands a glob pattern inside the source directory and returns the
//! matches in ascending lexicographic order.
//!
//! The report relies on that order being chronological. CHORDS downloads are
//! named with a zero-padded date (`..._2023-01-01.geojson` or
//! `..._20230101.geojson`), for which the two orders coincide. The locator
//! checks the convention and warns when a file name breaks it.

use crate::error::{RainError, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, warn};

static DATE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{4})-?(\d{2})-?(\d{2})").expect("date token regex is valid")
});

/// Locates input files for a report run
#[derive(Debug)]
pub struct FileLocator {
    directory: PathBuf,
    pattern: String,
}

impl FileLocator {
    /// Create a locator for `pattern` inside an already normalized directory
    pub fn new(directory: impl Into<PathBuf>, pattern: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            pattern: pattern.into(),
        }
    }

    /// The full glob expression, used in "no matching files" diagnostics
    pub fn search_pattern(&self) -> String {
        let directory = self.directory.to_string_lossy();
        if directory.is_empty() || directory.ends_with(std::path::MAIN_SEPARATOR) {
            format!("{}{}", directory, self.pattern)
        } else {
            format!("{}{}{}", directory, std::path::MAIN_SEPARATOR, self.pattern)
        }
    }

    /// Return matching file paths sorted by path string.
    ///
    /// An empty list is not an error here; callers decide how to surface it.
    pub fn locate(&self) -> Result<Vec<PathBuf>> {
        let search_pattern = self.search_pattern();
        debug!("Searching for files matching: {}", search_pattern);

        let entries = glob::glob(&search_pattern).map_err(|source| RainError::Pattern {
            pattern: search_pattern.clone(),
            source,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry?;
            if path.is_file() {
                files.push(path);
            }
        }

        // Whole-string order; `PathBuf`'s `Ord` compares component by component
        files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
        debug!("Found {} files matching {}", files.len(), search_pattern);

        check_chronological(&files);
        Ok(files)
    }
}

/// Locate files, turning an empty result into [`RainError::NoMatchingFiles`]
pub fn locate_required(directory: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let locator = FileLocator::new(directory, pattern);
    let files = locator.locate()?;
    if files.is_empty() {
        return Err(RainError::NoMatchingFiles {
            pattern: locator.search_pattern(),
        });
    }
    Ok(files)
}

/// Date embedded in a file name, if any
fn date_token(path: &Path) -> Option<NaiveDate> {
    let name = path.file_name()?.to_str()?;
    DATE_TOKEN.captures_iter(name).find_map(|captures| {
        let year = captures[1].parse().ok()?;
        let month = captures[2].parse().ok()?;
        let day = captures[3].parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    })
}

/// Warn when sorted order disagrees with embedded dates
fn check_chronological(files: &[PathBuf]) -> bool {
    let mut previous: Option<(NaiveDate, &Path)> = None;
    let mut ordered = true;

    for path in files {
        let Some(date) = date_token(path) else {
            debug!("No date token in file name: {}", path.display());
            continue;
        };
        if let Some((previous_date, previous_path)) = previous {
            if date < previous_date {
                warn!(
                    "File {} ({}) sorts after {} ({}); rows will not be chronological",
                    path.display(),
                    date,
                    previous_path.display(),
                    previous_date
                );
                ordered = false;
            }
        }
        previous = Some((date, path));
    }

    ordered
}
