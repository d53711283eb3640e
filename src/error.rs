//! Error handling for daily rainfall extraction.
//!
//! Provides error types with context for file discovery, document
//! decoding and schema validation failures. Every variant is fatal to a
//! report run; the only non-error "skip" is a day without measurements.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RainError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No input files which match {pattern}")]
    NoMatchingFiles { pattern: String },

    #[error("Invalid file pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Could not read matched path {path}: {source}")]
    GlobEntry {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed GeoJSON document in file: {path} - {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Missing required field in file: {path} - {reason}")]
    Schema { path: PathBuf, reason: String },

    #[error("Error in date \"{value}\", use format YYYY-M-D")]
    InvalidDateFormat {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

impl RainError {
    /// Create a schema error for a missing or unusable field
    pub fn schema(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Schema {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl From<glob::GlobError> for RainError {
    fn from(error: glob::GlobError) -> Self {
        let path = error.path().to_path_buf();
        Self::GlobEntry {
            path,
            source: error.into_error(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_message() {
        let error = RainError::schema("/data/2023-01-01.geojson", "features[0].properties");
        assert_eq!(
            error.to_string(),
            "Missing required field in file: /data/2023-01-01.geojson - features[0].properties"
        );
    }

    #[test]
    fn test_no_matching_files_message() {
        let error = RainError::NoMatchingFiles {
            pattern: "/data/*.geojson".to_string(),
        };
        assert_eq!(error.to_string(), "No input files which match /data/*.geojson");
    }
}
