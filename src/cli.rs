//! Command-line interface components.

use crate::config::ReportConfig;
use crate::constants::{DATE_INPUT_FORMAT, DEFAULT_DIRECTORY, DEFAULT_PATTERN, INPUT_DOCUMENT_HELP};
use crate::error::{RainError, Result};
use chrono::NaiveDate;
use clap::{CommandFactory, FromArgMatches, Parser};
use std::path::PathBuf;

/// Iterate through a collection of CHORDS geojson files from a TPG instrument,
/// extracting the daily rainfall. Write this to stdout, in CSV format.
#[derive(Parser, Debug, Clone)]
#[command(name = "daily_rain")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// File matching pattern
    #[arg(short, long, default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    /// Source directory
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_DIRECTORY)]
    pub dir: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Parse process arguments, with the input format and platform in the help text
    pub fn parse_with_epilog() -> Self {
        let matches = Self::command().after_help(epilog()).get_matches();
        match Self::from_arg_matches(&matches) {
            Ok(args) => args,
            Err(error) => error.exit(),
        }
    }

    /// Build the report configuration, normalizing the source directory
    pub fn to_config(&self) -> Result<ReportConfig> {
        Ok(ReportConfig::new(&self.dir)?
            .with_pattern(&self.pattern)
            .with_verbose(self.verbose))
    }

    /// Log level used when `RUST_LOG` is not set
    pub fn get_log_level(&self) -> &'static str {
        if self.verbose { "info" } else { "warn" }
    }
}

fn epilog() -> String {
    format!(
        "{}\n\nThis operating system is {}, the architecture is {}.",
        INPUT_DOCUMENT_HELP,
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

/// Validate a `YYYY-M-D` date
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_INPUT_FORMAT).map_err(|source| {
        RainError::InvalidDateFormat {
            value: value.to_string(),
            source,
        }
    })
}
