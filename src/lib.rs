//! Daily Rain Library
//!
//! Extracts daily rainfall totals from a directory of CHORDS GeoJSON files
//! recorded by a Sutron Total Precipitation Gauge, one file per day, and
//! writes them as a CSV report with a site metadata header.
//!
//! This library provides tools for:
//! - Locating day files in chronological (file name) order
//! - Decoding day files into a typed schema with explicit presence checks
//! - Deriving the daily total from the cumulative precipitation counter
//! - Writing the report header and one row per day with measurements

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod extractor;
pub mod locator;
pub mod models;
pub mod reporter;
pub mod schema;

// Re-export commonly used types
pub use config::ReportConfig;
pub use error::{RainError, Result};
pub use extractor::{DayFile, extract};
pub use locator::{FileLocator, locate_required};
pub use models::{DailyRecord, DaySpan, ReportSummary, SiteMetadata};
pub use reporter::{Reporter, ReporterState};
