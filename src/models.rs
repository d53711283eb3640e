//! Core data structures for daily rainfall extraction.
//!
//! Defines the per-file daily record, the site metadata reported in the
//! header, and run statistics.

use std::path::PathBuf;

/// Time bounds and boundary readings of one day's measurement series
#[derive(Debug, Clone, PartialEq)]
pub struct DaySpan {
    pub begin_time: String,
    pub end_time: String,
    pub first_precip: f64,
    pub last_precip: f64,
}

impl DaySpan {
    /// Daily total from the cumulative counter: last reading minus first.
    ///
    /// Not clamped; a counter reset yields a negative total.
    pub fn daily_precip(&self) -> f64 {
        self.last_precip - self.first_precip
    }
}

/// Outcome of extracting one input file
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRecord {
    pub source_path: PathBuf,
    pub record_count: usize,
    /// Present only when `record_count > 0`
    pub span: Option<DaySpan>,
}

impl DailyRecord {
    /// A day without measurements
    pub fn empty(source_path: PathBuf) -> Self {
        Self {
            source_path,
            record_count: 0,
            span: None,
        }
    }

    pub fn has_data(&self) -> bool {
        self.record_count > 0 && self.span.is_some()
    }

    pub fn begin_time(&self) -> Option<&str> {
        self.span.as_ref().map(|span| span.begin_time.as_str())
    }

    pub fn daily_precip(&self) -> Option<f64> {
        self.span.as_ref().map(DaySpan::daily_precip)
    }

    /// One-line diagnostic summary of the record
    pub fn info(&self) -> String {
        match &self.span {
            Some(span) => format!(
                "{}: {} in over {} records ({} .. {})",
                self.source_path.display(),
                span.daily_precip(),
                self.record_count,
                span.begin_time,
                span.end_time
            ),
            None => format!("{}: no measurements", self.source_path.display()),
        }
    }
}

/// Site and instrument description, captured once per report
#[derive(Debug, Clone, PartialEq)]
pub struct SiteMetadata {
    pub doi: String,
    pub project: String,
    pub affiliation: String,
    pub site: String,
    pub instrument: String,
    pub longitude: f64,
    pub latitude: f64,
    pub elevation: f64,
}

/// Statistics for a report run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub files_processed: usize,
    pub days_reported: usize,
    pub days_without_data: usize,
    pub header_written: bool,
}
