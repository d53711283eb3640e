//! CSV report generation.
//!
//! The reporter walks the located files in order and writes each file's
//! outcome before reading the next. It holds no per-file data between
//! iterations; its only state is whether the header block has been written.
//!
//! The header is taken from the first file that has measurements. Leading
//! files without measurements contribute neither header nor rows.

use crate::config::ReportConfig;
use crate::constants::{
    COLUMN_HEADER, CREATED_TIMESTAMP_FORMAT, DATA_COLLECTION_URL, DATA_INFRASTRUCTURE_DESCRIPTION,
    DATA_INFRASTRUCTURE_URL, INSTRUMENT_DESCRIPTION, INSTRUMENT_URL,
};
use crate::error::Result;
use crate::extractor::DayFile;
use crate::models::{DailyRecord, ReportSummary, SiteMetadata};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReporterState {
    AwaitingHeader,
    Streaming,
}

/// Writes the daily rainfall CSV report to `W`
pub struct Reporter<'a, W: Write> {
    config: &'a ReportConfig,
    out: W,
    state: ReporterState,
    summary: ReportSummary,
}

impl<'a, W: Write> Reporter<'a, W> {
    pub fn new(config: &'a ReportConfig, out: W) -> Self {
        Self {
            config,
            out,
            state: ReporterState::AwaitingHeader,
            summary: ReportSummary::default(),
        }
    }

    pub fn state(&self) -> ReporterState {
        self.state
    }

    /// Report every path in order, stopping at the first failure
    pub fn report(mut self, paths: &[PathBuf]) -> Result<ReportSummary> {
        for path in paths {
            let day = DayFile::load(path, self.config)?;
            self.process(&day)?;
        }
        self.out.flush()?;

        if !self.summary.header_written {
            warn!(
                "None of the {} files contained measurements; report is empty",
                self.summary.files_processed
            );
        }
        info!(
            "Processed {} files: {} days reported, {} days without data",
            self.summary.files_processed, self.summary.days_reported, self.summary.days_without_data
        );
        Ok(self.summary)
    }

    /// Emit the header (once) and row for a single decoded file
    pub fn process(&mut self, day: &DayFile) -> Result<()> {
        let record = day.daily_record()?;
        self.summary.files_processed += 1;

        if !record.has_data() {
            self.summary.days_without_data += 1;
            return Ok(());
        }

        if self.state == ReporterState::AwaitingHeader {
            let metadata = day.site_metadata()?;
            debug!("Writing header from {}", day.path().display());
            self.write_header(&metadata)?;
            self.state = ReporterState::Streaming;
            self.summary.header_written = true;
        }

        self.write_row(&record)?;
        self.summary.days_reported += 1;
        Ok(())
    }

    fn write_header(&mut self, metadata: &SiteMetadata) -> Result<()> {
        write_header(&mut self.out, self.config, metadata)
    }

    fn write_row(&mut self, record: &DailyRecord) -> Result<()> {
        if let Some(row) = format_row(record) {
            writeln!(self.out, "{}", row)?;
        }
        Ok(())
    }
}

/// Write the metadata header block followed by the column header line.
///
/// Coordinates use `f64` `Display`, the shortest form that round-trips, so a
/// whole-number elevation such as `1624.0` is written as `1624`.
pub fn write_header(
    out: &mut impl Write,
    config: &ReportConfig,
    metadata: &SiteMetadata,
) -> Result<()> {
    writeln!(
        out,
        "File Created, {}Z",
        config.created_at.format(CREATED_TIMESTAMP_FORMAT)
    )?;
    writeln!(out, "DOI, {}", metadata.doi)?;
    writeln!(out, "Instrument, {} ({})", INSTRUMENT_DESCRIPTION, INSTRUMENT_URL)?;
    writeln!(
        out,
        "Data Infrastructure, {} ({})",
        DATA_INFRASTRUCTURE_DESCRIPTION, DATA_INFRASTRUCTURE_URL
    )?;
    writeln!(out, "Data Collection, {}", DATA_COLLECTION_URL)?;
    writeln!(out, "Project, {}", metadata.project)?;
    writeln!(out, "Affiliation, {}", metadata.affiliation)?;
    writeln!(out, "Site, {}", metadata.site)?;
    writeln!(out, "Instrument, {}", metadata.instrument)?;
    writeln!(out, "Longitude (deg), {}", metadata.longitude)?;
    writeln!(out, "Latitude (deg), {}", metadata.latitude)?;
    writeln!(out, "Elevation (m), {}", metadata.elevation)?;
    writeln!(out, "{}", COLUMN_HEADER)?;
    Ok(())
}

/// `<begin_time>, <daily_precip>` with the total as `%5.2f`; `None` for empty days
pub fn format_row(record: &DailyRecord) -> Option<String> {
    let begin_time = record.begin_time()?;
    let daily_precip = record.daily_precip()?;
    Some(format!("{}, {:5.2}", begin_time, daily_precip))
}
