//! Per-file extraction of daily rainfall and site metadata.
//!
//! A [`DayFile`] is one decoded GeoJSON document. From it the reporter
//! derives the [`DailyRecord`] for every file and, once per run, the
//! [`SiteMetadata`] for the header block.

use crate::config::ReportConfig;
use crate::error::{RainError, Result};
use crate::models::{DailyRecord, DaySpan, SiteMetadata};
use crate::schema::{FeatureCollection, MeasurementEntry, Properties};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A decoded day file
#[derive(Debug, Clone)]
pub struct DayFile {
    path: PathBuf,
    document: FeatureCollection,
}

impl DayFile {
    /// Read and decode `path`, echoing it first in verbose mode
    pub fn load(path: &Path, config: &ReportConfig) -> Result<Self> {
        if config.verbose {
            info!("Processing {}", path.display());
        }

        let contents = fs::read(path)?;
        let document = FeatureCollection::from_slice(path, &contents)?;
        Ok(Self {
            path: path.to_path_buf(),
            document,
        })
    }

    /// Decode an in-memory document attributed to `path`
    pub fn from_json(path: &Path, contents: &str) -> Result<Self> {
        let document = FeatureCollection::from_json(path, contents)?;
        Ok(Self {
            path: path.to_path_buf(),
            document,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn properties(&self) -> Result<&Properties> {
        self.document
            .first_feature(&self.path)?
            .properties(&self.path)
    }

    /// Extract the day's record count, time bounds and precipitation total
    pub fn daily_record(&self) -> Result<DailyRecord> {
        let properties = self.properties()?;

        if !properties.has_measurements() {
            debug!("No measurements in {}", self.path.display());
            return Ok(DailyRecord::empty(self.path.clone()));
        }

        let data = properties
            .data
            .as_deref()
            .ok_or_else(|| RainError::schema(&self.path, "Missing features[0].properties.data"))?;

        let (Some(first), Some(last)) = (data.first(), data.last()) else {
            return Err(RainError::schema(
                &self.path,
                "measurements_in_feature is set but features[0].properties.data is empty",
            ));
        };

        let (begin_time, first_precip) = self.boundary_reading(first, 0)?;
        let (end_time, last_precip) = self.boundary_reading(last, data.len() - 1)?;

        let record = DailyRecord {
            source_path: self.path.clone(),
            record_count: data.len(),
            span: Some(DaySpan {
                begin_time,
                end_time,
                first_precip,
                last_precip,
            }),
        };
        debug!("{}", record.info());
        Ok(record)
    }

    fn boundary_reading(&self, entry: &MeasurementEntry, index: usize) -> Result<(String, f64)> {
        let time = entry.time.clone().ok_or_else(|| {
            RainError::schema(&self.path, format!("Missing data[{}].time", index))
        })?;
        let precip = entry
            .measurements
            .as_ref()
            .and_then(|readings| readings.precip)
            .ok_or_else(|| {
                RainError::schema(
                    &self.path,
                    format!("Missing data[{}].measurements.precip", index),
                )
            })?;
        Ok((time, precip))
    }

    /// Extract site description and coordinates for the report header
    pub fn site_metadata(&self) -> Result<SiteMetadata> {
        let feature = self.document.first_feature(&self.path)?;
        let properties = feature.properties(&self.path)?;

        let field = |value: &Option<String>, name: &str| {
            value.clone().ok_or_else(|| {
                RainError::schema(&self.path, format!("Missing features[0].properties.{}", name))
            })
        };

        let coordinates = feature
            .geometry
            .as_ref()
            .and_then(|geometry| geometry.coordinates.as_deref())
            .ok_or_else(|| {
                RainError::schema(&self.path, "Missing features[0].geometry.coordinates")
            })?;

        let [longitude, latitude, elevation, ..] = coordinates else {
            return Err(RainError::schema(
                &self.path,
                format!(
                    "features[0].geometry.coordinates has {} values, expected longitude, latitude and elevation",
                    coordinates.len()
                ),
            ));
        };

        Ok(SiteMetadata {
            doi: field(&properties.doi, "doi")?,
            project: field(&properties.project, "project")?,
            affiliation: field(&properties.affiliation, "affiliation")?,
            site: field(&properties.site, "site")?,
            instrument: field(&properties.instrument, "instrument")?,
            longitude: *longitude,
            latitude: *latitude,
            elevation: *elevation,
        })
    }
}

/// Extract the daily record of a single file
pub fn extract(path: &Path, config: &ReportConfig) -> Result<DailyRecord> {
    DayFile::load(path, config)?.daily_record()
}
