//! Typed view of a CHORDS GeoJSON day file.
//!
//! Every field the report relies on is optional at the serde level so that
//! a missing field surfaces as a [`RainError::Schema`] naming the field,
//! rather than as an opaque decoding failure. Only malformed JSON (or a
//! field of the wrong type) is reported as [`RainError::Parse`].

use crate::error::{RainError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// Top level GeoJSON feature collection
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    pub features: Option<Vec<Feature>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    pub geometry: Option<Geometry>,
    pub properties: Option<Properties>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub coordinates: Option<Vec<f64>>,
}

/// Site description and the day's measurement series
#[derive(Debug, Clone, Deserialize)]
pub struct Properties {
    /// Presence indicator; CHORDS emits a boolean but any JSON value is accepted
    pub measurements_in_feature: Option<Value>,
    pub doi: Option<String>,
    pub project: Option<String>,
    pub affiliation: Option<String>,
    pub site: Option<String>,
    pub instrument: Option<String>,
    pub data: Option<Vec<MeasurementEntry>>,
}

/// One timestamped reading
#[derive(Debug, Clone, Deserialize)]
pub struct MeasurementEntry {
    pub time: Option<String>,
    pub measurements: Option<Readings>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Readings {
    /// Cumulative precipitation counter
    pub precip: Option<f64>,
}

impl FeatureCollection {
    /// Decode raw file bytes, attributing failures to `path`.
    ///
    /// Invalid UTF-8 is reported as a [`RainError::Parse`] like any other
    /// malformed document.
    pub fn from_slice(path: &Path, contents: &[u8]) -> Result<Self> {
        serde_json::from_slice(contents).map_err(|source| RainError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Decode a document, attributing failures to `path`
    pub fn from_json(path: &Path, contents: &str) -> Result<Self> {
        Self::from_slice(path, contents.as_bytes())
    }

    /// The first feature; later features are never consulted
    pub fn first_feature(&self, path: &Path) -> Result<&Feature> {
        self.features
            .as_deref()
            .and_then(|features| features.first())
            .ok_or_else(|| RainError::schema(path, "Missing features[0]"))
    }
}

impl Feature {
    pub fn properties(&self, path: &Path) -> Result<&Properties> {
        self.properties
            .as_ref()
            .ok_or_else(|| RainError::schema(path, "Missing features[0].properties"))
    }
}

impl Properties {
    /// Whether the feature claims to carry measurements.
    ///
    /// Follows JSON truthiness: `false`, `null`, `0`, `""`, `[]` and `{}` are
    /// falsy. When the flag is absent or null the non-emptiness of `data`
    /// decides.
    pub fn has_measurements(&self) -> bool {
        match &self.measurements_in_feature {
            Some(flag) => is_truthy(flag),
            None => self.data.as_ref().is_some_and(|data| !data.is_empty()),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}
