//! Fixed values used across the daily rainfall report.
//!
//! Defaults for the command-line surface and the literal text of the
//! report header live here so the reporter and its tests agree on them.

/// Default file matching pattern for CHORDS GeoJSON downloads
pub const DEFAULT_PATTERN: &str = "*.geojson";

/// Default source directory, normalized to an absolute path at startup
pub const DEFAULT_DIRECTORY: &str = "./";

/// Format of the "File Created" timestamp (minute precision, UTC)
pub const CREATED_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Accepted format for user supplied dates (`YYYY-M-D`)
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

// Header block text
pub const INSTRUMENT_DESCRIPTION: &str = "Sutron Total Precipitation Gauge";
pub const INSTRUMENT_URL: &str = "https://www.sutron.com/product/total-precipitation-gauge-tpg/";
pub const DATA_INFRASTRUCTURE_DESCRIPTION: &str = "CHORDS";
pub const DATA_INFRASTRUCTURE_URL: &str = "https://earthcubeprojects-chords.github.io/chords-docs/";
pub const DATA_COLLECTION_URL: &str = "https://sugartecllc.chordsrt.com/";

/// Column header line preceding the data rows
pub const COLUMN_HEADER: &str = "Date, Daily Precipitation (in)";

/// Shape of an input file, shown in the command-line help
pub const INPUT_DOCUMENT_HELP: &str = r#"The json in each input file is expected to have at least the following elements:

{
  "features": [
    {
      "geometry": { "coordinates": [lon, lat, elev] },
      "properties": {
        "measurements_in_feature": true,
        "doi": "...", "project": "...", "affiliation": "...",
        "site": "...", "instrument": "...",
        "data": [ { "time": "...", "measurements": { "precip": 0.0 } } ]
      }
    }
  ]
}"#;
