//! End-to-end tests for daily rainfall report generation
//!
//! These tests write small CHORDS-style GeoJSON day files into a temporary
//! directory and run the locator and reporter over them, then run the
//! compiled binary to check its exit status and output streams.

use chrono::{TimeZone, Utc};
use daily_rain::{RainError, ReportConfig, Reporter, locate_required};
use serde_json::json;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn write_day(dir: &Path, name: &str, flag: bool, readings: &[(&str, f64)]) {
    let data: Vec<_> = readings
        .iter()
        .map(|(time, precip)| {
            json!({"time": time, "measurements": {"precip": precip, "temp": 4.2}})
        })
        .collect();
    let document = json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [-105.2705, 40.015, 1624.0]},
            "properties": {
                "measurements_in_feature": flag,
                "doi": "10.5065/example-tpg",
                "project": "Colorado Rainfall",
                "affiliation": "SugarTec LLC",
                "site": "Boulder",
                "instrument": "TPG-01",
                "data": data
            }
        }]
    });
    fs::write(dir.join(name), document.to_string()).unwrap();
}

/// Three days: rain, no measurements, light rain
fn create_three_days(temp_dir: &TempDir) {
    // Written out of order; the locator restores it
    write_day(
        temp_dir.path(),
        "tpg_2023-01-03.geojson",
        true,
        &[
            ("2023-01-03T00:00:00", 1.00),
            ("2023-01-03T12:00:00", 1.02),
            ("2023-01-03T23:59:00", 1.05),
        ],
    );
    write_day(temp_dir.path(), "tpg_2023-01-02.geojson", false, &[]);
    write_day(
        temp_dir.path(),
        "tpg_2023-01-01.geojson",
        true,
        &[("2023-01-01T00:00:00", 0.00), ("2023-01-01T23:59:00", 0.10)],
    );
}

fn config_for(temp_dir: &TempDir) -> ReportConfig {
    ReportConfig::new(temp_dir.path())
        .unwrap()
        .with_created_at(Utc.with_ymd_and_hms(2023, 2, 1, 12, 30, 45).unwrap())
}

fn run_report(config: &ReportConfig) -> (String, daily_rain::ReportSummary) {
    let files = locate_required(&config.directory, &config.pattern).unwrap();
    let mut out = Vec::new();
    let summary = Reporter::new(config, &mut out).report(&files).unwrap();
    (String::from_utf8(out).unwrap(), summary)
}

#[test]
fn test_three_day_report() {
    let temp_dir = TempDir::new().unwrap();
    create_three_days(&temp_dir);

    let (text, summary) = run_report(&config_for(&temp_dir));

    let expected = "\
File Created, 2023-02-01T12:30Z
DOI, 10.5065/example-tpg
Instrument, Sutron Total Precipitation Gauge (https://www.sutron.com/product/total-precipitation-gauge-tpg/)
Data Infrastructure, CHORDS (https://earthcubeprojects-chords.github.io/chords-docs/)
Data Collection, https://sugartecllc.chordsrt.com/
Project, Colorado Rainfall
Affiliation, SugarTec LLC
Site, Boulder
Instrument, TPG-01
Longitude (deg), -105.2705
Latitude (deg), 40.015
Elevation (m), 1624
Date, Daily Precipitation (in)
2023-01-01T00:00:00,  0.10
2023-01-03T00:00:00,  0.05
";
    assert_eq!(text, expected);
    assert_eq!(summary.files_processed, 3);
    assert_eq!(summary.days_reported, 2);
    assert_eq!(summary.days_without_data, 1);
    assert!(summary.header_written);
}

#[test]
fn test_report_is_reproducible() {
    let temp_dir = TempDir::new().unwrap();
    create_three_days(&temp_dir);
    let config = config_for(&temp_dir);

    let (first, _) = run_report(&config);
    let (second, _) = run_report(&config);
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn test_leading_empty_day_does_not_block_header() {
    let temp_dir = TempDir::new().unwrap();
    write_day(temp_dir.path(), "tpg_2023-03-01.geojson", false, &[]);
    write_day(
        temp_dir.path(),
        "tpg_2023-03-02.geojson",
        true,
        &[("2023-03-02T00:00:00", 2.0), ("2023-03-02T23:59:00", 2.0)],
    );

    let (text, summary) = run_report(&config_for(&temp_dir));
    let lines: Vec<_> = text.lines().collect();

    assert!(lines[0].starts_with("File Created, "));
    assert_eq!(lines[12], "Date, Daily Precipitation (in)");
    assert_eq!(lines[13], "2023-03-02T00:00:00,  0.00");
    assert_eq!(lines.len(), 14);
    assert_eq!(summary.days_without_data, 1);
}

#[test]
fn test_malformed_file_aborts_run() {
    let temp_dir = TempDir::new().unwrap();
    write_day(
        temp_dir.path(),
        "tpg_2023-01-01.geojson",
        true,
        &[("2023-01-01T00:00:00", 0.0)],
    );
    fs::write(temp_dir.path().join("tpg_2023-01-02.geojson"), "{\"features\": ").unwrap();

    let config = config_for(&temp_dir);
    let files = locate_required(&config.directory, &config.pattern).unwrap();
    let mut out = Vec::new();
    let result = Reporter::new(&config, &mut out).report(&files);

    match result {
        Err(RainError::Parse { path, .. }) => {
            assert!(path.ends_with("tpg_2023-01-02.geojson"));
        }
        other => panic!("Expected Parse error, got {:?}", other),
    }
}

#[test]
fn test_binary_writes_report_to_stdout() {
    let temp_dir = TempDir::new().unwrap();
    create_three_days(&temp_dir);

    let output = Command::new(env!("CARGO_BIN_EXE_daily_rain"))
        .arg("--dir")
        .arg(temp_dir.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 15);
    assert!(lines[0].starts_with("File Created, "));
    assert!(lines[0].ends_with('Z'));
    assert_eq!(lines[13], "2023-01-01T00:00:00,  0.10");
    assert_eq!(lines[14], "2023-01-03T00:00:00,  0.05");
}

#[test]
fn test_binary_verbose_echoes_paths_on_stderr() {
    let temp_dir = TempDir::new().unwrap();
    create_three_days(&temp_dir);

    let output = Command::new(env!("CARGO_BIN_EXE_daily_rain"))
        .args(["--verbose", "--pattern", "*.geojson", "--dir"])
        .arg(temp_dir.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("tpg_2023-01-01.geojson"));
    assert!(stderr.contains("tpg_2023-01-02.geojson"));
    assert!(stderr.contains("tpg_2023-01-03.geojson"));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("Processing"));
}

#[test]
fn test_binary_verbose_overrides_stricter_rust_log() {
    let temp_dir = TempDir::new().unwrap();
    create_three_days(&temp_dir);

    let output = Command::new(env!("CARGO_BIN_EXE_daily_rain"))
        .args(["-v", "--dir"])
        .arg(temp_dir.path())
        .env("RUST_LOG", "warn")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("tpg_2023-01-01.geojson"));
    assert!(stderr.contains("tpg_2023-01-03.geojson"));
}

#[test]
fn test_binary_exits_nonzero_without_matches() {
    let temp_dir = TempDir::new().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_daily_rain"))
        .arg("--dir")
        .arg(temp_dir.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("No input files which match"));
    assert!(stderr.contains("*.geojson"));
}
