//! Common test fixtures for heatmap tests.
//!
//! Fixtures use the real base temperature of the land-surface dataset
//! (8.66 °C) so expected strings can be checked by hand.

use std::io::Write;
use std::path::PathBuf;

use heatmap_common::{MonthRecord, TemperatureDataset};

/// Base temperature of the published land-surface dataset.
pub const BASE_TEMPERATURE: f64 = 8.66;

/// Abbreviated dataset document in the wire format.
pub const SAMPLE_JSON: &str = r#"{
  "baseTemperature": 8.66,
  "monthlyVariance": [
    {"year": 1754, "month": 1, "variance": -1.2},
    {"year": 1754, "month": 2, "variance": -0.85},
    {"year": 1900, "month": 1, "variance": -0.34},
    {"year": 1900, "month": 7, "variance": 0.12},
    {"year": 2015, "month": 12, "variance": 1.5}
  ]
}"#;

/// The two-record dataset spanning the chart corners.
///
/// January 1754 (7.46 °C) and December 2015 (10.16 °C).
pub fn corner_dataset() -> TemperatureDataset {
    TemperatureDataset::new(
        BASE_TEMPERATURE,
        vec![
            MonthRecord::new(1754, 1, -1.2),
            MonthRecord::new(2015, 12, 1.5),
        ],
    )
}

/// Parsed form of [`SAMPLE_JSON`].
pub fn sample_dataset() -> TemperatureDataset {
    match TemperatureDataset::from_json(SAMPLE_JSON) {
        Ok(dataset) => dataset,
        Err(e) => panic!("SAMPLE_JSON fixture is invalid: {}", e),
    }
}

/// Write a JSON document to a temp file and return the guard plus its path.
///
/// The file is removed when the returned `NamedTempFile` is dropped.
pub fn write_temp_json(contents: &str) -> (tempfile::NamedTempFile, PathBuf) {
    let mut file = match tempfile::Builder::new().suffix(".json").tempfile() {
        Ok(f) => f,
        Err(e) => panic!("failed to create temp file: {}", e),
    };
    if let Err(e) = file.write_all(contents.as_bytes()) {
        panic!("failed to write temp file: {}", e);
    }
    let path = file.path().to_path_buf();
    (file, path)
}
