//! Monthly land-surface temperature dataset.
//!
//! The JSON document served by the data source looks like:
//!
//! ```json
//! {
//!   "baseTemperature": 8.66,
//!   "monthlyVariance": [{ "year": 1753, "month": 1, "variance": -1.366 }]
//! }
//! ```
//!
//! Every record stores an offset from the base temperature, so the absolute
//! temperature of a month is `base_temperature + variance`.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{HeatmapError, HeatmapResult};

/// Month names in calendar order.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Name of a 1-based month, or `None` outside 1..=12.
pub fn month_name(month: u8) -> Option<&'static str> {
    match month {
        1..=12 => Some(MONTH_NAMES[usize::from(month) - 1]),
        _ => None,
    }
}

/// One year/month/variance observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthRecord {
    pub year: i32,
    /// Calendar month, 1 = January
    pub month: u8,
    /// Offset from the dataset base temperature in °C
    pub variance: f64,
}

impl MonthRecord {
    pub fn new(year: i32, month: u8, variance: f64) -> Self {
        Self {
            year,
            month,
            variance,
        }
    }

    /// 0-based month index (January = 0).
    ///
    /// Only meaningful for validated records.
    pub fn month_index(&self) -> usize {
        usize::from(self.month.saturating_sub(1))
    }
}

/// Base temperature plus the ordered monthly records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureDataset {
    pub base_temperature: f64,
    pub monthly_variance: Vec<MonthRecord>,
}

impl TemperatureDataset {
    pub fn new(base_temperature: f64, monthly_variance: Vec<MonthRecord>) -> Self {
        Self {
            base_temperature,
            monthly_variance,
        }
    }

    /// Parse a dataset from a JSON string.
    pub fn from_json(json: &str) -> HeatmapResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a dataset from raw JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> HeatmapResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Load a dataset from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> HeatmapResult<Self> {
        let content = std::fs::read(path)?;
        Self::from_slice(&content)
    }

    pub fn len(&self) -> usize {
        self.monthly_variance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monthly_variance.is_empty()
    }

    /// Absolute temperature of a record in °C.
    pub fn absolute_temperature(&self, record: &MonthRecord) -> f64 {
        self.base_temperature + record.variance
    }

    /// Absolute temperatures in record order.
    pub fn temperatures(&self) -> impl Iterator<Item = f64> + '_ {
        self.monthly_variance
            .iter()
            .map(move |r| self.absolute_temperature(r))
    }

    /// Minimum and maximum absolute temperature, `None` for an empty dataset.
    pub fn temperature_range(&self) -> Option<(f64, f64)> {
        if self.is_empty() {
            return None;
        }
        Some(self.temperatures().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(min, max), t| (min.min(t), max.max(t)),
        ))
    }

    /// Earliest and latest year present in the records.
    pub fn year_span(&self) -> Option<(i32, i32)> {
        let min = self.monthly_variance.iter().map(|r| r.year).min()?;
        let max = self.monthly_variance.iter().map(|r| r.year).max()?;
        Some((min, max))
    }

    /// Check the rendering preconditions.
    ///
    /// Rejects an empty record list, a non-finite base temperature, months
    /// outside 1..=12, non-finite variances, and repeated (year, month)
    /// pairs.
    pub fn validate(&self) -> HeatmapResult<()> {
        if !self.base_temperature.is_finite() {
            return Err(HeatmapError::InvalidBaseTemperature(self.base_temperature));
        }
        if self.is_empty() {
            return Err(HeatmapError::EmptyDataset);
        }

        let mut seen = HashSet::with_capacity(self.len());
        for (index, record) in self.monthly_variance.iter().enumerate() {
            if month_name(record.month).is_none() {
                return Err(HeatmapError::InvalidRecord {
                    index,
                    message: format!("month {} is outside 1..=12", record.month),
                });
            }
            if !record.variance.is_finite() {
                return Err(HeatmapError::InvalidRecord {
                    index,
                    message: format!("variance {} is not finite", record.variance),
                });
            }
            if !seen.insert((record.year, record.month)) {
                return Err(HeatmapError::DuplicateRecord {
                    year: record.year,
                    month: record.month,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TemperatureDataset {
        TemperatureDataset::new(
            8.66,
            vec![
                MonthRecord::new(1754, 1, -1.2),
                MonthRecord::new(1900, 6, 0.4),
                MonthRecord::new(2015, 12, 1.5),
            ],
        )
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }

    #[test]
    fn test_parse_camel_case_document() {
        let json = r#"{
            "baseTemperature": 8.66,
            "monthlyVariance": [
                {"year": 1753, "month": 1, "variance": -1.366},
                {"year": 1753, "month": 2, "variance": -2.223}
            ]
        }"#;
        let dataset = TemperatureDataset::from_json(json).unwrap();
        assert_eq!(dataset.base_temperature, 8.66);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.monthly_variance[1], MonthRecord::new(1753, 2, -2.223));
    }

    #[test]
    fn test_temperature_range() {
        let (min, max) = sample().temperature_range().unwrap();
        assert!((min - 7.46).abs() < 1e-9);
        assert!((max - 10.16).abs() < 1e-9);
        assert_eq!(TemperatureDataset::new(8.66, vec![]).temperature_range(), None);
    }

    #[test]
    fn test_year_span() {
        assert_eq!(sample().year_span(), Some((1754, 2015)));
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_month() {
        let mut dataset = sample();
        dataset.monthly_variance[1].month = 13;
        match dataset.validate() {
            Err(HeatmapError::InvalidRecord { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let mut dataset = sample();
        dataset.monthly_variance.push(MonthRecord::new(1900, 6, 0.1));
        assert!(matches!(
            dataset.validate(),
            Err(HeatmapError::DuplicateRecord { year: 1900, month: 6 })
        ));
    }

    #[test]
    fn test_validate_rejects_empty_and_nan() {
        assert!(matches!(
            TemperatureDataset::new(8.66, vec![]).validate(),
            Err(HeatmapError::EmptyDataset)
        ));
        let mut dataset = sample();
        dataset.base_temperature = f64::NAN;
        assert!(dataset.validate().unwrap_err().is_dataset_error());
    }
}
