//! Synthetic dataset generators.
//!
//! These create predictable, verifiable datasets so tests and benchmarks
//! do not depend on the network.

use heatmap_common::{MonthRecord, TemperatureDataset};

/// Creates a complete dataset with one record per month for every year in
/// `first_year..=last_year`.
///
/// Variance follows a seasonal sine wave plus a slow warming trend, giving
/// roughly -3 °C to +3 °C around the base temperature.
///
/// # Example
///
/// ```
/// use test_utils::create_monthly_dataset;
///
/// let dataset = create_monthly_dataset(8.66, 1900, 1901);
/// assert_eq!(dataset.len(), 24);
/// assert_eq!(dataset.monthly_variance[0].month, 1);
/// ```
pub fn create_monthly_dataset(base_temperature: f64, first_year: i32, last_year: i32) -> TemperatureDataset {
    let span = f64::from((last_year - first_year).max(1));
    let mut records = Vec::new();
    for year in first_year..=last_year {
        let trend = f64::from(year - first_year) / span * 1.5;
        for month in 1..=12u8 {
            let season = (f64::from(month - 1) / 12.0 * std::f64::consts::TAU).sin() * 1.5;
            records.push(MonthRecord::new(year, month, season + trend - 0.75));
        }
    }
    TemperatureDataset::new(base_temperature, records)
}

/// Creates a dataset whose absolute temperatures step linearly from `min`
/// to `max` across `count` consecutive months starting January 1900.
///
/// Useful for checking bucket boundaries: record `i` has temperature
/// `min + i * (max - min) / (count - 1)`.
pub fn create_linear_dataset(min: f64, max: f64, count: usize) -> TemperatureDataset {
    let base = 0.0;
    let steps = count.saturating_sub(1).max(1) as f64;
    let records = (0..count)
        .map(|i| {
            let year = 1900 + (i / 12) as i32;
            let month = (i % 12) as u8 + 1;
            MonthRecord::new(year, month, min + (max - min) * i as f64 / steps)
        })
        .collect();
    TemperatureDataset::new(base, records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_dataset_shape() {
        let dataset = create_monthly_dataset(8.66, 1753, 2015);
        assert_eq!(dataset.len(), 263 * 12);
        assert!(dataset.validate().is_ok());
        let (min, max) = dataset.temperature_range().unwrap();
        assert!(min > 8.66 - 3.0 && max < 8.66 + 3.0);
    }

    #[test]
    fn test_linear_dataset_endpoints() {
        let dataset = create_linear_dataset(-2.0, 12.0, 15);
        let temps: Vec<f64> = dataset.temperatures().collect();
        assert_eq!(temps.len(), 15);
        assert_eq!(temps[0], -2.0);
        assert_eq!(temps[14], 12.0);
        assert_eq!(dataset.monthly_variance[12].year, 1901);
        assert!(dataset.validate().is_ok());
    }
}
