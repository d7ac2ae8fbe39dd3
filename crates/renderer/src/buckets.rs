//! Equal-width temperature buckets mapped onto a discrete palette.
//!
//! `[min, max]` is split into one bucket per palette color. Lookup is a
//! numeric linear scan over half-open intervals `[low, high)`, with the last
//! bucket closed `[low, high]`, so a value sitting exactly on a shared
//! boundary belongs to the upper bucket. A value no bucket contains (below
//! `min`, above `max`, or NaN) falls back to bucket 0. Rounded temperatures
//! can land just past `max`, so hot months may take the first color. When
//! `min == max` every value maps to bucket 0.

use heatmap_common::{Color, TemperatureDataset};
use tracing::debug;

use crate::error::RenderError;

/// One bucket's temperature interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorRange {
    pub low: f64,
    pub high: f64,
}

impl ColorRange {
    /// Lower bound rounded to one decimal for display.
    pub fn low_label(&self) -> String {
        format_bound(self.low)
    }

    /// Upper bound rounded to one decimal for display.
    pub fn high_label(&self) -> String {
        format_bound(self.high)
    }

    fn contains(&self, value: f64, closed: bool) -> bool {
        value >= self.low && (value < self.high || (closed && value <= self.high))
    }
}

fn format_bound(value: f64) -> String {
    let s = format!("{:.1}", value);
    // `{:.1}` prints "-0.0" for small negative bounds; the legend shows "0.0"
    if s == "-0.0" {
        "0.0".to_string()
    } else {
        s
    }
}

/// Palette colors paired with the ranges that select them.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorBuckets {
    ranges: Vec<ColorRange>,
    colors: Vec<Color>,
}

impl ColorBuckets {
    pub fn new(min: f64, max: f64, palette: &[Color]) -> Result<Self, RenderError> {
        if palette.is_empty() {
            return Err(RenderError::EmptyPalette);
        }
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(RenderError::InvalidRange { min, max });
        }

        let count = palette.len();
        let step = (max - min) / count as f64;
        // Shared boundaries keep neighbouring buckets contiguous; the last
        // one is pinned to `max` so float drift cannot leave a gap.
        let boundary = |i: usize| {
            if i == count {
                max
            } else {
                min + step * i as f64
            }
        };
        let ranges = (0..count)
            .map(|i| ColorRange {
                low: boundary(i),
                high: boundary(i + 1),
            })
            .collect();

        debug!(min, max, step, buckets = count, "Computed color buckets");

        Ok(Self {
            ranges,
            colors: palette.to_vec(),
        })
    }

    /// Buckets spanning the dataset's absolute temperature range.
    pub fn from_dataset(dataset: &TemperatureDataset, palette: &[Color]) -> Result<Self, RenderError> {
        let (min, max) = dataset
            .temperature_range()
            .ok_or(RenderError::Input(heatmap_common::HeatmapError::EmptyDataset))?;
        Self::new(min, max, palette)
    }

    pub fn ranges(&self) -> &[ColorRange] {
        &self.ranges
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn min(&self) -> f64 {
        self.ranges.first().map_or(0.0, |r| r.low)
    }

    pub fn max(&self) -> f64 {
        self.ranges.last().map_or(0.0, |r| r.high)
    }

    /// Bucket index for a temperature, always in `0..len()`.
    pub fn bucket_index(&self, value: f64) -> usize {
        let last = self.ranges.len() - 1;
        if value.is_nan() || self.max() == self.min() {
            return 0;
        }

        self.ranges
            .iter()
            .enumerate()
            .find(|(index, range)| range.contains(value, *index == last))
            .map_or(0, |(index, _)| index)
    }

    pub fn color_for(&self, value: f64) -> &Color {
        &self.colors[self.bucket_index(value)]
    }
}

/// Round to the nearest whole degree. Halves round toward positive infinity.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette(n: usize) -> Vec<Color> {
        (0..n).map(|i| Color::Array(vec![i as u8, 0, 0])).collect()
    }

    #[test]
    fn test_equal_width_ranges() {
        let buckets = ColorBuckets::new(0.0, 7.0, &palette(7)).unwrap();
        assert_eq!(buckets.len(), 7);
        for (i, range) in buckets.ranges().iter().enumerate() {
            assert!((range.low - i as f64).abs() < 1e-12);
            assert!((range.high - (i + 1) as f64).abs() < 1e-12);
        }
        assert_eq!(buckets.max(), 7.0);
    }

    #[test]
    fn test_boundaries_belong_to_upper_bucket() {
        let buckets = ColorBuckets::new(0.0, 7.0, &palette(7)).unwrap();
        assert_eq!(buckets.bucket_index(0.0), 0);
        assert_eq!(buckets.bucket_index(0.999), 0);
        assert_eq!(buckets.bucket_index(1.0), 1);
        assert_eq!(buckets.bucket_index(6.0), 6);
        assert_eq!(buckets.bucket_index(7.0), 6);
    }

    #[test]
    fn test_unmatched_values_fall_back_to_first_bucket() {
        let buckets = ColorBuckets::new(2.0, 9.0, &palette(7)).unwrap();
        assert_eq!(buckets.bucket_index(-40.0), 0);
        assert_eq!(buckets.bucket_index(40.0), 0);
        assert_eq!(buckets.bucket_index(9.0), 6);
        assert_eq!(buckets.bucket_index(9.000001), 0);
        assert_eq!(buckets.bucket_index(f64::NAN), 0);
    }

    #[test]
    fn test_negative_ranges_compare_numerically() {
        let buckets = ColorBuckets::new(-10.0, 4.0, &palette(7)).unwrap();
        assert_eq!(buckets.bucket_index(-10.0), 0);
        assert_eq!(buckets.bucket_index(-7.5), 1);
        assert_eq!(buckets.bucket_index(-0.5), 4);
        assert_eq!(buckets.bucket_index(3.9), 6);
    }

    #[test]
    fn test_degenerate_range() {
        let buckets = ColorBuckets::new(5.0, 5.0, &palette(7)).unwrap();
        assert_eq!(buckets.bucket_index(5.0), 0);
        assert_eq!(buckets.bucket_index(6.0), 0);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(ColorBuckets::new(0.0, 1.0, &[]), Err(RenderError::EmptyPalette)));
        assert!(matches!(
            ColorBuckets::new(3.0, 1.0, &palette(2)),
            Err(RenderError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_labels() {
        let buckets = ColorBuckets::new(1.684, 13.888, &palette(7)).unwrap();
        assert_eq!(buckets.ranges()[0].low_label(), "1.7");
        assert_eq!(buckets.ranges()[6].high_label(), "13.9");
        let around_zero = ColorRange { low: -0.04, high: 0.2 };
        assert_eq!(around_zero.low_label(), "0.0");
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(8.5), 9.0);
        assert_eq!(round_half_up(8.49), 8.0);
        assert_eq!(round_half_up(-2.5), -2.0);
    }
}
