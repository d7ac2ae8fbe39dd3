//! Chart layout and palette configuration.
//!
//! Every field has a default matching the classic land-surface temperature
//! chart, so an empty YAML/JSON document yields the standard layout.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{HeatmapError, HeatmapResult};
use crate::style::Color;

/// Outer margins around the drawable area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 100.0,
            right: 50.0,
            bottom: 100.0,
            left: 50.0,
        }
    }
}

/// Legend strip geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendLayout {
    /// Total width of the color strip
    pub width: f64,
    /// Height of each color rectangle
    pub height: f64,
    /// Distance below the drawable area
    pub offset: f64,
}

impl Default for LegendLayout {
    fn default() -> Self {
        Self {
            width: 300.0,
            height: 30.0,
            offset: 40.0,
        }
    }
}

/// Everything the renderer needs besides the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// First year of the x axis (not derived from data)
    pub min_year: i32,
    /// Last year of the x axis (not derived from data)
    pub max_year: i32,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub margin: Margins,
    /// Bucket colors, coldest first
    pub palette: Vec<Color>,
    /// Years labelled on the x axis
    pub year_ticks: Vec<i32>,
    /// Band scale padding, both inner and outer
    pub band_padding: f64,
    pub legend: LegendLayout,
    pub title: String,
    /// Round temperatures to whole degrees before picking a bucket
    pub round_before_bucketing: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            min_year: 1754,
            max_year: 2015,
            canvas_width: 1000.0,
            canvas_height: 500.0,
            margin: Margins::default(),
            palette: default_palette(),
            year_ticks: vec![1754, 1800, 1850, 1900, 1950, 2000, 2015],
            band_padding: 0.1,
            legend: LegendLayout::default(),
            title: "Monthly Global Land-Surface Temperature".to_string(),
            round_before_bucketing: true,
        }
    }
}

fn default_palette() -> Vec<Color> {
    [
        "#0b3d91", "#1f77b4", "#6baed6", "#ffff99", "#fdae61", "#f46d43", "#d73027",
    ]
    .into_iter()
    .map(Color::hex)
    .collect()
}

impl ChartConfig {
    /// Load configuration from a YAML or JSON file, chosen by extension.
    pub fn from_file(path: impl AsRef<Path>) -> HeatmapResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&content)?,
            _ => Self::from_yaml(&content)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(json: &str) -> HeatmapResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_yaml(yaml: &str) -> HeatmapResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Width of the area inside the margins.
    pub fn drawable_width(&self) -> f64 {
        self.canvas_width - self.margin.left - self.margin.right
    }

    /// Height of the area inside the margins.
    pub fn drawable_height(&self) -> f64 {
        self.canvas_height - self.margin.top - self.margin.bottom
    }

    /// Width of one year column.
    pub fn cell_width(&self) -> f64 {
        self.drawable_width() / self.year_extent()
    }

    /// Years covered by the x axis, computed in f64 so extreme bounds cannot overflow.
    pub fn year_extent(&self) -> f64 {
        f64::from(self.max_year) - f64::from(self.min_year)
    }

    /// Height of one month row.
    pub fn cell_height(&self) -> f64 {
        self.drawable_height() / 12.0
    }

    pub fn validate(&self) -> HeatmapResult<()> {
        if self.max_year <= self.min_year {
            return Err(HeatmapError::invalid_config(
                "max_year",
                format!("{} must be greater than min_year {}", self.max_year, self.min_year),
            ));
        }
        if self.palette.is_empty() {
            return Err(HeatmapError::invalid_config("palette", "at least one color is required"));
        }
        if let Some(bad) = self.palette.iter().find(|c| !c.is_valid()) {
            return Err(HeatmapError::invalid_config("palette", format!("unrecognized color {:?}", bad)));
        }
        if !(self.drawable_width() > 0.0 && self.drawable_height() > 0.0) {
            return Err(HeatmapError::invalid_config(
                "margin",
                "margins leave no drawable area on the canvas",
            ));
        }
        if !(0.0..1.0).contains(&self.band_padding) {
            return Err(HeatmapError::invalid_config("band_padding", "must be within [0, 1)"));
        }
        if !(self.legend.width > 0.0 && self.legend.height > 0.0) {
            return Err(HeatmapError::invalid_config("legend", "width and height must be positive"));
        }
        Ok(())
    }
}
