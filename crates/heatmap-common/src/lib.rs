//! Common types shared by the heatmap renderer and the heatmap service.

pub mod config;
pub mod dataset;
pub mod error;
pub mod style;

pub use config::{ChartConfig, LegendLayout, Margins};
pub use dataset::{month_name, MonthRecord, TemperatureDataset, MONTH_NAMES};
pub use error::{HeatmapError, HeatmapResult};
pub use style::Color;
