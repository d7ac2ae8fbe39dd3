//! Error type for scene construction and backend encoding.

use heatmap_common::HeatmapError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// The dataset or chart configuration failed validation.
    #[error(transparent)]
    Input(#[from] HeatmapError),

    #[error("Palette must contain at least one color")]
    EmptyPalette,

    #[error("Invalid temperature range: {min} to {max}")]
    InvalidRange { min: f64, max: f64 },

    #[error("Failed to parse generated SVG: {0}")]
    SvgParse(String),

    #[error("Rasterization failed: {0}")]
    Raster(String),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
}
