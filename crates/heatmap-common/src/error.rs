//! Error types for heatmap datasets and chart configuration.

use thiserror::Error;

/// Result type alias using HeatmapError.
pub type HeatmapResult<T> = Result<T, HeatmapError>;

/// Primary error type for dataset and configuration handling.
#[derive(Debug, Error)]
pub enum HeatmapError {
    // === Dataset Errors ===
    #[error("Dataset contains no monthly records")]
    EmptyDataset,

    #[error("Invalid record at index {index}: {message}")]
    InvalidRecord { index: usize, message: String },

    #[error("Duplicate record for {year}-{month:02}")]
    DuplicateRecord { year: i32, month: u8 },

    #[error("Invalid base temperature: {0}")]
    InvalidBaseTemperature(f64),

    // === Configuration Errors ===
    #[error("Invalid chart configuration for '{field}': {message}")]
    InvalidConfig { field: String, message: String },

    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to parse document: {0}")]
    ParseError(String),
}

impl HeatmapError {
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        HeatmapError::InvalidConfig {
            field: field.into(),
            message: message.into(),
        }
    }

    /// True when the error describes bad input data rather than bad settings.
    pub fn is_dataset_error(&self) -> bool {
        matches!(
            self,
            HeatmapError::EmptyDataset
                | HeatmapError::InvalidRecord { .. }
                | HeatmapError::DuplicateRecord { .. }
                | HeatmapError::InvalidBaseTemperature(_)
        )
    }
}

// Conversion from common error types
impl From<std::io::Error> for HeatmapError {
    fn from(err: std::io::Error) -> Self {
        HeatmapError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for HeatmapError {
    fn from(err: serde_json::Error) -> Self {
        HeatmapError::ParseError(format!("JSON error: {}", err))
    }
}

impl From<serde_yaml::Error> for HeatmapError {
    fn from(err: serde_yaml::Error) -> Self {
        HeatmapError::ParseError(format!("YAML error: {}", err))
    }
}
