//! Dataset loading.
//!
//! A single best-effort request per run: no retries and no caching. A
//! request timeout is only applied when one is configured.

use std::path::{Path, PathBuf};
use std::time::Duration;

use heatmap_common::TemperatureDataset;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, info, instrument};

/// Published land-surface temperature dataset.
pub const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },

    #[error("Response is not a temperature dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration for the dataset loader.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    pub url: String,
    /// Whole-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATASET_URL.to_string(),
            timeout: None,
        }
    }
}

/// Fetches the dataset document over HTTP.
pub struct DatasetLoader {
    client: Client,
    config: LoaderConfig,
}

impl DatasetLoader {
    pub fn new(config: LoaderConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(FetchError::Client)?;
        Ok(Self { client, config })
    }

    /// Issue one GET and parse the body.
    ///
    /// Non-2xx statuses, transport failures, and bodies that are not a
    /// dataset are all errors; nothing is retried.
    #[instrument(skip(self), fields(url = %self.config.url))]
    pub async fn fetch(&self) -> Result<TemperatureDataset, FetchError> {
        let url = &self.config.url;
        let transport = |source| FetchError::Transport {
            url: url.clone(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.clone(),
                status,
            });
        }

        let body = response.bytes().await.map_err(transport)?;
        debug!(bytes = body.len(), "Received dataset body");

        let dataset = parse_dataset(&body)?;
        info!(
            records = dataset.len(),
            base_temperature = dataset.base_temperature,
            "Fetched temperature dataset"
        );
        Ok(dataset)
    }
}

/// Parse a dataset document.
pub fn parse_dataset(bytes: &[u8]) -> Result<TemperatureDataset, FetchError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Read a dataset document from a local file.
#[instrument]
pub fn load_file(path: &Path) -> Result<TemperatureDataset, FetchError> {
    let bytes = std::fs::read(path).map_err(|source| FetchError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = parse_dataset(&bytes)?;
    info!(records = dataset.len(), "Loaded temperature dataset from file");
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dataset() {
        let body = br#"{"baseTemperature": 8.66, "monthlyVariance": [{"year": 1900, "month": 1, "variance": -0.34}]}"#;
        let dataset = parse_dataset(body).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.monthly_variance[0].variance, -0.34);
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        assert!(matches!(parse_dataset(b"[]"), Err(FetchError::Parse(_))));
        assert!(matches!(
            parse_dataset(br#"{"baseTemperature": "warm", "monthlyVariance": []}"#),
            Err(FetchError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_file(Path::new("/nonexistent/dataset.json")).unwrap_err();
        assert!(matches!(err, FetchError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/dataset.json"));
    }

    #[test]
    fn test_default_config() {
        let config = LoaderConfig::default();
        assert_eq!(config.url, DEFAULT_DATASET_URL);
        assert!(config.timeout.is_none());
    }
}
