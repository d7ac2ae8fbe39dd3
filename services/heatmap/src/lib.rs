//! Temperature heatmap service.
//!
//! Two stages, each usable on its own:
//! - [`loader`] obtains a [`TemperatureDataset`](heatmap_common::TemperatureDataset)
//!   over HTTP or from disk
//! - [`pipeline`] renders it with the `renderer` crate and writes the result

pub mod loader;
pub mod pipeline;

pub use loader::{DatasetLoader, FetchError, LoaderConfig, DEFAULT_DATASET_URL};
pub use pipeline::{DatasetSource, OutputTarget};
