//! Fetch → render → write.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use heatmap_common::{ChartConfig, TemperatureDataset};
use renderer::OutputFormat;
use tracing::info;

use crate::loader::{load_file, DatasetLoader, FetchError, LoaderConfig};

/// Where the dataset comes from.
#[derive(Debug, Clone)]
pub enum DatasetSource {
    Url(LoaderConfig),
    File(PathBuf),
}

impl DatasetSource {
    pub async fn load(&self) -> Result<TemperatureDataset, FetchError> {
        match self {
            DatasetSource::Url(config) => DatasetLoader::new(config.clone())?.fetch().await,
            DatasetSource::File(path) => load_file(path),
        }
    }
}

/// Where the encoded chart goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// `-` means standard output.
    pub fn from_arg(arg: &Path) -> Self {
        if arg.as_os_str() == "-" {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(arg.to_path_buf())
        }
    }

    /// Explicit format wins, then the file extension, then SVG.
    pub fn resolve_format(&self, explicit: Option<&str>) -> Result<OutputFormat> {
        if let Some(name) = explicit {
            return name
                .parse()
                .with_context(|| format!("Unknown output format: {}", name));
        }
        Ok(match self {
            OutputTarget::File(path) => OutputFormat::from_path(path).unwrap_or(OutputFormat::Svg),
            OutputTarget::Stdout => OutputFormat::Svg,
        })
    }

    pub fn write(&self, bytes: &[u8]) -> Result<()> {
        match self {
            OutputTarget::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(bytes).context("Failed to write to stdout")?;
                stdout.flush().context("Failed to flush stdout")?;
            }
            OutputTarget::File(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("Failed to create {}", parent.display()))?;
                }
                std::fs::write(path, bytes)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!(path = %path.display(), bytes = bytes.len(), "Wrote heatmap");
            }
        }
        Ok(())
    }
}

/// Render a dataset and encode it in the requested format.
pub fn render_chart(
    dataset: &TemperatureDataset,
    config: &ChartConfig,
    format: OutputFormat,
) -> Result<Vec<u8>> {
    let scene = renderer::render(dataset, config).context("Failed to build heatmap scene")?;
    info!(
        cells = scene.cells().len(),
        format = format.extension(),
        mime_type = format.mime_type(),
        "Rendered heatmap"
    );
    format
        .encode(&scene)
        .with_context(|| format!("Failed to encode heatmap as {}", format.extension()))
}
