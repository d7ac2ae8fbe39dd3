//! Temperature heatmap CLI.
//!
//! Fetches the monthly land-surface temperature dataset once, renders the
//! year × month heatmap and writes it as SVG, HTML or PNG. A failed fetch
//! is logged and nothing is written.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use heatmap_common::ChartConfig;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use heatmap::pipeline::render_chart;
use heatmap::{DatasetSource, LoaderConfig, OutputTarget, DEFAULT_DATASET_URL};

#[derive(Parser, Debug)]
#[command(name = "heatmap")]
#[command(about = "Render the monthly global land-surface temperature heatmap")]
struct Args {
    /// Dataset URL
    #[arg(long, env = "HEATMAP_DATA_URL", default_value = DEFAULT_DATASET_URL)]
    url: String,

    /// Read the dataset from a local JSON file instead of the URL
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Chart configuration file (YAML or JSON)
    #[arg(short, long, env = "HEATMAP_CONFIG")]
    config: Option<PathBuf>,

    /// Output path, or - for stdout
    #[arg(short, long, default_value = "heatmap.svg")]
    output: PathBuf,

    /// Output format: svg, html or png (default: from the output extension)
    #[arg(short, long)]
    format: Option<String>,

    /// Request timeout in seconds (default: none)
    #[arg(long, env = "HEATMAP_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .json()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let chart_config = match &args.config {
        Some(path) => ChartConfig::from_file(path)
            .with_context(|| format!("Failed to load chart config {}", path.display()))?,
        None => ChartConfig::default(),
    };

    let target = OutputTarget::from_arg(&args.output);
    let format = target.resolve_format(args.format.as_deref())?;

    let source = match args.input {
        Some(path) => DatasetSource::File(path),
        None => DatasetSource::Url(LoaderConfig {
            url: args.url.clone(),
            timeout: args.timeout_secs.map(Duration::from_secs),
        }),
    };

    info!(source = ?source, format = format.extension(), "Starting heatmap render");

    let dataset = match source.load().await {
        Ok(dataset) => dataset,
        Err(e) => {
            error!(error = %e, "Fetch error");
            return Ok(ExitCode::FAILURE);
        }
    };

    let bytes = render_chart(&dataset, &chart_config, format)?;
    target.write(&bytes)?;

    Ok(ExitCode::SUCCESS)
}
