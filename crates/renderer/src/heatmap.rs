//! Year × month temperature heatmap.
//!
//! [`render`] is a pure function of the dataset and chart configuration:
//! the same inputs always produce the same [`Scene`].

use heatmap_common::{month_name, ChartConfig, MonthRecord, TemperatureDataset, MONTH_NAMES};
use tracing::{debug, instrument, warn};

use crate::axis::{bottom_axis, left_axis};
use crate::buckets::{round_half_up, ColorBuckets};
use crate::error::RenderError;
use crate::legend::build_legend;
use crate::scale::{BandScale, LinearScale};
use crate::scene::{Group, Hover, Rect, Scene, Stroke, Text, TextAnchor, Tooltip};

const TITLE_FONT_SIZE: f64 = 24.0;
const SUBTITLE_FONT_SIZE: f64 = 16.0;
const HIGHLIGHT_WIDTH: f64 = 2.0;

/// Build the heatmap scene for a dataset.
///
/// Both inputs are validated first; malformed records (month outside
/// 1..=12, non-finite values, duplicated year/month) are rejected rather than
/// drawn.
#[instrument(skip_all, fields(records = dataset.len()))]
pub fn render(dataset: &TemperatureDataset, config: &ChartConfig) -> Result<Scene, RenderError> {
    config.validate()?;
    dataset.validate()?;

    let width = config.drawable_width();
    let height = config.drawable_height();

    let buckets = ColorBuckets::from_dataset(dataset, &config.palette)?;
    let x = LinearScale::new(
        (f64::from(config.min_year), f64::from(config.max_year)),
        (0.0, width),
    );
    let y = BandScale::new(MONTH_NAMES, (0.0, height), config.band_padding);

    debug!(
        width,
        height,
        cell_width = config.cell_width(),
        cell_height = config.cell_height(),
        min_temp = buckets.min(),
        max_temp = buckets.max(),
        "Computed heatmap layout"
    );

    if let Some((first, last)) = dataset.year_span() {
        if first < config.min_year || last > config.max_year {
            warn!(
                first,
                last,
                min_year = config.min_year,
                max_year = config.max_year,
                "Records fall outside the configured year axis"
            );
        }
    }

    let mut chart = Group::new()
        .with_id("chart")
        .translated(config.margin.left, config.margin.top);

    chart.push(
        Text::new(width / 2.0, -20.0, config.title.clone())
            .with_id("title")
            .with_size(TITLE_FONT_SIZE)
            .anchored(TextAnchor::Middle),
    );
    chart.push(
        Text::new(width / 2.0, -5.0, subtitle(config, dataset.base_temperature))
            .with_id("description")
            .with_size(SUBTITLE_FONT_SIZE)
            .anchored(TextAnchor::Middle),
    );

    chart.push(bottom_axis(&x, &config.year_ticks, height));
    chart.push(left_axis(&y));

    let mut cells = Group::new().with_id("cells");
    for record in &dataset.monthly_variance {
        cells.push(build_cell(record, dataset, config, &x, &y, &buckets)?);
    }
    chart.push(cells);

    let legend_origin = (
        width / 2.0 - config.legend.width / 2.0,
        height + config.legend.offset,
    );
    chart.push(build_legend(&buckets, &config.legend, legend_origin));

    Ok(Scene {
        width: config.canvas_width,
        height: config.canvas_height,
        root: chart,
        tooltip: Tooltip::default(),
    })
}

/// `"{min_year} - {max_year}: base temperature {base}°C"`
pub fn subtitle(config: &ChartConfig, base_temperature: f64) -> String {
    format!(
        "{} - {}: base temperature {}°C",
        config.min_year, config.max_year, base_temperature
    )
}

/// `"{year} - {month}: {temp:.2}°C"`
pub fn tooltip_text(record: &MonthRecord, temperature: f64) -> String {
    format!(
        "{} - {}: {:.2}°C",
        record.year,
        month_name(record.month).unwrap_or("?"),
        temperature
    )
}

fn build_cell(
    record: &MonthRecord,
    dataset: &TemperatureDataset,
    config: &ChartConfig,
    x: &LinearScale,
    y: &BandScale,
    buckets: &ColorBuckets,
) -> Result<Rect, RenderError> {
    let month_index = record.month_index();
    let top = y.position_at(month_index).ok_or_else(|| {
        RenderError::Input(heatmap_common::HeatmapError::InvalidRecord {
            index: month_index,
            message: format!("month {} has no band", record.month),
        })
    })?;

    let temperature = dataset.absolute_temperature(record);
    let bucket_key = if config.round_before_bucketing {
        round_half_up(temperature)
    } else {
        temperature
    };

    Ok(Rect::new(
        x.scale(f64::from(record.year)),
        top,
        config.cell_width(),
        config.cell_height(),
    )
    .with_class("cell")
    .with_fill(buckets.color_for(bucket_key).clone())
    .with_data("month", month_index)
    .with_data("year", record.year)
    .with_data("temp", temperature)
    .with_hover(Hover {
        tooltip: tooltip_text(record, temperature),
        highlight: Stroke::black(HIGHLIGHT_WIDTH),
    }))
}
