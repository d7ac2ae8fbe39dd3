//! Heatmap rendering for monthly land-surface temperature data.
//!
//! Rendering is split in two stages:
//! - [`heatmap::render`] turns a dataset into a backend-independent [`Scene`]
//! - a [`SceneBackend`] (SVG, HTML, PNG) encodes the scene

pub mod axis;
pub mod backend;
pub mod buckets;
pub mod error;
pub mod heatmap;
pub mod legend;
pub mod scale;
pub mod scene;

pub use backend::{HtmlBackend, OutputFormat, PngBackend, SceneBackend, SvgBackend};
pub use buckets::{ColorBuckets, ColorRange};
pub use error::RenderError;
pub use heatmap::render;
pub use scale::{BandScale, LinearScale};
pub use scene::{Group, Hover, Line, Node, Rect, Scene, Stroke, Text, TextAnchor, Tooltip};
