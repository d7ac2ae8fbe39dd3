//! Output backends consuming a [`Scene`].

pub mod html;
pub mod png;
pub mod svg;

use std::path::Path;
use std::str::FromStr;

use crate::error::RenderError;
use crate::scene::Scene;

pub use html::HtmlBackend;
pub use png::PngBackend;
pub use svg::SvgBackend;

/// Turns a scene into a concrete output.
pub trait SceneBackend {
    type Output;

    fn render(&self, scene: &Scene) -> Result<Self::Output, RenderError>;
}

/// Supported output encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Html,
    Png,
}

impl OutputFormat {
    /// Guess the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Html => "html",
            OutputFormat::Png => "png",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Svg => "image/svg+xml",
            OutputFormat::Html => "text/html",
            OutputFormat::Png => "image/png",
        }
    }

    /// Encode a scene with the default backend for this format.
    pub fn encode(&self, scene: &Scene) -> Result<Vec<u8>, RenderError> {
        match self {
            OutputFormat::Svg => SvgBackend::default().render(scene).map(String::into_bytes),
            OutputFormat::Html => HtmlBackend::default().render(scene).map(String::into_bytes),
            OutputFormat::Png => PngBackend::default().render(scene),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "svg" => Ok(OutputFormat::Svg),
            "html" | "htm" => Ok(OutputFormat::Html),
            "png" => Ok(OutputFormat::Png),
            other => Err(RenderError::UnsupportedFormat(other.to_string())),
        }
    }
}
