//! PNG raster backend built on resvg.

use std::sync::Arc;

use tracing::debug;

use crate::error::RenderError;
use crate::scene::Scene;

use super::svg::SvgBackend;
use super::SceneBackend;

/// Rasterizes the static drawing. Hover behavior has no raster equivalent
/// and is dropped.
#[derive(Debug, Clone)]
pub struct PngBackend {
    /// Output pixels per scene unit
    pub scale: f32,
    /// Load system fonts so text is drawn; without fonts text is skipped
    pub system_fonts: bool,
}

impl Default for PngBackend {
    fn default() -> Self {
        Self {
            scale: 1.0,
            system_fonts: true,
        }
    }
}

impl SceneBackend for PngBackend {
    type Output = Vec<u8>;

    fn render(&self, scene: &Scene) -> Result<Vec<u8>, RenderError> {
        if !(self.scale > 0.0 && self.scale.is_finite()) {
            return Err(RenderError::Raster(format!("invalid scale {}", self.scale)));
        }

        let svg = SvgBackend::static_only().to_svg_string(scene);

        let mut opt = usvg::Options::default();
        if self.system_fonts {
            Arc::make_mut(&mut opt.fontdb).load_system_fonts();
        }
        let tree = usvg::Tree::from_str(&svg, &opt)
            .map_err(|e| RenderError::SvgParse(e.to_string()))?;

        let width = (scene.width as f32 * self.scale).ceil() as u32;
        let height = (scene.height as f32 * self.scale).ceil() as u32;
        let mut pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| RenderError::Raster(format!("cannot allocate {}x{} pixmap", width, height)))?;
        pixmap.fill(tiny_skia::Color::WHITE);

        let transform = tiny_skia::Transform::from_scale(self.scale, self.scale);
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        debug!(width, height, "Rasterized scene");

        pixmap
            .encode_png()
            .map_err(|e| RenderError::Raster(e.to_string()))
    }
}
