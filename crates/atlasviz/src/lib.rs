//! Atlasviz - renderer for the ATLAS system architecture poster.
//!
//! Renders the fixed ATLAS platform diagram (region boxes, connector
//! arrows, legend, and captions) to an in-memory canvas and exports it as
//! an SVG and a PNG sharing one base path.

pub mod config;
pub mod content;
pub mod palette;

mod canvas;
mod error;
mod export;
mod render;

pub use atlasviz_core::{color, draw, geometry};

pub use canvas::{CANVAS_HEIGHT, CANVAS_WIDTH, Canvas};
pub use error::AtlasvizError;
pub use palette::{Palette, Swatch};

use std::path::Path;

use log::info;

use config::AppConfig;

/// Renderer for the ATLAS architecture poster.
///
/// This provides the two-step API: [`render`](PosterRenderer::render)
/// builds the canvas in memory, [`export`](PosterRenderer::export) writes
/// it to the pair of output files.
///
/// # Examples
///
/// ```rust,no_run
/// use atlasviz::{PosterRenderer, config::AppConfig};
///
/// let renderer = PosterRenderer::new(AppConfig::default());
///
/// let canvas = renderer.render()
///     .expect("Failed to render");
///
/// renderer.export(&canvas, "assets/atlas_architecture")
///     .expect("Failed to export");
/// ```
#[derive(Default)]
pub struct PosterRenderer {
    config: AppConfig,
}

impl PosterRenderer {
    /// Create a new poster renderer with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Render the poster to an in-memory [`Canvas`].
    ///
    /// The content is fixed, so repeated calls produce byte-identical
    /// canvases. No files are touched.
    ///
    /// # Errors
    ///
    /// Returns [`AtlasvizError`] when the configuration is invalid or a
    /// drawing resource is unavailable.
    pub fn render(&self) -> Result<Canvas, AtlasvizError> {
        info!("Rendering poster");

        let content = content::poster();
        let palette = Palette::atlas();
        let canvas = render::render(&content, &palette, &self.config)?;

        info!("Poster rendered successfully");
        Ok(canvas)
    }

    /// Export a rendered canvas to `<base_path>.svg` and `<base_path>.png`.
    ///
    /// The directory containing `base_path` must already exist; export
    /// never creates it. Either both files are written or neither is.
    ///
    /// # Errors
    ///
    /// Returns [`AtlasvizError::DestinationUnavailable`] for a missing
    /// directory, [`AtlasvizError::RenderingUnavailable`] when the raster
    /// backend has no fonts, and I/O or encoding errors otherwise.
    pub fn export(&self, canvas: &Canvas, base_path: impl AsRef<Path>) -> Result<(), AtlasvizError> {
        export::export(canvas, base_path.as_ref(), self.config.raster().scale())
    }
}
