//! PNG rasterization of the rendered SVG.
//!
//! The raster path re-parses the serialized SVG with `usvg` and paints it
//! into a `tiny-skia` pixmap, so both output files always depict the same
//! document. Text needs real font faces here; without any installed fonts
//! the export fails rather than emitting a poster with missing labels.

use log::{debug, info};
use resvg::{tiny_skia, usvg};

use crate::{canvas::Canvas, error::AtlasvizError};

/// Encodes the canvas as PNG bytes at `scale` pixels per SVG user unit.
pub(super) fn rasterize(
    svg_source: &str,
    canvas: &Canvas,
    scale: f32,
) -> Result<Vec<u8>, AtlasvizError> {
    let mut options = usvg::Options::default();
    let fontdb = options.fontdb_mut();
    fontdb.load_system_fonts();
    let faces = fontdb.len();
    if faces == 0 {
        return Err(AtlasvizError::RenderingUnavailable(
            "no font faces available for raster text".to_string(),
        ));
    }
    debug!(faces = faces; "Loaded system fonts");

    let tree = usvg::Tree::from_str(svg_source, &options)
        .map_err(|err| AtlasvizError::Raster(format!("failed to parse SVG: {err}")))?;

    let scaled = canvas.size().scale(scale);
    let width = scaled.width().round() as u32;
    let height = scaled.height().round() as u32;
    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
        AtlasvizError::Raster(format!("failed to allocate {width}x{height} pixmap"))
    })?;

    // Fill with the canvas background so the poster has no transparent
    // fringe at the edges.
    let [r, g, b, a] = canvas.background().to_rgba8();
    pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    info!(width = width, height = height; "Rasterized poster");

    pixmap
        .encode_png()
        .map_err(|err| AtlasvizError::Raster(format!("failed to encode PNG: {err}")))
}
