//! The rendered canvas.

use std::fmt;

use svg::Document;

use atlasviz_core::{color::Color, geometry::Size};

/// Canvas width in SVG user units.
pub const CANVAS_WIDTH: f32 = 1000.0;
/// Canvas height in SVG user units (20:14 aspect ratio).
pub const CANVAS_HEIGHT: f32 = 700.0;

/// A fully rendered poster, ready for export.
///
/// The canvas owns the SVG document plus the two properties export needs
/// without re-rendering: the pixel size and the background color the
/// raster backend fills before drawing.
pub struct Canvas {
    document: Document,
    size: Size,
    background: Color,
}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("size", &self.size)
            .field("background", &self.background)
            .finish_non_exhaustive()
    }
}

impl Canvas {
    pub(crate) fn new(document: Document, size: Size, background: Color) -> Self {
        Self {
            document,
            size,
            background,
        }
    }

    /// Serializes the canvas to an SVG string.
    ///
    /// The serialization is deterministic: the same canvas always produces
    /// the same bytes.
    pub fn to_svg_string(&self) -> String {
        self.document.to_string()
    }

    /// Returns the canvas size in SVG user units.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the background color of the canvas.
    pub fn background(&self) -> Color {
        self.background
    }
}
