//! Stroke definitions for borders and connector lines.
//!
//! The poster only draws solid strokes, so a stroke is a color and a
//! width. Use the [`apply_stroke!`](crate::apply_stroke!) macro to set the
//! matching SVG attributes on any element.

use crate::color::Color;

/// A solid stroke used for region borders and connector lines.
///
/// # Examples
///
/// ```
/// use atlasviz_core::draw::StrokeDefinition;
/// use atlasviz_core::color::Color;
///
/// let border = StrokeDefinition::new(Color::new("#00d4ff").unwrap(), 2.0);
/// assert_eq!(border.width(), 2.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
}

impl StrokeDefinition {
    /// Creates a new stroke with the given color and width.
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width in canvas units.
    pub fn width(&self) -> f32 {
        self.width
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 1.0,
        }
    }
}

/// Apply stroke attributes to an SVG element.
///
/// Sets `stroke`, `stroke-opacity`, and `stroke-width` from a
/// [`StrokeDefinition`].
///
/// # Examples
///
/// ```
/// use atlasviz_core::draw::StrokeDefinition;
/// use atlasviz_core::color::Color;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::new(Color::new("#94a3b8").unwrap(), 1.5);
/// let line = svg_element::Path::new().set("d", "M 0 0 L 10 10");
/// let line = atlasviz_core::apply_stroke!(line, &stroke);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {
        $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
    };
}
