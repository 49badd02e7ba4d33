//! Text styles and positioned labels.
//!
//! # Overview
//!
//! - [`TextDefinition`] - Reusable text style (family, size, weight, slant,
//!   color)
//! - [`Label`] - A string placed at a canvas point, rendered as a centered
//!   SVG `<text>` element with one `<tspan>` per line
//! - [`TextMeasurer`] - Measurement backend built on `cosmic-text`
//!
//! Labels are always centered on their anchor point, matching how every
//! caption on the poster is placed. Multi-line content is split on `\n`
//! and stacked using the measured line height.

use std::sync::{Mutex, OnceLock};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::{debug, warn};
use svg::{node::Text as SvgText, node::element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::{Point, Size},
};

/// Font weight for a text style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    /// Returns the SVG `font-weight` value, or `None` for the default.
    pub fn to_svg_value(self) -> Option<&'static str> {
        match self {
            Self::Normal => None,
            Self::Bold => Some("bold"),
        }
    }
}

/// Font slant for a text style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

impl FontStyle {
    /// Returns the SVG `font-style` value, or `None` for the default.
    pub fn to_svg_value(self) -> Option<&'static str> {
        match self {
            Self::Normal => None,
            Self::Italic => Some("italic"),
        }
    }
}

/// Defines the visual style for poster text.
///
/// Multiple [`Label`]s share one definition, so each caption class on the
/// poster (region titles, sublabels, dividers, legend entries) is styled
/// in exactly one place.
///
/// # Examples
///
/// ```
/// # use atlasviz_core::draw::{TextDefinition, FontWeight};
/// # use atlasviz_core::color::Color;
/// let mut title = TextDefinition::new();
/// title.set_font_size(19.0);
/// title.set_weight(FontWeight::Bold);
/// title.set_color(Some(Color::new("#00d4ff").unwrap()));
/// ```
#[derive(Debug, Clone)]
pub struct TextDefinition {
    font_family: String,
    font_size: f32,
    weight: FontWeight,
    style: FontStyle,
    color: Option<Color>,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in canvas units.
    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    /// Sets the font family name (e.g. "sans-serif", "monospace").
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Sets the font weight.
    pub fn set_weight(&mut self, weight: FontWeight) {
        self.weight = weight;
    }

    /// Sets the font slant.
    pub fn set_style(&mut self, style: FontStyle) {
        self.style = style;
    }

    /// Sets the text color. `None` leaves the SVG default (black).
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    pub fn style(&self) -> FontStyle {
        self.style
    }

    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: 12.0,
            weight: FontWeight::default(),
            style: FontStyle::default(),
            color: None,
        }
    }
}

/// A string anchored at a canvas point.
///
/// The anchor is the horizontal and vertical center of the rendered text
/// block. An optional rotation (degrees, counter-clockwise) spins the
/// label around its anchor; the feedback-loop annotation uses this.
#[derive(Debug, Clone)]
pub struct Label<'a> {
    definition: &'a TextDefinition,
    content: &'a str,
    position: Point,
    rotation: Option<f32>,
}

impl<'a> Label<'a> {
    /// Creates a new label with the given style, content, and anchor.
    pub fn new(definition: &'a TextDefinition, content: &'a str, position: Point) -> Self {
        Self {
            definition,
            content,
            position,
            rotation: None,
        }
    }

    /// Rotates the label by `degrees` counter-clockwise around its anchor.
    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = Some(degrees);
        self
    }

    /// Returns the text content of this label.
    pub fn content(&self) -> &str {
        self.content
    }

    /// Returns the anchor point of this label.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Measures the rendered size of this label's content.
    pub fn calculate_size(&self) -> Size {
        TextMeasurer::global().measure(self.content, self.definition)
    }
}

impl Drawable for Label<'_> {
    fn render_to_layers(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let lines: Vec<&str> = self.content.lines().collect();
        let measured = self.calculate_size();
        let line_height = if lines.is_empty() {
            0.0
        } else {
            measured.height() / lines.len() as f32
        };

        // Anchor is the vertical center of the whole block. The first
        // tspan advance puts line one at the right offset.
        let y_offset = -(measured.height() + line_height) / 2.0;

        let mut text = svg_element::Text::new("")
            .set("x", self.position.x())
            .set("y", self.position.y() + y_offset)
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("font-family", self.definition.font_family())
            .set("font-size", self.definition.font_size());

        if let Some(weight) = self.definition.weight().to_svg_value() {
            text = text.set("font-weight", weight);
        }

        if let Some(style) = self.definition.style().to_svg_value() {
            text = text.set("font-style", style);
        }

        if let Some(color) = self.definition.color() {
            text = text
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
        }

        if let Some(degrees) = self.rotation {
            text = text.set(
                "transform",
                format!(
                    "rotate({} {} {})",
                    -degrees,
                    self.position.x(),
                    self.position.y()
                ),
            );
        }

        for line in lines {
            let tspan = svg_element::TSpan::new("")
                .set("x", self.position.x())
                .set("dy", line_height)
                .add(SvgText::new(escape_text(line)));
            text = text.add(tspan);
        }

        output.add_to_layer(RenderLayer::Text, Box::new(text));
        output
    }
}

/// Text measurement backend.
///
/// Holds a single reusable `cosmic-text` [`FontSystem`] behind a mutex;
/// constructing a font system scans the installed fonts, which is too
/// expensive to repeat per label.
pub struct TextMeasurer {
    font_system: Mutex<FontSystem>,
}

static TEXT_MEASURER: OnceLock<TextMeasurer> = OnceLock::new();

impl TextMeasurer {
    fn new() -> Self {
        debug!("Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }

    /// Returns the process-wide measurer, initializing it on first use.
    pub fn global() -> &'static Self {
        TEXT_MEASURER.get_or_init(Self::new)
    }

    /// Returns true if the font database found at least one usable face.
    ///
    /// Measurement still works without fonts (it falls back to a glyph
    /// estimate), but raster export needs real faces to draw text.
    pub fn has_fonts(&self) -> bool {
        match self.font_system.lock() {
            Ok(font_system) => !font_system.db().is_empty(),
            Err(_) => false,
        }
    }

    /// Calculate the rendered size of `text` under the given style.
    ///
    /// Uses real font metrics and shaping when faces are available, and an
    /// average-glyph-width estimate otherwise, so layout stays usable on
    /// hosts without installed fonts.
    pub fn measure(&self, text: &str, definition: &TextDefinition) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        let font_size = definition.font_size();
        let line_height = font_size * 1.15;

        let Ok(mut font_system) = self.font_system.lock() else {
            warn!("FontSystem lock poisoned, estimating text size");
            return estimate_size(text, font_size, line_height);
        };

        let metrics = Metrics::new(font_size, line_height);
        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let family = match definition.font_family() {
            "sans-serif" => Family::SansSerif,
            "serif" => Family::Serif,
            "monospace" => Family::Monospace,
            name => Family::Name(name),
        };
        let attrs = Attrs::new().family(family);

        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;

        let layout_runs: Vec<_> = buffer.layout_runs().collect();
        if layout_runs.is_empty() {
            return estimate_size(text, font_size, line_height);
        }

        for run in &layout_runs {
            if let Some(last) = run.glyphs.last() {
                max_width = max_width.max(last.x + last.w);
            }
            total_height += metrics.line_height;
        }

        Size::new(max_width, total_height)
    }
}

/// Escapes the characters that terminate XML character data.
fn escape_text(content: &str) -> String {
    content
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Average-glyph-width estimate used when no font faces are available.
fn estimate_size(text: &str, font_size: f32, line_height: f32) -> Size {
    let lines: Vec<&str> = text.lines().collect();
    let longest = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);

    Size::new(
        longest as f32 * font_size * 0.55,
        line_height * lines.len().max(1) as f32,
    )
}
