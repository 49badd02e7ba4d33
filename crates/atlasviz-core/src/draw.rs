//! Renderable poster elements.
//!
//! Every element of the poster is a [`Drawable`]: it knows its own position
//! on the canvas and renders itself into a [`LayeredOutput`], which the
//! exporter flattens into SVG groups in z-order (background first, text
//! last).

mod connector;
mod layer;
mod region;
mod stroke;
mod text;

pub use connector::{ConnectorLine, marker_definitions, marker_reference};
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use region::{RegionBox, RegionMetrics};
pub use stroke::StrokeDefinition;
pub use text::{FontStyle, FontWeight, Label, TextDefinition, TextMeasurer};

/// A poster element that can render itself into layered SVG nodes.
pub trait Drawable {
    /// Renders this element into its target layers.
    fn render_to_layers(&self) -> LayeredOutput;
}
