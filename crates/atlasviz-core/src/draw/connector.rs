//! Connector arrows between anchor points.
//!
//! A connector is a stroked path with an arrowhead marker at its end.
//! Arrowheads are SVG markers defined once per color in the document
//! `<defs>`; [`marker_definitions`] builds that block and
//! [`marker_reference`] returns the `url(#...)` value a path uses to pick
//! its arrowhead.

use svg::node::element::{Definitions, Marker, Path};

use crate::{
    apply_stroke,
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::Point,
};

/// Curvature below this threshold renders as a straight segment.
const STRAIGHT_EPSILON: f32 = 1e-3;

/// Creates arrowhead marker definitions for every color in use.
///
/// Callers must pass each color once; the iteration order determines the
/// order of markers in the output, so an order-preserving collection keeps
/// the document deterministic.
pub fn marker_definitions<'a, I>(colors: I) -> Definitions
where
    I: Iterator<Item = &'a Color>,
{
    let mut defs = Definitions::new();

    for color in colors {
        let arrowhead = Marker::new()
            .set("id", format!("arrowhead-{}", color.to_id_safe_string()))
            .set("viewBox", "0 0 10 10")
            .set("refX", 9)
            .set("refY", 5)
            .set("markerWidth", 6)
            .set("markerHeight", 6)
            .set("orient", "auto")
            .add(
                Path::new()
                    .set("d", "M 0 0 L 10 5 L 0 10 z")
                    .set("fill", color.to_string()),
            );

        defs = defs.add(arrowhead);
    }

    defs
}

/// Returns the `marker-end` reference for the arrowhead of `color`.
pub fn marker_reference(color: &Color) -> String {
    format!("url(#arrowhead-{})", color.to_id_safe_string())
}

/// Builds the SVG path data for a connector.
///
/// With zero curvature this is a straight line. Otherwise it is a
/// quadratic arc whose control point sits perpendicular to the segment
/// midpoint, offset by `curvature` times the segment length; positive
/// values bow the arc to the left of the travel direction.
pub fn path_data(start: Point, end: Point, curvature: f32) -> String {
    if curvature.abs() < STRAIGHT_EPSILON {
        return format!(
            "M {} {} L {} {}",
            start.x(),
            start.y(),
            end.x(),
            end.y()
        );
    }

    let delta = end - start;
    let control = start.midpoint(end) + Point::new(-delta.y(), delta.x()).scale(curvature);

    format!(
        "M {} {} Q {} {}, {} {}",
        start.x(),
        start.y(),
        control.x(),
        control.y(),
        end.x(),
        end.y()
    )
}

/// A directed arrow from one canvas point to another.
#[derive(Debug, Clone)]
pub struct ConnectorLine {
    start: Point,
    end: Point,
    stroke: StrokeDefinition,
    curvature: f32,
}

impl ConnectorLine {
    /// Creates a new connector between two canvas points.
    pub fn new(start: Point, end: Point, stroke: StrokeDefinition, curvature: f32) -> Self {
        Self {
            start,
            end,
            stroke,
            curvature,
        }
    }

    /// Returns the stroke of this connector.
    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }
}

impl Drawable for ConnectorLine {
    fn render_to_layers(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let path = Path::new()
            .set("d", path_data(self.start, self.end, self.curvature))
            .set("fill", "none")
            .set("marker-end", marker_reference(&self.stroke.color()));
        let path = apply_stroke!(path, &self.stroke);

        output.add_to_layer(RenderLayer::Arrow, Box::new(path));
        output
    }
}
