//! Region boxes - the labeled rectangles of the poster.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    color::Color,
    draw::{Drawable, Label, LayeredOutput, RenderLayer, StrokeDefinition, TextDefinition},
    geometry::{Bounds, Point},
};

/// Vertical text placement inside a region box, in canvas units.
///
/// The title sits `title_drop` below the top edge; sublabels start at
/// `sublabel_drop` and stack downward at `sublabel_pitch`.
#[derive(Debug, Clone, Copy)]
pub struct RegionMetrics {
    pub corner_radius: f32,
    pub title_drop: f32,
    pub sublabel_drop: f32,
    pub sublabel_pitch: f32,
}

/// A rounded, bordered rectangle with a bold title and bulleted sublabels.
///
/// The box itself renders into the content layer, its text into the text
/// layer, so connector arrows pass over boxes but under labels.
pub struct RegionBox<'a> {
    bounds: Bounds,
    title: &'a str,
    sublabels: &'a [&'a str],
    fill: Color,
    stroke: StrokeDefinition,
    title_def: &'a TextDefinition,
    sublabel_def: &'a TextDefinition,
    metrics: RegionMetrics,
}

impl<'a> RegionBox<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        bounds: Bounds,
        title: &'a str,
        sublabels: &'a [&'a str],
        fill: Color,
        stroke: StrokeDefinition,
        title_def: &'a TextDefinition,
        sublabel_def: &'a TextDefinition,
        metrics: RegionMetrics,
    ) -> Self {
        Self {
            bounds,
            title,
            sublabels,
            fill,
            stroke,
            title_def,
            sublabel_def,
            metrics,
        }
    }

    /// Returns the canvas bounds of the box.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn center_x(&self) -> f32 {
        self.bounds.center().x()
    }
}

impl Drawable for RegionBox<'_> {
    fn render_to_layers(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let rect = svg_element::Rectangle::new()
            .set("x", self.bounds.min_x())
            .set("y", self.bounds.min_y())
            .set("width", self.bounds.width())
            .set("height", self.bounds.height())
            .set("rx", self.metrics.corner_radius)
            .set("fill", self.fill.to_string())
            .set("fill-opacity", self.fill.alpha());
        let rect = apply_stroke!(rect, &self.stroke);
        output.add_to_layer(RenderLayer::Content, Box::new(rect));

        let title_anchor = Point::new(self.center_x(), self.bounds.min_y() + self.metrics.title_drop);
        output.merge(Label::new(self.title_def, self.title, title_anchor).render_to_layers());

        for (index, sublabel) in self.sublabels.iter().enumerate() {
            let bullet = format!("• {sublabel}");
            let anchor = Point::new(
                self.center_x(),
                self.bounds.min_y()
                    + self.metrics.sublabel_drop
                    + index as f32 * self.metrics.sublabel_pitch,
            );
            output.merge(Label::new(self.sublabel_def, &bullet, anchor).render_to_layers());
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;

    fn test_metrics() -> RegionMetrics {
        RegionMetrics {
            corner_radius: 4.0,
            title_drop: 10.5,
            sublabel_drop: 21.0,
            sublabel_pitch: 9.1,
        }
    }

    #[test]
    fn test_region_box_renders_rect_and_title() {
        let title_def = TextDefinition::new();
        let sublabel_def = TextDefinition::new();
        let region = RegionBox::new(
            Bounds::from_top_left(Point::new(50.0, 56.0), Size::new(250.0, 49.0)),
            "BioAI DIVISION",
            &[],
            Color::new("#1e293b").unwrap(),
            StrokeDefinition::new(Color::new("#10b981").unwrap(), 2.0),
            &title_def,
            &sublabel_def,
            test_metrics(),
        );

        let rendered: String = region
            .render_to_layers()
            .render()
            .into_iter()
            .map(|node| node.to_string())
            .collect();

        assert!(rendered.contains("<rect"));
        assert!(rendered.contains("rx=\"4\""));
        assert!(rendered.contains("BioAI DIVISION"));
        assert!(rendered.contains("data-layer=\"content\""));
        assert!(rendered.contains("data-layer=\"text\""));
    }

    #[test]
    fn test_region_box_bullets_sublabels() {
        let title_def = TextDefinition::new();
        let sublabel_def = TextDefinition::new();
        let sublabels = ["Feature Store", "MLflow Model Registry"];
        let region = RegionBox::new(
            Bounds::from_top_left(Point::default(), Size::new(100.0, 50.0)),
            "DataOps CORE",
            &sublabels,
            Color::default(),
            StrokeDefinition::default(),
            &title_def,
            &sublabel_def,
            test_metrics(),
        );

        let rendered: String = region
            .render_to_layers()
            .render()
            .into_iter()
            .map(|node| node.to_string())
            .collect();

        assert!(rendered.contains("• Feature Store"));
        assert!(rendered.contains("• MLflow Model Registry"));
        // One title and two sublabel text elements
        assert_eq!(rendered.matches("<text").count(), 3);
    }
}
