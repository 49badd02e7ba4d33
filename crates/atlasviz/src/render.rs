//! Canvas construction.
//!
//! Maps the chart-space poster content onto the SVG canvas and assembles
//! the document: background, arrowhead marker definitions, region boxes,
//! connectors, and every caption, all routed through layered output so
//! z-order never depends on drawing order.

use indexmap::IndexSet;
use log::{debug, info, warn};
use svg::Document;
use svg::node::element as svg_element;

use atlasviz_core::{
    color::Color,
    draw::{
        ConnectorLine, Drawable, FontStyle, FontWeight, Label, LayeredOutput, RegionBox,
        RegionMetrics, RenderLayer, StrokeDefinition, TextDefinition, TextMeasurer,
        marker_definitions,
    },
    geometry::{Bounds, Point, Size},
};

use crate::{
    canvas::{CANVAS_HEIGHT, CANVAS_WIDTH, Canvas},
    config::AppConfig,
    content::{CHART_HEIGHT, CHART_WIDTH, ChartPoint, PosterContent, Region},
    error::AtlasvizError,
    palette::{Palette, Swatch},
};

const SCALE_X: f32 = CANVAS_WIDTH / CHART_WIDTH;
const SCALE_Y: f32 = CANVAS_HEIGHT / CHART_HEIGHT;

/// Border width of region boxes, in canvas units.
const REGION_BORDER_WIDTH: f32 = 2.0;

/// Converts a chart point (y-up) to a canvas point (y-down).
fn canvas_point(point: ChartPoint) -> Point {
    Point::new(point.x * SCALE_X, (CHART_HEIGHT - point.y) * SCALE_Y)
}

/// Converts a region rectangle to canvas bounds. Chart regions name their
/// bottom-left corner; canvas bounds name the top-left.
fn region_bounds(region: &Region) -> Bounds {
    let top_left = canvas_point(ChartPoint::new(region.x, region.y + region.height));
    Bounds::from_top_left(
        top_left,
        Size::new(region.width * SCALE_X, region.height * SCALE_Y),
    )
}

/// The text styles of the poster, one per caption class.
struct TextStyles {
    title: TextDefinition,
    subtitle: TextDefinition,
    region_title: TextDefinition,
    sublabel: TextDefinition,
    divider: TextDefinition,
    legend_category: TextDefinition,
    legend_stack: TextDefinition,
    footer: TextDefinition,
}

impl TextStyles {
    fn new(palette: &Palette) -> Self {
        let mut title = TextDefinition::new();
        title.set_font_size(19.0);
        title.set_weight(FontWeight::Bold);
        title.set_color(Some(palette.color(Swatch::AuroraCyan)));

        let mut subtitle = TextDefinition::new();
        subtitle.set_font_size(8.5);
        subtitle.set_style(FontStyle::Italic);
        subtitle.set_color(Some(palette.color(Swatch::Silver)));

        let mut region_title = TextDefinition::new();
        region_title.set_font_size(7.0);
        region_title.set_weight(FontWeight::Bold);
        region_title.set_color(Some(palette.color(Swatch::White)));

        let mut sublabel = TextDefinition::new();
        sublabel.set_font_size(5.0);
        sublabel.set_color(Some(palette.color(Swatch::Silver)));

        let mut divider = TextDefinition::new();
        divider.set_font_size(7.0);
        divider.set_color(Some(palette.color(Swatch::Silver)));

        let mut legend_category = TextDefinition::new();
        legend_category.set_font_size(5.5);
        legend_category.set_weight(FontWeight::Bold);
        legend_category.set_color(Some(palette.color(Swatch::AuroraCyan)));

        let mut legend_stack = TextDefinition::new();
        legend_stack.set_font_size(4.5);
        legend_stack.set_color(Some(palette.color(Swatch::Silver)));

        let mut footer = TextDefinition::new();
        footer.set_font_size(5.5);
        footer.set_style(FontStyle::Italic);
        footer.set_color(Some(palette.color(Swatch::Silver)));

        Self {
            title,
            subtitle,
            region_title,
            sublabel,
            divider,
            legend_category,
            legend_stack,
            footer,
        }
    }
}

/// Renders the poster content to a [`Canvas`].
pub(crate) fn render(
    content: &PosterContent,
    palette: &Palette,
    config: &AppConfig,
) -> Result<Canvas, AtlasvizError> {
    info!(
        regions = content.regions.len(),
        connectors = content.connectors.len();
        "Rendering poster content"
    );

    if !TextMeasurer::global().has_fonts() {
        // SVG output still works from estimated metrics; only raster
        // export hard-requires real faces.
        warn!("No font faces found, text metrics are estimated");
    }

    let background = config
        .style()
        .background_color()
        .map_err(AtlasvizError::Config)?
        .unwrap_or_else(|| palette.color(Swatch::DeepSpace));

    let styles = TextStyles::new(palette);
    let metrics = RegionMetrics {
        corner_radius: 3.5,
        title_drop: 1.5 * SCALE_Y,
        sublabel_drop: 3.0 * SCALE_Y,
        sublabel_pitch: 1.3 * SCALE_Y,
    };

    let mut output = LayeredOutput::new();

    let background_rect = svg_element::Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", CANVAS_WIDTH)
        .set("height", CANVAS_HEIGHT)
        .set("fill", background.to_string());
    output.add_to_layer(RenderLayer::Background, Box::new(background_rect));

    // Title block
    let title = Label::new(&styles.title, content.title, canvas_point(content.title_anchor));
    output.merge(title.render_to_layers());
    let subtitle = Label::new(
        &styles.subtitle,
        content.subtitle,
        canvas_point(content.subtitle_anchor),
    );
    output.merge(subtitle.render_to_layers());

    // Region boxes
    for region in &content.regions {
        let mut title_def = styles.region_title.clone();
        title_def.set_color(Some(palette.color(region.text)));

        let region_box = RegionBox::new(
            region_bounds(region),
            region.title,
            region.sublabels,
            palette.color(region.fill),
            StrokeDefinition::new(palette.color(region.border), REGION_BORDER_WIDTH),
            &title_def,
            &styles.sublabel,
            metrics,
        );
        output.merge(region_box.render_to_layers());
    }

    // Section dividers
    for divider in &content.dividers {
        let anchor = canvas_point(ChartPoint::new(CHART_WIDTH / 2.0, divider.y));
        output.merge(Label::new(&styles.divider, divider.caption, anchor).render_to_layers());
    }

    // Technology legend
    for entry in &content.legend {
        let category_anchor = canvas_point(ChartPoint::new(entry.x, content.legend_category_y));
        let stack_anchor = canvas_point(ChartPoint::new(entry.x, content.legend_stack_y));
        output.merge(
            Label::new(&styles.legend_category, entry.category, category_anchor)
                .render_to_layers(),
        );
        output.merge(Label::new(&styles.legend_stack, entry.stack, stack_anchor).render_to_layers());
    }

    // Connectors and their annotations
    let mut arrow_colors: IndexSet<Color> = IndexSet::new();
    for connector in &content.connectors {
        let color = palette.color(connector.color);
        arrow_colors.insert(color);

        let line = ConnectorLine::new(
            canvas_point(connector.from),
            canvas_point(connector.to),
            StrokeDefinition::new(color, connector.width),
            // The y-flip mirrors arc orientation, so negate to keep the
            // bow on the same visual side as the chart-space data.
            -connector.curvature,
        );
        output.merge(line.render_to_layers());

        if let Some(annotation) = &connector.annotation {
            let mut annotation_def = TextDefinition::new();
            annotation_def.set_font_size(5.0);
            annotation_def.set_color(Some(color));

            let label = Label::new(&annotation_def, annotation.text, canvas_point(annotation.at))
                .with_rotation(annotation.rotation_degrees);
            output.merge(label.render_to_layers());
        }
    }

    // Footer
    let footer = Label::new(
        &styles.footer,
        content.footer,
        canvas_point(content.footer_anchor),
    );
    output.merge(footer.render_to_layers());

    debug!(arrow_colors = arrow_colors.len(); "Assembling SVG document");

    let mut document = Document::new()
        .set("width", CANVAS_WIDTH)
        .set("height", CANVAS_HEIGHT)
        .set("viewBox", (0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT))
        .add(marker_definitions(arrow_colors.iter()));

    for node in output.render() {
        document = document.add(node);
    }

    Ok(Canvas::new(
        document,
        Size::new(CANVAS_WIDTH, CANVAS_HEIGHT),
        background,
    ))
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_canvas_point_flips_y() {
        let top_center = canvas_point(ChartPoint::new(50.0, 97.0));
        assert_approx_eq!(f32, top_center.x(), 500.0);
        assert_approx_eq!(f32, top_center.y(), 21.0);

        let bottom = canvas_point(ChartPoint::new(50.0, 1.0));
        assert_approx_eq!(f32, bottom.y(), 693.0);
    }

    #[test]
    fn test_region_bounds_use_top_left() {
        let region = Region {
            x: 5.0,
            y: 85.0,
            width: 25.0,
            height: 7.0,
            title: "",
            sublabels: &[],
            border: Swatch::AuroraCyan,
            fill: Swatch::DarkSurface,
            text: Swatch::White,
        };

        let bounds = region_bounds(&region);
        assert_approx_eq!(f32, bounds.min_x(), 50.0);
        // Chart top edge at y=92 maps to canvas y=(100-92)*7=56
        assert_approx_eq!(f32, bounds.min_y(), 56.0);
        assert_approx_eq!(f32, bounds.width(), 250.0);
        assert_approx_eq!(f32, bounds.height(), 49.0);
    }

    #[test]
    fn test_region_bounds_stay_on_canvas() {
        let content = crate::content::poster();
        let canvas = Bounds::from_top_left(
            Point::default(),
            Size::new(CANVAS_WIDTH, CANVAS_HEIGHT),
        );

        let merged = content
            .regions
            .iter()
            .map(region_bounds)
            .reduce(|acc, bounds| acc.merge(&bounds))
            .expect("poster has regions");

        assert!(canvas.contains(merged.min_point()));
        assert!(canvas.contains(Point::new(merged.max_x(), merged.max_y())));
    }
}
