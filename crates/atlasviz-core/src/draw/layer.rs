//! Layer-based rendering for SVG output.
//!
//! Drawables specify which z-order layer their SVG elements belong to, and
//! [`LayeredOutput`] collects nodes per layer so that the final document
//! stacks them correctly regardless of drawing order: the background always
//! sits below the region boxes, arrows above the boxes, and text above
//! everything.

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// The rendering layers of the poster, bottom to top.
///
/// The `Ord` derive uses declaration order, so the first variant renders
/// first (bottom) and the last renders last (top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Canvas background fill - renders first
    Background,
    /// Region boxes
    Content,
    /// Connector arrows between regions
    Arrow,
    /// Titles, sublabels, captions, and annotations
    Text,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer, used as the
    /// `data-layer` attribute of the emitted SVG group.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Content => "content",
            Self::Arrow => "arrow",
            Self::Text => "text",
        }
    }
}

/// SVG nodes grouped by rendering layer.
///
/// # Example
///
/// ```
/// # use atlasviz_core::draw::{RenderLayer, LayeredOutput};
/// # use svg::node::element::Rectangle;
/// let mut output = LayeredOutput::new();
/// output.add_to_layer(RenderLayer::Background, Box::new(Rectangle::new()));
/// output.add_to_layer(RenderLayer::Text, Box::new(Rectangle::new()));
///
/// let groups = output.render();
/// assert_eq!(groups.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Appends all nodes from another `LayeredOutput` into this one.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes one `<g data-layer="...">` element.
    /// Within a layer, nodes keep their insertion order; the stable sort
    /// only reorders across layers, which keeps the output deterministic.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);
                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use svg::node::element::Rectangle;

    #[test]
    fn test_layered_output_empty() {
        let output = LayeredOutput::new();
        assert!(output.is_empty());
        assert!(output.render().is_empty());
    }

    #[test]
    fn test_layered_output_groups_per_layer() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Content, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Arrow, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Text, Box::new(Rectangle::new()));

        assert_eq!(output.render().len(), 3);
    }

    #[test]
    fn test_layered_output_merges_same_layer_into_one_group() {
        let mut first = LayeredOutput::new();
        first.add_to_layer(RenderLayer::Content, Box::new(Rectangle::new()));

        let mut second = LayeredOutput::new();
        second.add_to_layer(RenderLayer::Content, Box::new(Rectangle::new()));

        first.merge(second);
        assert_eq!(first.render().len(), 1);
    }

    #[test]
    fn test_layer_order_background_first() {
        assert!(RenderLayer::Background < RenderLayer::Content);
        assert!(RenderLayer::Content < RenderLayer::Arrow);
        assert!(RenderLayer::Arrow < RenderLayer::Text);
    }
}
