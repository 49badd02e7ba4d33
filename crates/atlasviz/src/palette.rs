//! The fixed ATLAS brand palette.
//!
//! Every color on the poster is referenced through a [`Swatch`], a closed
//! set of semantic names. Because the set is an enum and [`Palette::atlas`]
//! fills in every variant, a reference to a missing color cannot be
//! expressed.

use indexmap::IndexMap;

use atlasviz_core::color::Color;

/// Semantic color names used across regions, text, and connectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Swatch {
    /// Canvas background.
    DeepSpace,
    AuroraCyan,
    AuroraViolet,
    AuroraMagenta,
    /// Secondary text and quiet connectors.
    Silver,
    White,
    /// Region fill.
    DarkSurface,
    MidSurface,
    AccentGreen,
    AccentOrange,
    AccentRed,
}

impl Swatch {
    /// Every swatch, in palette order.
    pub const ALL: [Swatch; 11] = [
        Swatch::DeepSpace,
        Swatch::AuroraCyan,
        Swatch::AuroraViolet,
        Swatch::AuroraMagenta,
        Swatch::Silver,
        Swatch::White,
        Swatch::DarkSurface,
        Swatch::MidSurface,
        Swatch::AccentGreen,
        Swatch::AccentOrange,
        Swatch::AccentRed,
    ];

    /// The CSS value of this swatch in the ATLAS brand palette.
    fn css(self) -> &'static str {
        match self {
            Swatch::DeepSpace => "#0a0f1a",
            Swatch::AuroraCyan => "#00d4ff",
            Swatch::AuroraViolet => "#7c3aed",
            Swatch::AuroraMagenta => "#ec4899",
            Swatch::Silver => "#94a3b8",
            Swatch::White => "#ffffff",
            Swatch::DarkSurface => "#1e293b",
            Swatch::MidSurface => "#334155",
            Swatch::AccentGreen => "#10b981",
            Swatch::AccentOrange => "#f59e0b",
            Swatch::AccentRed => "#ef4444",
        }
    }
}

/// The resolved brand palette, mapping every [`Swatch`] to a [`Color`].
///
/// Iteration order follows [`Swatch::ALL`], so anything derived from the
/// palette (marker definitions, legend colors) is deterministic.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: IndexMap<Swatch, Color>,
}

impl Palette {
    /// Builds the ATLAS brand palette.
    pub fn atlas() -> Self {
        let colors = Swatch::ALL
            .into_iter()
            .map(|swatch| {
                let color = Color::new(swatch.css())
                    .expect("palette hex literals are valid CSS colors");
                (swatch, color)
            })
            .collect();

        Self { colors }
    }

    /// Resolves a swatch to its color.
    pub fn color(&self, swatch: Swatch) -> Color {
        self.colors[&swatch]
    }

    /// Returns the number of swatches in the palette.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette has no swatches.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::atlas()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_covers_every_swatch() {
        let palette = Palette::atlas();
        assert_eq!(palette.len(), Swatch::ALL.len());

        for swatch in Swatch::ALL {
            // Must not panic
            let _ = palette.color(swatch);
        }
    }

    #[test]
    fn test_palette_resolves_brand_values() {
        let palette = Palette::atlas();
        assert_eq!(palette.color(Swatch::DeepSpace).to_rgba8(), [10, 15, 26, 255]);
        assert_eq!(palette.color(Swatch::AuroraCyan).to_rgba8(), [0, 212, 255, 255]);
        assert_eq!(palette.color(Swatch::Silver).to_rgba8(), [148, 163, 184, 255]);
    }

    #[test]
    fn test_palette_order_is_stable() {
        let palette = Palette::atlas();
        let first = palette.colors.keys().next().copied();
        assert_eq!(first, Some(Swatch::DeepSpace));
    }
}
