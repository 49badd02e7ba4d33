//! Color handling for the poster renderer.
//!
//! This module provides the [`Color`] type, a thin wrapper around the
//! `DynamicColor` type from the color crate with the conversions the
//! renderer needs: CSS parsing, SVG attribute values, and 8-bit RGBA for
//! the raster backend.

use std::{
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::{DynamicColor, Srgb};

/// A parsed CSS color usable in SVG attributes and raster pixels.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a CSS color string such as `"#0a0f1a"`,
    /// `"rgb(148, 163, 184)"`, or `"silver"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use atlasviz_core::color::Color;
    ///
    /// let cyan = Color::new("#00d4ff").unwrap();
    /// let white = Color::new("white").unwrap();
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Returns a sanitized, ID-safe string representation of this color.
    ///
    /// The result contains only characters valid in an SVG `id` attribute
    /// and starts with a letter, so it can name per-color arrowhead
    /// markers.
    ///
    /// # Examples
    ///
    /// ```
    /// use atlasviz_core::color::Color;
    ///
    /// let id = Color::new("#f59e0b").unwrap().to_id_safe_string();
    /// assert!(id.chars().all(|c| c.is_alphanumeric() || c == '_'));
    /// assert!(!id.contains('#'));
    /// ```
    pub fn to_id_safe_string(self) -> String {
        let mut sanitized = self
            .to_string()
            .replace('#', "hex")
            .replace(['(', ')', ',', ' ', ';', '.', '%'], "_");

        // SVG ids must not start with a digit
        if sanitized.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            sanitized = format!("c_{sanitized}");
        }

        sanitized
    }

    /// Returns the alpha component, between 0.0 (transparent) and 1.0
    /// (opaque).
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }

    /// Returns this color as 8-bit `[r, g, b, a]` in sRGB, for the raster
    /// backend.
    pub fn to_rgba8(self) -> [u8; 4] {
        let rgba = self.color.to_alpha_color::<Srgb>().to_rgba8();
        [rgba.r, rgba.g, rgba.b, rgba.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        assert!(Color::new("#0a0f1a").is_ok());
        assert!(Color::new("rgb(148, 163, 184)").is_ok());
        assert!(Color::new("not-a-color").is_err());
    }

    #[test]
    fn test_color_default() {
        assert_eq!(Color::default().to_string(), "black");
    }

    #[test]
    fn test_color_to_rgba8() {
        let cyan = Color::new("#00d4ff").unwrap();
        assert_eq!(cyan.to_rgba8(), [0, 212, 255, 255]);

        let white = Color::new("#ffffff").unwrap();
        assert_eq!(white.to_rgba8(), [255, 255, 255, 255]);
    }

    #[test]
    fn test_color_to_id_safe_string() {
        let id = Color::new("#ef4444").unwrap().to_id_safe_string();
        assert!(!id.contains('#'));
        assert!(!id.contains('('));
        assert!(!id.is_empty());
        assert!(!id.chars().next().unwrap().is_ascii_digit());
    }

    #[test]
    fn test_color_eq_hash() {
        use std::collections::HashSet;

        let a = Color::new("#00d4ff").unwrap();
        let b = Color::new("#00d4ff").unwrap();
        let c = Color::new("#7c3aed").unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
        assert!(!set.contains(&c));
    }
}
