//! Configuration types for poster rendering.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining style and raster
//!   settings.
//! - [`StyleConfig`] - Visual overrides such as the background color.
//! - [`RasterConfig`] - Raster export settings.
//!
//! The defaults reproduce the poster exactly; the CLI never exposes these
//! knobs, but embedders can deserialize a config from TOML or construct
//! one directly.
//!
//! # Example
//!
//! ```
//! # use atlasviz::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.style().background_color().is_ok());
//! ```

use serde::Deserialize;

use atlasviz_core::color::Color;

/// Top-level configuration combining style and raster settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Raster export configuration section.
    #[serde(default)]
    raster: RasterConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its parts.
    pub fn new(style: StyleConfig, raster: RasterConfig) -> Self {
        Self { style, raster }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the raster configuration.
    pub fn raster(&self) -> &RasterConfig {
        &self.raster
    }
}

/// Visual styling overrides for the rendered poster.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background [`Color`] override, as a CSS color string. `None` keeps
    /// the brand background.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    /// Returns the parsed background override, or `None` if not set.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("invalid background color in config: {err}"))
    }
}

/// Raster export settings.
#[derive(Debug, Clone, Deserialize)]
pub struct RasterConfig {
    /// Pixels per SVG user unit. The default of 3.0 turns the 1000×700
    /// canvas into a 3000×2100 PNG, a 300 DPI equivalent of the poster.
    #[serde(default = "default_scale")]
    scale: f32,
}

impl RasterConfig {
    /// Returns the raster scale factor.
    pub fn scale(&self) -> f32 {
        self.scale
    }
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            scale: default_scale(),
        }
    }
}

fn default_scale() -> f32 {
    3.0
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.style().background_color().unwrap().is_none());
        assert_approx_eq!(f32, config.raster().scale(), 3.0);
    }

    #[test]
    fn test_invalid_background_color_is_reported() {
        let style = StyleConfig {
            background_color: Some("not-a-color".to_string()),
        };
        let err = style.background_color().unwrap_err();
        assert!(err.contains("invalid background color"));
    }

    #[test]
    fn test_valid_background_color_parses() {
        let style = StyleConfig {
            background_color: Some("#101418".to_string()),
        };
        assert!(style.background_color().unwrap().is_some());
    }
}
