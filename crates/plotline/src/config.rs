//! Configuration types for Plotline rendering.
//!
//! This module provides configuration structures that control the output
//! canvas and the default styling of trajectory scenes. All types implement
//! [`serde::Deserialize`] for loading from TOML, and every field falls back
//! to a default when omitted.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining canvas and style settings.
//! - [`CanvasConfig`] - Output size, padding and axis orientation.
//! - [`StyleConfig`] - Stroke width, arrowhead size and default colors.
//!
//! # Example
//!
//! ```
//! # use plotline::config::AppConfig;
//! let config: AppConfig = toml::from_str("[canvas]\nwidth = 1024").unwrap();
//! assert_eq!(config.canvas().width(), 1024.0);
//! assert_eq!(config.canvas().height(), 600.0);
//! ```

use serde::Deserialize;

use plotline_core::{color::Color, geometry::Size};

use crate::PlotlineError;

/// Top-level application configuration combining canvas and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Canvas configuration section.
    #[serde(default)]
    canvas: CanvasConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified canvas and style configurations.
    pub fn new(canvas: CanvasConfig, style: StyleConfig) -> Self {
        Self { canvas, style }
    }

    /// Returns the canvas configuration.
    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Output canvas settings.
///
/// The scene is scaled uniformly to fit inside the canvas minus `padding` on
/// every side. With `flip_y` set, scene coordinates with +y pointing up are
/// mirrored so they read naturally on an SVG canvas whose +y points down.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    width: f32,
    height: f32,
    padding: f32,
    flip_y: bool,
}

impl CanvasConfig {
    pub fn new(width: f32, height: f32, padding: f32, flip_y: bool) -> Self {
        Self {
            width,
            height,
            padding,
            flip_y,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }

    pub fn flip_y(&self) -> bool {
        self.flip_y
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Checks that the canvas has a positive area and a usable padding.
    ///
    /// # Errors
    ///
    /// Returns [`PlotlineError::Export`] when the size is not positive or the
    /// padding is negative or leaves no room for the scene.
    pub fn validate(&self) -> Result<(), PlotlineError> {
        if !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(PlotlineError::Export(format!(
                "canvas size must be positive, got {}x{}",
                self.width, self.height
            )));
        }

        if !self.padding.is_finite()
            || self.padding < 0.0
            || self.padding * 2.0 >= self.width.min(self.height)
        {
            return Err(PlotlineError::Export(format!(
                "canvas padding {} does not fit a {}x{} canvas",
                self.padding, self.width, self.height
            )));
        }

        Ok(())
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            padding: 40.0,
            flip_y: true,
        }
    }
}

/// Visual styling configuration for rendered scenes.
///
/// Colors set here are the defaults for plan entries that do not name their
/// own color.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Background [`Color`] of the canvas, transparent when unset.
    background_color: Option<Color>,
    stroke_width: f32,
    trace_color: Color,
    arrow_color: Color,
    turn_color: Color,
    marker_color: Color,
    arrow_size: f32,
}

impl StyleConfig {
    pub fn background_color(&self) -> Option<Color> {
        self.background_color
    }

    /// Stroke width in output pixels, independent of the view scale.
    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn trace_color(&self) -> Color {
        self.trace_color
    }

    pub fn arrow_color(&self) -> Color {
        self.arrow_color
    }

    pub fn turn_color(&self) -> Color {
        self.turn_color
    }

    pub fn marker_color(&self) -> Color {
        self.marker_color
    }

    /// Arm length of arrowheads that do not specify their own size, in scene units.
    pub fn arrow_size(&self) -> f32 {
        self.arrow_size
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: Some(Color::new("white").unwrap_or_default()),
            stroke_width: 2.0,
            trace_color: Color::new("steelblue").unwrap_or_default(),
            arrow_color: Color::new("darkorange").unwrap_or_default(),
            turn_color: Color::new("seagreen").unwrap_or_default(),
            marker_color: Color::new("crimson").unwrap_or_default(),
            arrow_size: 12.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.canvas().width(), 800.0);
        assert_eq!(config.canvas().height(), 600.0);
        assert_eq!(config.canvas().padding(), 40.0);
        assert!(config.canvas().flip_y());
        assert_eq!(config.style().stroke_width(), 2.0);
        assert_eq!(config.style().trace_color(), Color::new("steelblue").unwrap());
        assert!(config.canvas().validate().is_ok());
    }

    #[test]
    fn test_partial_sections() {
        let source = r#"
            [canvas]
            flip_y = false

            [style]
            background_color = "black"
            arrow_size = 4.5
        "#;
        let config: AppConfig = toml::from_str(source).unwrap();

        assert!(!config.canvas().flip_y());
        assert_eq!(config.canvas().width(), 800.0);
        assert_eq!(
            config.style().background_color(),
            Some(Color::new("black").unwrap())
        );
        assert_eq!(config.style().arrow_size(), 4.5);
        assert_eq!(config.style().stroke_width(), 2.0);
    }

    #[test]
    fn test_invalid_color_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[style]\ntrace_color = \"nope\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_canvas_validation() {
        assert!(CanvasConfig::new(0.0, 100.0, 0.0, true).validate().is_err());
        assert!(CanvasConfig::new(100.0, 100.0, -1.0, true).validate().is_err());
        assert!(CanvasConfig::new(100.0, 100.0, 50.0, true).validate().is_err());
        assert!(CanvasConfig::new(100.0, 100.0, 10.0, false).validate().is_ok());
    }
}
