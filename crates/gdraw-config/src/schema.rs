//! Configuration schema definitions using serde.

use gdraw_common::{points_to_pixels, Result, Rgb};
use serde::{Deserialize, Serialize};

/// Main configuration structure for a graph drawer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawerConfig {
    /// Output resolution in dots per inch.
    pub dpi: u32,
    /// Canvas size in inches.
    pub fig_size: FigSize,
    /// Styling configuration.
    pub style: StyleConfig,
}

/// Canvas dimensions in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigSize {
    /// Canvas width.
    pub width: f64,
    /// Canvas height.
    pub height: f64,
}

/// Styling configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Font family used for labels.
    pub font_family: String,
    /// Label font size in points.
    pub font_size: f64,
    /// Vertex marker diameter in points.
    pub marker_size: f64,
    /// Edge stroke width in points.
    pub line_width: f64,
    /// Default vertex colour.
    pub vertex_color: Rgb,
    /// Edge colour.
    pub edge_color: Rgb,
    /// Label colour.
    pub label_color: Rgb,
    /// Canvas background; `None` keeps vector output transparent.
    pub background: Option<Rgb>,
    /// Fraction of the drawing's extent added around it on every side.
    pub padding: f64,
}

impl FigSize {
    /// Creates a new figure size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Pixel dimensions of the canvas at `dpi`, never smaller than 1x1.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn pixels(&self, dpi: u32) -> (u32, u32) {
        let scale = |inches: f64| (inches * f64::from(dpi)).round().clamp(1.0, f64::from(u32::MAX)) as u32;
        (scale(self.width), scale(self.height))
    }
}

impl From<(f64, f64)> for FigSize {
    fn from((width, height): (f64, f64)) -> Self {
        Self::new(width, height)
    }
}

impl StyleConfig {
    /// Label font size in pixels at `dpi`.
    #[must_use]
    pub fn font_pixels(&self, dpi: u32) -> f64 {
        points_to_pixels(self.font_size, dpi)
    }

    /// Vertex marker radius in pixels at `dpi`.
    #[must_use]
    pub fn marker_radius_pixels(&self, dpi: u32) -> f64 {
        points_to_pixels(self.marker_size, dpi) / 2.0
    }

    /// Edge stroke width in pixels at `dpi`.
    #[must_use]
    pub fn line_pixels(&self, dpi: u32) -> f64 {
        points_to_pixels(self.line_width, dpi)
    }
}

impl DrawerConfig {
    /// Creates a default configuration with the given canvas size.
    #[must_use]
    pub fn with_fig_size(fig_size: impl Into<FigSize>) -> Self {
        Self {
            fig_size: fig_size.into(),
            ..Self::default()
        }
    }

    /// Pixel dimensions of the canvas at the configured resolution.
    #[must_use]
    pub fn pixels(&self) -> (u32, u32) {
        self.fig_size.pixels(self.dpi)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        crate::validator::ConfigValidator::validate(self)
    }
}
