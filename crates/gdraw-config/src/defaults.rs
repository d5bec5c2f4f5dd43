//! Default values.

use crate::schema::*;
use gdraw_common::Rgb;

/// Default output resolution.
pub const DEFAULT_DPI: u32 = 150;

/// Default label font size in points.
pub const DEFAULT_FONT_SIZE: f64 = 25.0;

/// Default vertex marker diameter in points.
pub const DEFAULT_MARKER_SIZE: f64 = 20.0;

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            fig_size: FigSize::default(),
            dpi: DEFAULT_DPI,
            style: StyleConfig::default(),
        }
    }
}

impl Default for FigSize {
    fn default() -> Self {
        Self::new(6.0, 6.0)
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: DEFAULT_FONT_SIZE,
            marker_size: DEFAULT_MARKER_SIZE,
            line_width: 1.5,
            vertex_color: Rgb::BLACK,
            edge_color: Rgb::BLACK,
            label_color: Rgb::BLACK,
            background: None,
            padding: 0.05,
        }
    }
}
