//! Runtime validation of drawer configuration.

use crate::schema::DrawerConfig;
use gdraw_common::{GDrawError, Result};

/// Highest accepted resolution.
pub const MAX_DPI: u32 = 2400;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Checks every numeric field, returning the first violation.
    pub fn validate(config: &DrawerConfig) -> Result<()> {
        Self::positive(config.fig_size.width, "fig_size.width")?;
        Self::positive(config.fig_size.height, "fig_size.height")?;

        if config.dpi == 0 || config.dpi > MAX_DPI {
            return Err(GDrawError::validation_field(
                format!("dpi must be between 1 and {MAX_DPI}, got {}", config.dpi),
                "dpi",
            ));
        }

        let style = &config.style;
        Self::positive(style.font_size, "style.font_size")?;
        Self::positive(style.marker_size, "style.marker_size")?;
        Self::positive(style.line_width, "style.line_width")?;

        if !style.padding.is_finite() || style.padding < 0.0 {
            return Err(GDrawError::validation_field(
                format!("padding must be a non-negative number, got {}", style.padding),
                "style.padding",
            ));
        }

        if style.font_family.trim().is_empty() {
            return Err(GDrawError::validation_field(
                "font family cannot be empty",
                "style.font_family",
            ));
        }

        Ok(())
    }

    fn positive(value: f64, field: &str) -> Result<()> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(GDrawError::validation_field(
                format!("{field} must be a positive number, got {value}"),
                field,
            ))
        }
    }
}
