//! Shared utility functions.

use crate::types::Rgb;

/// Parses a `#rrggbb` hex colour.
pub fn parse_hex_color(input: &str) -> Option<Rgb> {
    let hex = input.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Renders an integer with Unicode subscript digits, e.g. `12` as `₁₂`.
pub fn to_subscript(value: i64) -> String {
    value
        .to_string()
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(digit) => char::from_u32(0x2080 + digit).unwrap_or(c),
            None if c == '-' => '₋',
            None => c,
        })
        .collect()
}

/// Converts a length in typographic points to pixels at `dpi`.
pub fn points_to_pixels(points: f64, dpi: u32) -> f64 {
    points * f64::from(dpi) / 72.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FF0000"), Some(Rgb(255, 0, 0)));
        assert_eq!(parse_hex_color("#00ff00"), Some(Rgb(0, 255, 0)));
        assert_eq!(parse_hex_color(" #0000FF "), Some(Rgb(0, 0, 255)));

        assert_eq!(parse_hex_color("invalid"), None);
        assert_eq!(parse_hex_color("#ZZ0000"), None);
        assert_eq!(parse_hex_color("#FFF"), None);
        assert_eq!(parse_hex_color("FF0000"), None);
    }

    #[test]
    fn test_to_subscript() {
        assert_eq!(to_subscript(1), "₁");
        assert_eq!(to_subscript(12), "₁₂");
        assert_eq!(to_subscript(-3), "₋₃");
        assert_eq!(to_subscript(0), "₀");
    }

    #[test]
    fn test_points_to_pixels() {
        assert!((points_to_pixels(72.0, 150) - 150.0).abs() < f64::EPSILON);
        assert!((points_to_pixels(36.0, 100) - 50.0).abs() < f64::EPSILON);
    }
}
