//! Color helpers for the effects.

use ratatui::style::Color;

/// Scale an RGB color towards black by `intensity` (0.0-1.0).
///
/// Non-RGB colors are returned unchanged.
pub fn dim(color: Color, intensity: f32) -> Color {
    let intensity = intensity.clamp(0.0, 1.0);
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            (r as f32 * intensity) as u8,
            (g as f32 * intensity) as u8,
            (b as f32 * intensity) as u8,
        ),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dim() {
        assert_eq!(dim(Color::Rgb(0, 255, 0), 1.0), Color::Rgb(0, 255, 0));
        assert_eq!(dim(Color::Rgb(0, 200, 100), 0.5), Color::Rgb(0, 100, 50));
        assert_eq!(dim(Color::Rgb(0, 255, 0), 2.0), Color::Rgb(0, 255, 0));
        assert_eq!(dim(Color::Green, 0.1), Color::Green);
    }
}
