//! Stateless binary-digit backdrop for the boot screen.

use matrixfolio_core::Palette;
use ratatui::{style::Style, text::Span};

use crate::chars::BINARY_CHARS;
use crate::color::dim;

/// Length of one pulse of the backdrop.
const PULSE_PERIOD_MS: u64 = 1000;

/// Render one cell of the pulsing `0`/`1` backdrop.
///
/// The digit and brightness are derived from the position and the pulse
/// number, so nothing has to be stored between frames.
pub fn render_binary_char(x: u16, y: u16, elapsed_ms: u64) -> Span<'static> {
    let x = x as usize;
    let y = y as usize;
    // One digit per two cells keeps the grid airy.
    if x % 2 == 1 {
        return Span::raw(" ");
    }

    let cell_seed = x.wrapping_mul(2_654_435_761) ^ y.wrapping_mul(40_503);
    // Each cell pulses on its own phase.
    let offset = (cell_seed % PULSE_PERIOD_MS as usize) as u64;
    let pulse = (elapsed_ms + offset) / PULSE_PERIOD_MS;
    let seed = cell_seed.wrapping_add(pulse as usize).wrapping_mul(31);

    let ch = BINARY_CHARS[(seed >> 3) % BINARY_CHARS.len()];
    let phase = ((elapsed_ms + offset) % PULSE_PERIOD_MS) as f32 / PULSE_PERIOD_MS as f32;
    let brightness = 0.15 + 0.2 * (phase * std::f32::consts::PI).sin();

    Span::styled(ch.to_string(), Style::new().fg(dim(Palette::NEON, brightness)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odd_cells_are_blank() {
        assert_eq!(render_binary_char(3, 0, 0).content, " ");
    }

    #[test]
    fn test_even_cells_are_binary() {
        for x in (0..40).step_by(2) {
            for t in [0, 333, 1500] {
                let span = render_binary_char(x, 5, t);
                assert!(span.content == "0" || span.content == "1");
            }
        }
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(render_binary_char(8, 2, 1234), render_binary_char(8, 2, 1234));
    }
}
