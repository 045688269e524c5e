//! Digital rain field (stateful).
//!
//! The field is a grid of glyph slots. Each tick fades every slot a little,
//! then every column paints one random glyph at its head and moves down a
//! row. Columns past the bottom restart at the top at random, so they drift
//! out of step with each other.

use matrixfolio_core::Palette;
use ratatui::{
    style::{Style, Stylize},
    text::{Line, Span},
};

use crate::chars::{NARROW_RAIN_CHARS, RAIN_CHARS, glyph_cells};
use crate::color::dim;
use crate::entropy::Entropy;

/// Slots dimmer than this render as blank.
const VISIBLE_FLOOR: f32 = 0.04;

/// Starting row of a freshly created column.
const INITIAL_POSITION: u32 = 1;

/// Geometry and behavior of the rain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainSettings {
    /// Glyph width in viewport units.
    pub glyph_width: u16,
    /// Glyph height in viewport units.
    pub glyph_height: u16,
    /// Chance per tick that a column past the bottom restarts.
    pub reset_chance: f32,
    /// Opacity of the fading overlay applied every tick.
    pub fade: f32,
    /// Lower bound of the random per-glyph opacity.
    pub min_opacity: f32,
}

impl Default for RainSettings {
    fn default() -> Self {
        Self {
            glyph_width: 2,
            glyph_height: 1,
            reset_chance: 0.025,
            fade: 0.05,
            min_opacity: 0.2,
        }
    }
}

/// One falling stream of glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RainColumn {
    /// Row of the stream's head.
    pub position: u32,
}

/// A glyph slot on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainCell {
    pub glyph: char,
    /// Brightness left on the slot, 0.0 to 1.0.
    pub intensity: f32,
}

impl Default for RainCell {
    fn default() -> Self {
        Self {
            glyph: ' ',
            intensity: 0.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RainField {
    settings: RainSettings,
    width: u16,
    height: u16,
    rows: usize,
    columns: Vec<RainColumn>,
    cells: Vec<RainCell>,
}

impl RainField {
    pub fn new(settings: RainSettings) -> Self {
        let settings = RainSettings {
            glyph_width: settings.glyph_width.max(1),
            glyph_height: settings.glyph_height.max(1),
            ..settings
        };
        Self {
            settings,
            width: 0,
            height: 0,
            rows: 0,
            columns: Vec::new(),
            cells: Vec::new(),
        }
    }

    /// Number of columns that fit in `width`.
    pub fn column_count(width: u16, glyph_width: u16) -> usize {
        (width / glyph_width.max(1)) as usize
    }

    /// Resize the surface. Columns are rebuilt from scratch.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.rows = height.div_ceil(self.settings.glyph_height) as usize;
        let count = Self::column_count(width, self.settings.glyph_width);
        self.columns = vec![
            RainColumn {
                position: INITIAL_POSITION
            };
            count
        ];
        self.cells = vec![RainCell::default(); count * self.rows];
    }

    /// Advance the rain by one tick.
    pub fn advance_frame(&mut self, rng: &mut impl Entropy) {
        let keep = 1.0 - self.settings.fade.clamp(0.0, 1.0);
        for cell in &mut self.cells {
            cell.intensity *= keep;
        }

        let alphabet = self.alphabet();
        let min_opacity = self.settings.min_opacity.clamp(0.0, 1.0);
        let glyph_height = u32::from(self.settings.glyph_height);
        let height = u32::from(self.height);
        let count = self.columns.len();

        for (x, column) in self.columns.iter_mut().enumerate() {
            let glyph = alphabet[rng.index(alphabet.len())];
            let opacity = min_opacity + rng.unit() * (1.0 - min_opacity);

            let row = column.position as usize;
            if row < self.rows {
                let cell = &mut self.cells[row * count + x];
                cell.glyph = glyph;
                cell.intensity = opacity + (1.0 - opacity) * cell.intensity;
            }

            column.position += 1;
            if column.position * glyph_height > height && rng.unit() < self.settings.reset_chance {
                column.position = 0;
            }
        }
    }

    /// Glyphs that fit the configured slot width.
    fn alphabet(&self) -> &'static [char] {
        if self.settings.glyph_width >= 2 {
            RAIN_CHARS
        } else {
            NARROW_RAIN_CHARS
        }
    }

    pub fn columns(&self) -> &[RainColumn] {
        &self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn dimensions(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// The slot at glyph coordinates `(x, row)`.
    pub fn cell(&self, x: usize, row: usize) -> Option<&RainCell> {
        if x >= self.columns.len() || row >= self.rows {
            return None;
        }
        self.cells.get(row * self.columns.len() + x)
    }

    /// Render one terminal line per glyph row.
    pub fn lines(&self) -> Vec<Line<'static>> {
        let slot = self.settings.glyph_width as usize;
        let mut lines = Vec::with_capacity(self.height as usize);
        for y in 0..self.height as usize {
            let row = y / self.settings.glyph_height as usize;
            // Only the top line of a tall glyph carries the character.
            let is_glyph_line = y % self.settings.glyph_height as usize == 0;
            let spans: Vec<Span<'static>> = (0..self.columns.len())
                .map(|x| match self.cell(x, row) {
                    Some(cell) if is_glyph_line && cell.intensity >= VISIBLE_FLOOR => {
                        let pad = slot.saturating_sub(glyph_cells(cell.glyph) as usize);
                        let text = format!("{}{}", cell.glyph, " ".repeat(pad));
                        let color = dim(Palette::NEON, cell.intensity);
                        let style = Style::new().fg(color);
                        if cell.intensity > 0.9 {
                            Span::styled(text, style).bold()
                        } else {
                            Span::styled(text, style)
                        }
                    }
                    _ => Span::raw(" ".repeat(slot)),
                })
                .collect();
            lines.push(Line::from(spans));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Entropy source returning fixed values.
    struct Fixed {
        unit: f32,
    }

    impl Entropy for Fixed {
        fn unit(&mut self) -> f32 {
            self.unit
        }

        fn index(&mut self, _len: usize) -> usize {
            0
        }
    }

    fn field(settings: RainSettings, width: u16, height: u16) -> RainField {
        let mut field = RainField::new(settings);
        field.resize(width, height);
        field
    }

    #[test]
    fn test_column_count_is_floor_of_width() {
        let pixels = RainSettings {
            glyph_width: 14,
            glyph_height: 14,
            ..RainSettings::default()
        };
        assert_eq!(field(pixels, 1000, 700).columns().len(), 71);
        assert_eq!(field(pixels, 13, 700).columns().len(), 0);
        assert_eq!(RainField::column_count(81, 2), 40);
    }

    #[test]
    fn test_resize_recomputes_and_restarts_columns() {
        let mut rain = field(RainSettings::default(), 80, 24);
        let mut rng = Fixed { unit: 0.5 };
        for _ in 0..5 {
            rain.advance_frame(&mut rng);
        }
        assert_eq!(rain.columns()[0].position, 6);
        rain.resize(120, 30);
        assert_eq!(rain.columns().len(), 60);
        assert!(rain.columns().iter().all(|c| c.position == INITIAL_POSITION));
        assert_eq!(rain.rows(), 30);
        assert_eq!(rain.dimensions(), (120, 30));
    }

    #[test]
    fn test_columns_start_at_initial_offset() {
        let rain = field(RainSettings::default(), 10, 10);
        assert!(rain.columns().iter().all(|c| c.position == 1));
    }

    #[test]
    fn test_reset_when_certain() {
        let settings = RainSettings {
            reset_chance: 1.0,
            ..RainSettings::default()
        };
        let mut rain = field(settings, 4, 5);
        let mut rng = Fixed { unit: 0.99 };
        let mut positions = Vec::new();
        for _ in 0..8 {
            rain.advance_frame(&mut rng);
            positions.push(rain.columns()[0].position);
        }
        // 2, 3, 4, 5, then 6 exceeds the height and resets.
        assert_eq!(positions, vec![2, 3, 4, 5, 0, 1, 2, 3]);
    }

    #[test]
    fn test_no_reset_when_impossible() {
        let settings = RainSettings {
            reset_chance: 0.0,
            ..RainSettings::default()
        };
        let mut rain = field(settings, 4, 5);
        let mut rng = Fixed { unit: 0.0 };
        for _ in 0..50 {
            rain.advance_frame(&mut rng);
        }
        assert_eq!(rain.columns()[0].position, 51);
    }

    #[test]
    fn test_reset_happens_eventually_with_real_entropy() {
        let mut rain = field(RainSettings::default(), 20, 10);
        let mut rng = fastrand::Rng::with_seed(42);
        let mut reset = vec![false; rain.columns().len()];
        for _ in 0..2000 {
            rain.advance_frame(&mut rng);
            for (seen, column) in reset.iter_mut().zip(rain.columns()) {
                *seen |= column.position == 0;
            }
        }
        assert!(reset.iter().all(|r| *r));
    }

    #[test]
    fn test_paint_and_fade() {
        let settings = RainSettings {
            fade: 0.5,
            min_opacity: 0.2,
            ..RainSettings::default()
        };
        let mut rain = field(settings, 2, 10);
        // Opacity = 0.2 + 0.5 * 0.8 = 0.6.
        let mut rng = Fixed { unit: 0.5 };
        rain.advance_frame(&mut rng);
        let head = rain.cell(0, 1).copied().unwrap();
        assert_eq!(head.glyph, RAIN_CHARS[0]);
        assert!((head.intensity - 0.6).abs() < 1e-6);

        rain.advance_frame(&mut rng);
        let trail = rain.cell(0, 1).unwrap();
        assert!((trail.intensity - 0.3).abs() < 1e-6);
        assert!((rain.cell(0, 2).unwrap().intensity - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_opacity_stays_in_range() {
        let mut rain = field(RainSettings::default(), 2, 10);
        let mut rng = Fixed { unit: 0.0 };
        rain.advance_frame(&mut rng);
        assert!((rain.cell(0, 1).unwrap().intensity - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_paint_below_surface_is_dropped() {
        let settings = RainSettings {
            reset_chance: 0.0,
            ..RainSettings::default()
        };
        let mut rain = field(settings, 2, 3);
        let mut rng = Fixed { unit: 0.5 };
        for _ in 0..10 {
            rain.advance_frame(&mut rng);
        }
        assert!(rain.cell(0, 3).is_none());
    }

    #[test]
    fn test_narrow_slots_use_digits() {
        let settings = RainSettings {
            glyph_width: 1,
            ..RainSettings::default()
        };
        let mut rain = field(settings, 3, 4);
        let mut rng = Fixed { unit: 0.5 };
        rain.advance_frame(&mut rng);
        assert_eq!(rain.cell(0, 1).unwrap().glyph, '0');
        assert_eq!(rain.columns().len(), 3);
    }

    #[test]
    fn test_lines_cover_surface() {
        let mut rain = field(RainSettings::default(), 10, 4);
        let mut rng = Fixed { unit: 0.5 };
        rain.advance_frame(&mut rng);
        let lines = rain.lines();
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|l| l.width() == 10));
        assert_eq!(lines[0].to_string().trim(), "");
        assert!(lines[1].to_string().contains('0'));
    }

    #[test]
    fn test_tall_glyphs() {
        let settings = RainSettings {
            glyph_width: 2,
            glyph_height: 2,
            reset_chance: 1.0,
            ..RainSettings::default()
        };
        let mut rain = field(settings, 4, 5);
        assert_eq!(rain.rows(), 3);
        let mut rng = Fixed { unit: 0.5 };
        rain.advance_frame(&mut rng);
        rain.advance_frame(&mut rng);
        // Position 3 * 2 = 6 > 5, so the column restarted.
        assert_eq!(rain.columns()[0].position, 0);
        assert_eq!(rain.lines().len(), 5);
    }
}
