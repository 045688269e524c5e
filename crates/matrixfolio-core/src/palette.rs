//! The matrix color palette.

use ratatui::style::Color;

/// Named colors of the matrix theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette;

impl Palette {
    pub const VOID: Color = Color::Rgb(0, 0, 0);
    pub const NEON: Color = Color::Rgb(0, 255, 0);
    pub const TERMINAL: Color = Color::Rgb(0, 221, 0);
    pub const MUTED: Color = Color::Rgb(0, 187, 0);
    pub const SUBTLE: Color = Color::Rgb(10, 10, 10);
    /// Dimmed neon for borders and hidden backdrops.
    pub const DIM: Color = Color::Rgb(0, 90, 0);

    /// Badge color for a project category.
    pub fn category(category: &str) -> Color {
        match category {
            "Robotics" => Color::Rgb(239, 68, 68),
            "Web Development" => Color::Rgb(59, 130, 246),
            "Hardware Design" => Color::Rgb(168, 85, 247),
            "PCB Engineering" => Color::Rgb(249, 115, 22),
            "Hardware/Software Co-design" => Color::Rgb(6, 182, 212),
            _ => Self::MUTED,
        }
    }
}
