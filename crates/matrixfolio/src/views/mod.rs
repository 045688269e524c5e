//! Views: the boot screen, the page sections and the navigation bar.

pub mod about;
pub mod boot;
pub mod contact;
pub mod hero;
pub mod nav;
pub mod projects;
pub mod skills;
pub mod widgets;

use matrixfolio_core::Portfolio;

/// What every section needs to render one frame.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub portfolio: &'a Portfolio,
    pub now_ms: u64,
    /// Width of the content column in cells.
    pub width: u16,
    /// Current blinking cursor glyph.
    pub cursor: &'static str,
}
