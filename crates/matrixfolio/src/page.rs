//! Scrollable page layout and per-section visibility.

use matrixfolio_core::Section;
use matrixfolio_effects::{VisibilityObserver, visible_fraction};

/// Vertical extent of a section on the page, in lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionSpan {
    pub top: u32,
    pub height: u32,
}

/// Scroll position, section layout and one visibility observer per section.
#[derive(Debug, Clone)]
pub struct Page {
    scroll: u32,
    viewport_height: u32,
    spans: [SectionSpan; Section::ALL.len()],
    total_height: u32,
    observers: Vec<VisibilityObserver>,
}

impl Page {
    pub fn new(reveal_threshold: f32) -> Self {
        Self {
            scroll: 0,
            viewport_height: 0,
            spans: [SectionSpan::default(); Section::ALL.len()],
            total_height: 0,
            observers: Section::ALL
                .iter()
                .map(|_| VisibilityObserver::new(reveal_threshold))
                .collect(),
        }
    }

    /// Lay the sections out top to bottom with the given heights.
    pub fn layout(&mut self, heights: [u32; Section::ALL.len()], viewport_height: u32) {
        let mut top = 0;
        for (span, height) in self.spans.iter_mut().zip(heights) {
            *span = SectionSpan { top, height };
            top += height;
        }
        self.total_height = top;
        self.viewport_height = viewport_height;
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// Feed each section's visible fraction to its observer. Returns whether
    /// any section was revealed by this call.
    pub fn observe(&mut self, now_ms: u64) -> bool {
        let mut revealed = false;
        for ((section, span), observer) in Section::ALL
            .iter()
            .zip(self.spans.iter())
            .zip(self.observers.iter_mut())
        {
            let fraction = visible_fraction(span.top, span.height, self.scroll, self.viewport_height);
            if observer.observe(fraction, now_ms) {
                tracing::debug!(section = section.id(), at_ms = now_ms, "section revealed");
                revealed = true;
            }
        }
        revealed
    }

    pub fn observer(&self, section: Section) -> &VisibilityObserver {
        &self.observers[section.index()]
    }

    pub fn span(&self, section: Section) -> SectionSpan {
        self.spans[section.index()]
    }

    pub fn scroll(&self) -> u32 {
        self.scroll
    }

    pub fn total_height(&self) -> u32 {
        self.total_height
    }

    pub fn max_scroll(&self) -> u32 {
        self.total_height().saturating_sub(self.viewport_height)
    }

    pub fn scroll_to(&mut self, line: u32) {
        self.scroll = line.min(self.max_scroll());
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let target = if delta < 0 {
            self.scroll.saturating_sub(delta.unsigned_abs())
        } else {
            self.scroll.saturating_add(delta as u32)
        };
        self.scroll_to(target);
    }

    pub fn page_down(&mut self) {
        self.scroll_by(self.page_step() as i32);
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-(self.page_step() as i32));
    }

    fn page_step(&self) -> u32 {
        self.viewport_height.saturating_sub(2).max(1)
    }

    pub fn jump_to(&mut self, section: Section) {
        self.scroll_to(self.span(section).top);
    }

    /// Scroll the least amount needed to bring `line` into view.
    pub fn reveal_line(&mut self, line: u32, lines_below: u32) {
        if line < self.scroll {
            self.scroll_to(line);
        } else if line + lines_below > self.scroll + self.viewport_height {
            self.scroll_to((line + lines_below).saturating_sub(self.viewport_height));
        }
    }

    /// The section under the middle of the viewport.
    pub fn active_section(&self) -> Section {
        let midpoint = self.scroll + self.viewport_height / 2;
        Section::ALL
            .iter()
            .zip(self.spans.iter())
            .find(|(_, span)| midpoint >= span.top && midpoint < span.top + span.height)
            .map(|(section, _)| *section)
            .unwrap_or(if midpoint >= self.total_height {
                Section::Contact
            } else {
                Section::Hero
            })
    }
}
