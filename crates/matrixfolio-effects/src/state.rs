//! Digital rain background layer.

use ratatui::{Frame, layout::Rect, widgets::Paragraph};

use crate::rain::{RainField, RainSettings};
use crate::ticker::Ticker;

/// Upper bound on frames replayed in one update after a stall.
const MAX_CATCH_UP_FRAMES: u64 = 8;

/// Owns the rain field, its tick schedule and its randomness.
#[derive(Debug)]
pub struct DigitalRain {
    field: RainField,
    ticker: Ticker,
    rng: fastrand::Rng,
    /// Last known viewport width.
    last_width: u16,
    /// Last known viewport height.
    last_height: u16,
    stopped: bool,
}

impl DigitalRain {
    /// Create a rain layer ticking every `tick_ms`.
    pub fn new(settings: RainSettings, tick_ms: u64) -> Self {
        Self::with_rng(settings, tick_ms, fastrand::Rng::new())
    }

    /// Create a rain layer with a given random generator.
    pub fn with_rng(settings: RainSettings, tick_ms: u64, rng: fastrand::Rng) -> Self {
        Self {
            field: RainField::new(settings),
            ticker: Ticker::new(tick_ms),
            rng,
            last_width: 0,
            last_height: 0,
            stopped: false,
        }
    }

    /// Bring the field up to date for a viewport of `area` at `now_ms`.
    /// Returns the number of frames advanced.
    pub fn update(&mut self, area: Rect, now_ms: u64) -> u64 {
        if self.stopped || area.is_empty() {
            return 0;
        }

        let dimensions_changed = area.width != self.last_width || area.height != self.last_height;
        if dimensions_changed {
            self.field.resize(area.width, area.height);
            self.last_width = area.width;
            self.last_height = area.height;
        }
        if !self.ticker.is_running() {
            self.ticker.start(now_ms);
        }

        let frames = self.ticker.due(now_ms).min(MAX_CATCH_UP_FRAMES);
        for _ in 0..frames {
            self.field.advance_frame(&mut self.rng);
        }
        frames
    }

    /// Update and paint the rain over the whole frame.
    pub fn render(&mut self, frame: &mut Frame, now_ms: u64) {
        let area = frame.area();
        self.update(area, now_ms);
        if self.stopped || area.is_empty() {
            return;
        }
        frame.render_widget(Paragraph::new(self.field.lines()), area);
    }

    /// Milliseconds until the next frame is due.
    pub fn until_next(&self, now_ms: u64) -> Option<u64> {
        self.ticker.until_next(now_ms)
    }

    pub fn field(&self) -> &RainField {
        &self.field
    }

    /// Tear the layer down. No more frames are computed or painted.
    pub fn stop(&mut self) {
        self.stopped = true;
        self.ticker.cancel();
    }
}
