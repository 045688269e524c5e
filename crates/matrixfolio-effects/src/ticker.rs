//! Fixed-rate timers driven by an external millisecond clock.

/// A repeating timer with a fixed period.
///
/// Ticks are scheduled on a fixed grid from the start time, so the rate
/// does not drift with how often the caller polls.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval_ms: u64,
    next_at_ms: Option<u64>,
}

impl Ticker {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            next_at_ms: None,
        }
    }

    /// Arm the ticker; the first tick fires one interval after `now_ms`.
    pub fn start(&mut self, now_ms: u64) {
        self.next_at_ms = Some(now_ms + self.interval_ms);
    }

    pub fn is_running(&self) -> bool {
        self.next_at_ms.is_some()
    }

    /// Number of ticks that fell due since the last call.
    pub fn due(&mut self, now_ms: u64) -> u64 {
        let Some(next) = self.next_at_ms else {
            return 0;
        };
        if now_ms < next {
            return 0;
        }
        let ticks = (now_ms - next) / self.interval_ms + 1;
        self.next_at_ms = Some(next + ticks * self.interval_ms);
        ticks
    }

    /// Milliseconds until the next tick, `None` when stopped.
    pub fn until_next(&self, now_ms: u64) -> Option<u64> {
        self.next_at_ms.map(|next| next.saturating_sub(now_ms))
    }

    /// Stop the ticker. No further ticks fall due.
    pub fn cancel(&mut self) {
        self.next_at_ms = None;
    }
}

/// Blinking cursor state, independent of any typing progress.
#[derive(Debug, Clone)]
pub struct CursorBlink {
    mounted_at_ms: u64,
    interval_ms: u64,
    stopped: bool,
}

impl CursorBlink {
    pub fn new(mounted_at_ms: u64, interval_ms: u64) -> Self {
        Self {
            mounted_at_ms,
            interval_ms: interval_ms.max(1),
            stopped: false,
        }
    }

    /// Whether the cursor is lit at `now_ms`. It starts lit.
    pub fn visible(&self, now_ms: u64) -> bool {
        if self.stopped {
            return false;
        }
        let phase = now_ms.saturating_sub(self.mounted_at_ms) / self.interval_ms;
        phase % 2 == 0
    }

    /// Render the cursor glyph or a blank of the same width.
    pub fn glyph(&self, now_ms: u64) -> &'static str {
        if self.visible(now_ms) { "▋" } else { " " }
    }

    pub fn stop(&mut self) {
        self.stopped = true;
    }
}
