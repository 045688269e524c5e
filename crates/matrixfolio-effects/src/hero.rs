//! Hero introduction: the name is typed, then the title, then the rest of
//! the hero content is allowed to appear.

use crate::typewriter::{Phase, Typewriter, TypewriterEntry};

/// Timings of the hero reveal, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroTimings {
    /// Delay between mounting and the first name character.
    pub start_delay_ms: u64,
    pub name_interval_ms: u64,
    /// Pause between the full name and the first title character.
    pub title_pause_ms: u64,
    pub title_interval_ms: u64,
}

impl Default for HeroTimings {
    fn default() -> Self {
        Self {
            start_delay_ms: 1000,
            name_interval_ms: 100,
            title_pause_ms: 500,
            title_interval_ms: 80,
        }
    }
}

/// Two chained typewriters and the flag gating the dependent hero content.
#[derive(Debug, Clone)]
pub struct HeroIntro {
    starts_at_ms: u64,
    name: Typewriter,
    title: Typewriter,
    content_visible: bool,
    cancelled: bool,
}

impl HeroIntro {
    pub fn new(name: &str, title: &str, timings: HeroTimings, mounted_at_ms: u64) -> Self {
        Self {
            starts_at_ms: mounted_at_ms + timings.start_delay_ms,
            name: Typewriter::new(
                vec![TypewriterEntry::new(name, timings.title_pause_ms)],
                timings.name_interval_ms,
            ),
            title: Typewriter::new(
                vec![TypewriterEntry::new(title, 0)],
                timings.title_interval_ms,
            ),
            content_visible: false,
            cancelled: false,
        }
    }

    /// Advance both typewriters to `now_ms`.
    pub fn advance(&mut self, now_ms: u64) {
        if self.cancelled {
            return;
        }
        if self.name.phase() == Phase::Idle {
            if now_ms < self.starts_at_ms {
                return;
            }
            self.name.start(self.starts_at_ms);
        }
        self.name.advance(now_ms);

        let Some(name_done_at) = self.name.finished_at() else {
            return;
        };
        if self.title.phase() == Phase::Idle {
            self.title.start(name_done_at);
        }
        self.title.advance(now_ms);

        if self.title.is_done() && !self.content_visible {
            self.content_visible = true;
        }
    }

    pub fn name(&self) -> &str {
        self.name.text()
    }

    pub fn title(&self) -> &str {
        self.title.text()
    }

    /// True once both name and title have fully appeared.
    pub fn content_visible(&self) -> bool {
        self.content_visible
    }

    /// Time the content became visible, if it has.
    pub fn visible_since(&self) -> Option<u64> {
        if self.content_visible {
            self.title.finished_at()
        } else {
            None
        }
    }

    /// Stop both typewriters where they are.
    pub fn cancel(&mut self) {
        self.cancelled = true;
        self.name.cancel();
        self.title.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_delay() -> HeroTimings {
        HeroTimings {
            start_delay_ms: 0,
            ..HeroTimings::default()
        }
    }

    #[test]
    fn test_content_visible_after_name_pause_and_title() {
        let mut hero = HeroIntro::new("AB", "C", no_delay(), 0);
        // 2 x 100 (name) + 500 (pause) + 1 x 80 (title)
        for now in 0..780 {
            hero.advance(now);
            assert!(!hero.content_visible(), "visible too early at {now}ms");
        }
        hero.advance(780);
        assert!(hero.content_visible());
        assert_eq!(hero.visible_since(), Some(780));
        assert_eq!(hero.name(), "AB");
        assert_eq!(hero.title(), "C");
    }

    #[test]
    fn test_visible_flips_exactly_once() {
        let mut hero = HeroIntro::new("AB", "C", no_delay(), 0);
        let mut flips = 0;
        let mut last = hero.content_visible();
        for now in (0..3000).step_by(7) {
            hero.advance(now);
            if hero.content_visible() != last {
                flips += 1;
                last = hero.content_visible();
            }
        }
        assert_eq!(flips, 1);
        assert!(last);
    }

    #[test]
    fn test_start_delay_and_title_waits_for_name() {
        let mut hero = HeroIntro::new("NEO", "ONE", HeroTimings::default(), 100);
        hero.advance(1099);
        assert_eq!(hero.name(), "");
        hero.advance(1100);
        assert_eq!(hero.name(), "N");
        hero.advance(1300);
        assert_eq!(hero.name(), "NEO");
        // Name is done typing at 1400, then pauses 500ms.
        hero.advance(1899);
        assert_eq!(hero.title(), "");
        hero.advance(1900);
        assert_eq!(hero.title(), "O");
        hero.advance(2139);
        assert_eq!(hero.title(), "ONE");
        assert!(!hero.content_visible());
        hero.advance(2140);
        assert!(hero.content_visible());
    }

    #[test]
    fn test_cancel_stops_reveal() {
        let mut hero = HeroIntro::new("AB", "C", no_delay(), 0);
        hero.advance(100);
        hero.cancel();
        hero.advance(10_000);
        assert_eq!(hero.name(), "AB");
        assert_eq!(hero.title(), "");
        assert!(!hero.content_visible());
    }
}
