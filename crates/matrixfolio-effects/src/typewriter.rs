//! Typewriter sequencer.
//!
//! Reveals a list of messages one character at a time. After a message is
//! fully typed it is held for that entry's hold time, then cleared, and the
//! next message starts. The machine is advanced with an explicit clock:
//! every step runs at its scheduled time, however late `advance` is called.

/// A message and the pause that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypewriterEntry {
    pub text: String,
    pub hold_ms: u64,
}

impl TypewriterEntry {
    pub fn new(text: impl Into<String>, hold_ms: u64) -> Self {
        Self {
            text: text.into(),
            hold_ms,
        }
    }
}

/// Lifecycle of a [`Typewriter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not started yet.
    Idle,
    /// Revealing characters of the current entry.
    Typing,
    /// Current entry fully shown, waiting out its hold.
    Holding,
    /// Last entry shown and held; nothing changes any more.
    Done,
    /// Stopped by its owner; nothing changes any more.
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    entries: Vec<TypewriterEntry>,
    char_interval_ms: u64,
    index: usize,
    /// Characters of the current entry shown so far.
    revealed: usize,
    phase: Phase,
    next_at_ms: u64,
    finished_at_ms: Option<u64>,
}

impl Typewriter {
    pub fn new(entries: Vec<TypewriterEntry>, char_interval_ms: u64) -> Self {
        Self {
            entries,
            char_interval_ms: char_interval_ms.max(1),
            index: 0,
            revealed: 0,
            phase: Phase::Idle,
            next_at_ms: 0,
            finished_at_ms: None,
        }
    }

    /// Begin typing the first entry at `now_ms`. Only valid while idle.
    pub fn start(&mut self, now_ms: u64) {
        if self.phase != Phase::Idle {
            return;
        }
        if self.entries.is_empty() {
            self.finish(now_ms);
            return;
        }
        self.phase = Phase::Typing;
        self.type_step(now_ms);
    }

    /// Run every step due at or before `now_ms`. Returns whether the visible
    /// state changed.
    pub fn advance(&mut self, now_ms: u64) -> bool {
        let mut changed = false;
        while matches!(self.phase, Phase::Typing | Phase::Holding) && self.next_at_ms <= now_ms {
            let at = self.next_at_ms;
            match self.phase {
                Phase::Typing => self.type_step(at),
                _ => self.hold_step(at),
            }
            changed = true;
        }
        changed
    }

    fn type_step(&mut self, at: u64) {
        let len = self.entries[self.index].text.chars().count();
        if self.revealed < len {
            self.revealed += 1;
            self.next_at_ms = at + self.char_interval_ms;
        } else {
            self.phase = Phase::Holding;
            self.next_at_ms = at + self.entries[self.index].hold_ms;
        }
    }

    fn hold_step(&mut self, at: u64) {
        if self.index + 1 < self.entries.len() {
            self.index += 1;
            self.revealed = 0;
            self.phase = Phase::Typing;
            self.type_step(at);
        } else {
            self.finish(at);
        }
    }

    fn finish(&mut self, at: u64) {
        self.phase = Phase::Done;
        self.finished_at_ms = Some(at);
    }

    /// Freeze the sequencer. Pending steps never run.
    pub fn cancel(&mut self) {
        if self.phase != Phase::Done {
            self.phase = Phase::Cancelled;
        }
    }

    /// The revealed prefix of the active entry.
    pub fn text(&self) -> &str {
        let Some(entry) = self.entries.get(self.index) else {
            return "";
        };
        match entry.text.char_indices().nth(self.revealed) {
            Some((end, _)) => &entry.text[..end],
            None => &entry.text,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Time the last hold elapsed, once done.
    pub fn finished_at(&self) -> Option<u64> {
        self.finished_at_ms
    }

    /// Completed share of the entries, 0.0 to 1.0.
    pub fn progress(&self) -> f32 {
        if self.is_done() || self.entries.is_empty() {
            return 1.0;
        }
        self.index as f32 / self.entries.len() as f32
    }
}
