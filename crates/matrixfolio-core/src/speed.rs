//! Global animation speed.

use serde::{Deserialize, Serialize};

/// Scales every typing and tick interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl AnimationSpeed {
    /// Apply the speed to an interval in milliseconds.
    pub fn scale(self, interval_ms: u64) -> u64 {
        match self {
            AnimationSpeed::Slow => interval_ms * 3 / 2,
            AnimationSpeed::Normal => interval_ms,
            AnimationSpeed::Fast => interval_ms / 2,
        }
    }
}
