//! Animated effects for the matrixfolio portfolio.
//!
//! This crate provides the digital rain background, the typewriter
//! sequencer used by the boot log and the hero section, and the small
//! timing primitives the views build on. Every effect is advanced with an
//! explicit `now_ms` so it can be driven by a virtual clock in tests.

mod backdrop;
mod chars;
mod color;
mod entropy;
mod hero;
mod rain;
mod reveal;
mod state;
mod ticker;
mod typewriter;

pub use backdrop::render_binary_char;
pub use color::dim;
pub use entropy::Entropy;
pub use hero::{HeroIntro, HeroTimings};
pub use rain::{RainCell, RainColumn, RainField, RainSettings};
pub use reveal::{VisibilityObserver, visible_fraction};
pub use state::DigitalRain;
pub use ticker::{CursorBlink, Ticker};
pub use typewriter::{Phase, Typewriter, TypewriterEntry};
