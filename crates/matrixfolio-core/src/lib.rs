//! Core types shared across the matrixfolio crates.
//!
//! Holds the portfolio content model, the page sections, the matrix
//! palette and the global animation speed setting.

mod palette;
mod portfolio;
mod section;
mod speed;

pub use palette::Palette;
pub use portfolio::{
    ContentError, ExperienceArea, Language, Personal, Portfolio, Proficiency, Project, Skill,
    SkillGroup,
};
pub use section::Section;
pub use speed::AnimationSpeed;
