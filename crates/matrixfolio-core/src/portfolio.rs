//! Portfolio content model, deserialized from `portfolio.json`.

use serde::Deserialize;

/// Errors raised while loading portfolio content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read content file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to fetch content: {0}")]
    Http(String),
    #[error("malformed content: {0}")]
    Json(#[from] serde_json::Error),
}

/// The whole content document.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Portfolio {
    pub personal: Personal,
    #[serde(default)]
    pub languages: Vec<Language>,
    #[serde(default)]
    pub experience_areas: Vec<ExperienceArea>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// Personal details shown in the hero, about and contact sections.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Personal {
    pub name: String,
    pub title: String,
    pub organization: String,
    pub description: String,
    pub location: String,
    pub phone: String,
    pub bio: String,
}

/// A spoken language and how well it is spoken.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Language {
    pub name: String,
    pub proficiency: String,
}

/// Proficiency classes, used to pick a badge color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Proficiency {
    Native,
    Excellent,
    Other,
}

impl Language {
    /// Classify the free-form proficiency string.
    pub fn proficiency_class(&self) -> Proficiency {
        match self.proficiency.as_str() {
            "Native" => Proficiency::Native,
            "Excellent" => Proficiency::Excellent,
            _ => Proficiency::Other,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ExperienceArea {
    pub title: String,
    pub description: String,
}

/// A single skill with a 0-100 level.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Skill {
    pub name: String,
    pub category: String,
    pub level: u8,
    #[serde(default)]
    pub details: String,
}

impl Skill {
    /// Level tier from 1 to 6, one step per 20 points.
    pub fn level_tier(level: u8) -> u8 {
        level / 20 + 1
    }
}

/// Skills sharing a category, in first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillGroup<'a> {
    pub category: &'a str,
    pub skills: Vec<&'a Skill>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Project {
    pub name: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Static path of a preview image.
    #[serde(default)]
    pub image: Option<String>,
    /// Repository identifier on the code host, e.g. `user/repo`.
    #[serde(default)]
    pub github: Option<String>,
}

impl Project {
    /// Link to the project's repository on `host`, if it has one.
    pub fn repository_url(&self, host: &str) -> Option<String> {
        self.github
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(|id| format!("https://{host}/{id}"))
    }

    /// Whether the project counts towards the hardware systems stat.
    pub fn is_hardware(&self) -> bool {
        self.category.contains("Hardware")
            || self.category == "PCB Engineering"
            || self.category.contains("Co-design")
    }
}

impl Portfolio {
    /// Parse a content document from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Group skills by category, keeping the order categories first appear in.
    pub fn skills_by_category(&self) -> Vec<SkillGroup<'_>> {
        let mut groups: Vec<SkillGroup<'_>> = Vec::new();
        for skill in &self.skills {
            match groups.iter_mut().find(|g| g.category == skill.category) {
                Some(group) => group.skills.push(skill),
                None => groups.push(SkillGroup {
                    category: &skill.category,
                    skills: vec![skill],
                }),
            }
        }
        groups
    }

    /// Rounded mean skill level, 0 when there are no skills.
    pub fn average_skill_level(&self) -> u8 {
        if self.skills.is_empty() {
            return 0;
        }
        let total: u32 = self.skills.iter().map(|s| u32::from(s.level)).sum();
        (total as f32 / self.skills.len() as f32).round() as u8
    }

    pub fn hardware_project_count(&self) -> usize {
        self.projects.iter().filter(|p| p.is_hardware()).count()
    }

    /// Short lowercase handle for the navigation prompt.
    pub fn handle(&self) -> String {
        self.personal
            .name
            .split_whitespace()
            .next()
            .unwrap_or("root")
            .to_lowercase()
    }
}
