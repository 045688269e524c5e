//! Configuration for matrixfolio.
//!
//! Settings live in `config.toml` inside the platform config directory.
//! Every field has a default, so a missing or partial file is fine.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use matrixfolio_core::AnimationSpeed;
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "config.toml";

/// Errors raised while loading or saving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no home directory to place configuration in")]
    NoConfigDir,
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid configuration in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub content: ContentConfig,
    pub boot: BootConfig,
    pub hero: HeroConfig,
    pub rain: RainConfig,
    pub ui: UiConfig,
}

/// Where portfolio content comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// File path or `http(s)` URL of the portfolio JSON.
    pub source: String,
    /// Host used for repository links.
    pub code_host: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            source: "data/portfolio.json".to_string(),
            code_host: "github.com".to_string(),
        }
    }
}

/// A boot log line and how long it stays after being typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BootMessage {
    pub text: String,
    pub hold_ms: u64,
}

impl BootMessage {
    fn new(text: &str, hold_ms: u64) -> Self {
        Self {
            text: text.to_string(),
            hold_ms,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootConfig {
    /// Minimum time the boot view stays up, even when content is ready.
    pub min_duration_ms: u64,
    pub char_interval_ms: u64,
    pub messages: Vec<BootMessage>,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            min_duration_ms: 4000,
            char_interval_ms: 50,
            messages: vec![
                BootMessage::new("INITIALIZING MATRIX PROTOCOL...", 500),
                BootMessage::new("LOADING NEURAL PATHWAYS...", 800),
                BootMessage::new("AUTHENTICATING USER CREDENTIALS...", 600),
                BootMessage::new("ESTABLISHING SECURE CONNECTION...", 700),
                BootMessage::new("ACCESSING PORTFOLIO DATABASE...", 900),
                BootMessage::new("MATRIX PROTOCOL ACTIVE.", 500),
                BootMessage::new("WELCOME TO THE REAL WORLD.", 800),
            ],
        }
    }
}

/// Timings of the hero name/title reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub start_delay_ms: u64,
    pub name_interval_ms: u64,
    pub title_pause_ms: u64,
    pub title_interval_ms: u64,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            start_delay_ms: 1000,
            name_interval_ms: 100,
            title_pause_ms: 500,
            title_interval_ms: 80,
        }
    }
}

/// Digital rain background settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RainConfig {
    pub enabled: bool,
    pub tick_ms: u64,
    /// Width of one glyph in terminal cells.
    pub glyph_width: u16,
    /// Height of one glyph in terminal cells.
    pub glyph_height: u16,
    /// Chance per tick that a column past the bottom restarts at the top.
    pub reset_chance: f32,
    /// Opacity of the overlay that fades previous frames.
    pub fade: f32,
    /// Lower bound of the per-glyph opacity.
    pub min_opacity: f32,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            tick_ms: 50,
            glyph_width: 2,
            glyph_height: 1,
            reset_chance: 0.025,
            fade: 0.05,
            min_opacity: 0.2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub cursor_blink_ms: u64,
    /// Visible fraction at which a section reveals itself.
    pub reveal_threshold: f32,
    pub nav_delay_ms: u64,
    pub skill_stagger_ms: u64,
    pub contact_delay_ms: u64,
    pub speed: AnimationSpeed,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            cursor_blink_ms: 500,
            reveal_threshold: 0.3,
            nav_delay_ms: 500,
            skill_stagger_ms: 200,
            contact_delay_ms: 500,
            speed: AnimationSpeed::Normal,
        }
    }
}

impl Config {
    /// Default config file location, e.g. `~/.config/matrixfolio/config.toml`.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        ProjectDirs::from("", "", "matrixfolio")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from the default location, falling back to defaults when absent.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let config = Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Typing interval of boot messages after applying the speed.
    pub fn boot_char_interval(&self) -> u64 {
        self.ui.speed.scale(self.boot.char_interval_ms)
    }

    /// Hero timings after applying the speed.
    pub fn hero_timings(&self) -> HeroConfig {
        let speed = self.ui.speed;
        HeroConfig {
            start_delay_ms: speed.scale(self.hero.start_delay_ms),
            name_interval_ms: speed.scale(self.hero.name_interval_ms),
            title_pause_ms: speed.scale(self.hero.title_pause_ms),
            title_interval_ms: speed.scale(self.hero.title_interval_ms),
        }
    }

    /// Rain tick interval after applying the speed.
    pub fn rain_tick(&self) -> u64 {
        self.ui.speed.scale(self.rain.tick_ms).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.boot.min_duration_ms, 4000);
        assert_eq!(config.boot.messages.len(), 7);
        assert_eq!(config.rain.tick_ms, 50);
        assert_eq!(config.rain.reset_chance, 0.025);
        assert_eq!(config.ui.reveal_threshold, 0.3);
        assert_eq!(config.content.code_host, "github.com");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_toml(
            r#"
            [rain]
            glyph_width = 1

            [ui]
            speed = "fast"
            "#,
        )
        .unwrap();
        assert_eq!(config.rain.glyph_width, 1);
        assert_eq!(config.rain.tick_ms, 50);
        assert_eq!(config.ui.speed, AnimationSpeed::Fast);
        assert_eq!(config.rain_tick(), 25);
        assert_eq!(config.hero_timings().name_interval_ms, 50);
        assert_eq!(config.hero, HeroConfig::default());
    }

    #[test]
    fn test_custom_boot_messages() {
        let config = Config::from_toml(
            r#"
            [boot]
            messages = [{ text = "HELLO", hold_ms = 10 }]
            "#,
        )
        .unwrap();
        assert_eq!(config.boot.messages, vec![BootMessage::new("HELLO", 10)]);
        assert_eq!(config.boot.char_interval_ms, 50);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(Config::from_toml("[rain]\ntick_ms = \"soon\"").is_err());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("matrixfolio-config-does-not-exist.toml");
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_toml_output_parses_back() {
        let config = Config::default();
        let text = config.to_toml().unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), config);
    }
}
