//! Tracing setup. Logs go to a file because the terminal belongs to the UI.

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use directories::ProjectDirs;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "matrixfolio.log";

/// Location of the log file, inside the platform data directory.
pub fn log_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "matrixfolio").map(|dirs| dirs.data_local_dir().join(LOG_FILE))
}

/// Install the global subscriber. Returns the log file in use, or `None`
/// when there is nowhere to write logs.
pub fn init(verbose: bool) -> color_eyre::Result<Option<PathBuf>> {
    let Some(path) = log_path() else {
        return Ok(None);
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = File::create(&path)?;

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose, rust_log.as_deref()))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(Some(path))
}

/// `RUST_LOG` directives when given, otherwise `info`, or `debug` when verbose.
fn env_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    match rust_log {
        Some(directives) if !directives.trim().is_empty() => EnvFilter::new(directives),
        _ => {
            let level = if verbose {
                LevelFilter::DEBUG
            } else {
                LevelFilter::INFO
            };
            EnvFilter::builder()
                .with_default_directive(level.into())
                .parse_lossy("")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_levels() {
        assert_eq!(env_filter(false, None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(env_filter(true, None).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(env_filter(true, Some("  ")).max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_rust_log_overrides_both_ways() {
        assert_eq!(env_filter(false, Some("warn")).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(env_filter(true, Some("error")).max_level_hint(), Some(LevelFilter::ERROR));
        assert_eq!(env_filter(false, Some("trace")).max_level_hint(), Some(LevelFilter::TRACE));
    }
}
