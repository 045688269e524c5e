//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;
use matrixfolio_config::Config;

#[derive(Debug, Parser)]
#[command(name = "matrixfolio")]
#[command(version, about = "A matrix-themed personal portfolio for the terminal", long_about = None)]
pub struct Cli {
    /// Portfolio JSON to show, as a file path or http(s) URL
    #[arg(short, long, value_name = "PATH|URL")]
    pub data: Option<String>,

    /// Configuration file to use instead of the default location
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable the digital rain background
    #[arg(long)]
    pub no_rain: bool,

    /// Log debug output
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    /// Override configuration values with the flags that were given.
    pub fn apply(&self, config: &mut Config) {
        if let Some(data) = &self.data {
            config.content.source = data.clone();
        }
        if self.no_rain {
            config.rain.enabled = false;
        }
    }
}
