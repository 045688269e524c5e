use clap::Parser;
use matrixfolio_config::Config;

mod app;
mod cli;
mod content;
mod logging;
mod page;
mod views;

use app::App;
use cli::Cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let log_path = logging::init(cli.verbose)?;

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply(&mut config);

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        source = %config.content.source,
        rain = config.rain.enabled,
        log = ?log_path,
        "starting matrixfolio"
    );

    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}
