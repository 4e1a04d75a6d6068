mod app;
mod cli;
mod tui;

use clap::Parser;
use glyphfall_config::Config;

use crate::app::App;
use crate::cli::Cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let config = cli.apply(config);
    let config_path = cli.config.clone().or_else(Config::default_path);

    if let Some(output) = cli.one_shot(&config, config_path.as_deref())? {
        print!("{output}");
        return Ok(());
    }

    let mouse = !cli.no_mouse;
    let terminal = tui::init(mouse)?;
    let result = App::new(config, config_path, cli.seed).run(terminal);
    tui::restore(mouse);
    result
}
