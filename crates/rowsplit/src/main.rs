//! Main entry point for rowsplit.

use anyhow::Context;
use clap::Parser;
use rowsplit::cli::Cli;
use rowsplit::App;
use rowsplit_common::logging::{init_logging, LoggingConfig};
use rowsplit_config::ConfigLoader;
use tracing::{debug, error};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = ConfigLoader::load(cli.config.as_deref()).context("loading configuration")?;

    let mut logging = LoggingConfig::from(&config.logging);
    match cli.verbose {
        0 => {}
        1 => logging.level = "debug".to_string(),
        _ => logging.level = "trace".to_string(),
    }
    init_logging(&logging).context("initializing logging")?;
    debug!(?config, "configuration loaded");

    let app = App::new(config);
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = app.run(&cli.command, &mut stdout) {
        error!("{}", e);
        return Err(e.into());
    }

    Ok(())
}
