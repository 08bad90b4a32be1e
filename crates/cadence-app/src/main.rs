use cadence_app::cli::Cli;
use cadence_app::commands;
use cadence_app::logging::{apply_level, init_tracing};
use cadence_core::config::load_config;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let filter_handle = init_tracing();

    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    let level = if cli.verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    apply_level(&filter_handle, level);

    tracing::debug!(config = ?config, "Configuration loaded");

    let output = commands::run(&cli.command, &config)?;
    println!("{output}");

    Ok(())
}
