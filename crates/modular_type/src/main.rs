//! `modular-type`: generate a fluid modular type scale and apply it to stylesheets.

use crate::cli::Cli;
use anyhow::Result;
use clap::Parser as _;
use std::io::stdout;

mod cli;
mod commands;

/// Main entry point for the modular-type CLI tool.
///
/// # Errors
/// Returns an error if configuration, generation or processing fails.
fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = commands::resolve_config(cli.config.as_deref(), cli.overrides.into_options())?;
    let mut out = stdout().lock();
    commands::run(cli.command, config, &mut out)
}
