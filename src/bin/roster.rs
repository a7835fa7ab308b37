//! Roster CLI Binary
//!
//! Command-line interface for the student roster.

use anyhow::Context;
use clap::Parser;
use roster::logging::init_logging;
use roster::tooling::cli::{Cli, CliContext};
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CliContext::load_config(&cli.workspace, cli.config.as_deref())
        .context("Failed to load configuration")?;
    let logging = config.logging.clone().with_overrides(&cli.log_overrides());
    init_logging(Some(&logging), Some(cli.workspace.as_path()))
        .context("Failed to initialize logging")?;

    let mut context = CliContext::with_config(cli.workspace.clone(), config)
        .context("Failed to open roster")?;

    let output = context.execute(&cli.command_or_default())?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}
