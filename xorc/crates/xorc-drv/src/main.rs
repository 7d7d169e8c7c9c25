//! xorc - command-line entry point.
//!
//! Parses arguments, loads configuration, installs logging and dispatches to
//! the selected command. Scan errors print their diagnostic unchanged; every
//! other failure prints its context chain.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use xorc_drv::{execute_command, init_logging, load_config, Cli, DrvError};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        },
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref()).context("failed to load configuration")?;
    init_logging(cli.verbose || config.verbose, cli.no_color)?;
    execute_command(cli.command, &config)?;
    Ok(())
}

fn report(err: &anyhow::Error) {
    match err.downcast_ref::<DrvError>() {
        Some(DrvError::Scan { rendered, .. }) => eprint!("{}", rendered),
        _ => eprintln!("error: {:#}", err),
    }
}
