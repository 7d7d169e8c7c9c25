//! xorc-drv - Command-line driver for the Xor scanner.
//!
//! The `xorc` binary reads a source file (or standard input), scans it with
//! [`xorc_lex`] and either dumps the tokens or reports whether the file scans
//! cleanly. Malformed input produces a rendered diagnostic and exit status 1.

pub mod commands;
pub mod config;
pub mod error;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub use config::{Config, OutputFormat};
pub use error::{DrvError, Result};

use commands::{run_check, run_tokens, CheckArgs, TokensArgs};

/// xorc - Xor language toolchain
#[derive(Parser, Debug)]
#[command(name = "xorc")]
#[command(author = "Xor Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scanner front end for the Xor language", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "XORC_VERBOSE")]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "XORC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "XORC_NO_COLOR")]
    pub no_color: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the token stream of a file
    ///
    /// One line per token: position, byte offset, kind and text.
    Tokens(TokensCommand),

    /// Scan a file and report whether it is well formed
    Check(CheckCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Args, Debug)]
pub struct TokensCommand {
    /// Source file, or `-` for standard input
    pub input: PathBuf,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Hide whitespace and comment tokens
    #[arg(long)]
    pub no_trivia: bool,
}

/// Arguments for the check subcommand.
#[derive(Args, Debug)]
pub struct CheckCommand {
    /// Source file, or `-` for standard input
    pub input: PathBuf,
}

/// Install the tracing subscriber on stderr.
///
/// `RUST_LOG` is honoured unless `verbose` forces the `debug` level.
pub fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DrvError::Logging(e.to_string()))
}

/// Load configuration from file or use defaults.
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command, writing its output to stdout.
pub fn execute_command(command: Commands, config: &Config) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Tokens(args) => {
            let args = TokensArgs {
                input: args.input,
                format: args.format.unwrap_or(config.tokens.format),
                trivia: config.tokens.trivia && !args.no_trivia,
            };
            debug!(?args, "running tokens");
            run_tokens(&args, &mut out)
        },
        Commands::Check(args) => {
            let args = CheckArgs { input: args.input };
            debug!(?args, "running check");
            run_check(&args, &mut out).map(|_| ())
        },
    }
}
