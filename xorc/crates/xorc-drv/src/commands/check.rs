//! Check command implementation.
//!
//! Scans one input completely and reports the token count.

use std::io::Write;
use std::path::PathBuf;

use tracing::debug;
use xorc_lex::tokenize;

use crate::commands::{read_source, scan_failure};
use crate::error::Result;

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Input file, or `-` for standard input.
    pub input: PathBuf,
}

/// Token counts of a successful scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckSummary {
    /// Every token, the end-of-input token included.
    pub total: usize,
    /// Tokens that are neither trivia nor the end-of-input token.
    pub significant: usize,
}

/// Execute the check command, writing the summary line to `out`.
pub fn run_check(args: &CheckArgs, out: &mut impl Write) -> Result<CheckSummary> {
    let file = read_source(&args.input)?;
    let tokens = tokenize(file.content()).map_err(|e| scan_failure(&file, e))?;

    let summary = CheckSummary {
        total: tokens.len(),
        significant: tokens
            .iter()
            .filter(|t| !t.is_trivia() && !t.is_terminal())
            .count(),
    };
    debug!(file = file.name(), ?summary, "check passed");

    writeln!(
        out,
        "ok: {} tokens ({} significant)",
        summary.total, summary.significant
    )?;
    Ok(summary)
}
