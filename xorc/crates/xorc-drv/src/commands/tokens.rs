//! Tokens command implementation.
//!
//! Dumps the token stream of one input, as aligned text or as JSON.

use std::io::Write;
use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;
use xorc_lex::{tokenize, Token, TokenKind};

use crate::commands::{read_source, scan_failure};
use crate::config::OutputFormat;
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// Input file, or `-` for standard input.
    pub input: PathBuf,
    /// Output format.
    pub format: OutputFormat,
    /// Print whitespace and comment tokens.
    pub trivia: bool,
}

/// One token in the JSON dump.
#[derive(Debug, Serialize, PartialEq)]
pub struct TokenRecord {
    /// Kind name, e.g. `RETURN_ARROW`.
    pub kind: &'static str,
    /// Category name, e.g. `symbol`.
    pub category: &'static str,
    /// The token text as it appears in the source.
    pub text: String,
    /// Decoded value of string and character literals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// One-based line.
    pub line: u32,
    /// One-based column.
    pub column: u32,
    /// Zero-based byte offset.
    pub offset: usize,
}

impl From<&Token<'_>> for TokenRecord {
    fn from(token: &Token<'_>) -> Self {
        Self {
            kind: token.kind.name(),
            category: token.kind.category().name(),
            text: token.text.to_string(),
            value: token.literal_value().map(|v| v.into_owned()),
            line: token.position.display_line(),
            column: token.position.display_column(),
            offset: token.position.offset,
        }
    }
}

/// Formats one token as a line of the text dump: `LINE:COL  OFFSET  KIND  "text"`.
pub fn format_token(token: &Token<'_>) -> String {
    format!(
        "{:<9} {:>6}  {:<18} {:?}",
        token.position.to_string(),
        token.position.offset,
        token.kind.name(),
        token.text
    )
}

/// Execute the tokens command, writing the dump to `out`.
///
/// Nothing is written when the input fails to scan.
pub fn run_tokens(args: &TokensArgs, out: &mut impl Write) -> Result<()> {
    let file = read_source(&args.input)?;
    let tokens = tokenize(file.content()).map_err(|e| scan_failure(&file, e))?;
    debug!(file = file.name(), count = tokens.len(), "scanned tokens");

    let shown = tokens
        .iter()
        .filter(|t| args.trivia || !t.is_trivia() || t.kind == TokenKind::Eoi);

    match args.format {
        OutputFormat::Text => {
            for token in shown {
                writeln!(out, "{}", format_token(token))?;
            }
        },
        OutputFormat::Json => {
            let records: Vec<TokenRecord> = shown.map(TokenRecord::from).collect();
            serde_json::to_writer_pretty(&mut *out, &records)?;
            writeln!(out)?;
        },
    }
    Ok(())
}
