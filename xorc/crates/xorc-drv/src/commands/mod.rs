//! Command modules for the xorc driver.
//!
//! Each subcommand lives in its own file. The helpers here read the input
//! and turn scan errors into rendered diagnostics.

pub mod check;
pub mod tokens;

pub use check::{run_check, CheckArgs, CheckSummary};
pub use tokens::{run_tokens, TokensArgs};

use std::io::Read;
use std::path::Path;

use tracing::debug;
use xorc_lex::ScanError;
use xorc_util::{DiagnosticBuilder, SourceFile};

use crate::error::{DrvError, Result};

/// Input path meaning standard input.
pub const STDIN_PATH: &str = "-";

/// UTF-8 byte order mark written by some editors.
const BOM: char = '\u{FEFF}';

/// Drops a leading byte order mark.
fn strip_bom(mut content: String) -> String {
    if content.starts_with(BOM) {
        content.drain(..BOM.len_utf8());
    }
    content
}

/// Reads the input named on the command line into a [`SourceFile`].
///
/// A leading byte order mark is not part of the source and is dropped, so
/// offsets count from the first character after it.
pub fn read_source(input: &Path) -> Result<SourceFile> {
    if input.as_os_str() == STDIN_PATH {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|source| DrvError::Read {
                path: input.to_path_buf(),
                source,
            })?;
        debug!(bytes = content.len(), "read source from stdin");
        return Ok(SourceFile::new("<stdin>", strip_bom(content)));
    }

    let content = std::fs::read_to_string(input).map_err(|source| DrvError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    debug!(path = %input.display(), bytes = content.len(), "read source");
    Ok(SourceFile::new(input.display().to_string(), strip_bom(content)))
}

/// Renders `error` against `file` and wraps it for `main` to print.
pub fn scan_failure(file: &SourceFile, error: ScanError) -> DrvError {
    let mut builder = DiagnosticBuilder::error(error.to_string()).position(error.position());
    if let ScanError::UnexpectedCharacter { .. } = &error {
        builder = builder.label("not part of any token");
    }
    if let Some(help) = error.help() {
        builder = builder.help(help);
    }
    DrvError::Scan {
        rendered: builder.build().render(file),
        source: error,
    }
}
