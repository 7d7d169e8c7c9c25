//! Diagnostic module - Error reporting.
//!
//! Diagnostics are built with [`DiagnosticBuilder`] and rendered against the
//! [`SourceFile`] they refer to:
//!
//! ```
//! use xorc_util::{DiagnosticBuilder, Position, SourceFile};
//!
//! let file = SourceFile::new("a.xor", "let s = \"open");
//! let text = DiagnosticBuilder::error("unterminated string literal")
//!     .position(Position::new(0, 8, 8))
//!     .help("close the literal with '\"'")
//!     .build()
//!     .render(&file);
//!
//! assert!(text.starts_with("error: unterminated string literal"));
//! assert!(text.contains("= help: close the literal"));
//! ```

mod builder;

pub use builder::{DiagnosticBuilder, SourceSnippet};

use std::fmt;

use crate::{Position, SourceFile};

/// Diagnostic severity level
///
/// Scanning reports nothing below an error.
///
/// ```
/// use xorc_util::Level;
///
/// assert_eq!(Level::Error.to_string(), "error");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    /// Input is malformed; the pipeline stops.
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => f.write_str("error"),
        }
    }
}

/// A diagnostic message with severity and location.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Severity.
    pub level: Level,
    /// Main message.
    pub message: String,
    /// Where the offending input starts.
    pub position: Position,
    /// Label printed under the caret.
    pub label: Option<String>,
    /// Help suggestions.
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Creates a diagnostic without a label or helps.
    pub fn new(level: Level, message: impl Into<String>, position: Position) -> Self {
        Self {
            level,
            message: message.into(),
            position,
            label: None,
            helps: Vec::new(),
        }
    }

    /// Shorthand for an error diagnostic.
    pub fn error(message: impl Into<String>, position: Position) -> Self {
        Self::new(Level::Error, message, position)
    }

    /// Builds the snippet for this diagnostic's line, if the line exists.
    pub fn snippet(&self, file: &SourceFile) -> Option<SourceSnippet> {
        let line = file.line_of(self.position)?;
        let column = self.position.display_column() as usize;
        let mut snippet = SourceSnippet::point(line, self.position.display_line() as usize, column);
        if let Some(label) = &self.label {
            snippet = snippet.with_label(label.clone());
        }
        Some(snippet)
    }

    /// Renders the diagnostic in the usual compiler layout:
    ///
    /// ```text
    /// error: unexpected character '$'
    ///  --> main.xor:2:5
    ///     |
    ///   2 |     $
    ///     |     ^
    /// ```
    pub fn render(&self, file: &SourceFile) -> String {
        let snippet = self.snippet(file);
        let gutter = snippet
            .as_ref()
            .map(SourceSnippet::gutter_width)
            .unwrap_or(3);

        let mut out = format!("{}: {}\n", self.level, self.message);
        out.push_str(&format!(
            "{:>width$} {}:{}\n",
            "-->",
            file.name(),
            self.position,
            width = gutter + 1
        ));
        if let Some(snippet) = snippet {
            out.push_str(&format!("{:>width$} |\n", "", width = gutter));
            out.push_str(&snippet.format());
            out.push('\n');
        }
        for help in &self.helps {
            out.push_str(&format!("{:>width$} = help: {}\n", "", help, width = gutter));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} at {}", self.level, self.message, self.position)
    }
}
