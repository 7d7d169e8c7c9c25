//! Fluent construction of diagnostics and source snippet formatting.

use super::{Diagnostic, Level};
use crate::{Position, TAB_WIDTH};

/// A source line with a highlighted column range.
///
/// Lines are printed with tabs expanded to [`TAB_WIDTH`] spaces, so the caret
/// lines up with the display columns a [`Position`] counts.
///
/// ```
/// use xorc_util::SourceSnippet;
///
/// let snippet = SourceSnippet::point("\tx = $", 3, 9).with_label("here");
/// assert_eq!(snippet.format(), "  3 |     x = $\n    |         ^ here");
/// ```
#[derive(Clone, Debug)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: usize,
    /// Optional label to display under the highlighted range
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Creates a snippet highlighting `start_column..end_column`.
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
            label: None,
        }
    }

    /// Creates a snippet pointing at a single column.
    pub fn point(line: impl Into<String>, line_number: usize, column: usize) -> Self {
        Self::new(line, line_number, column, column)
    }

    /// Sets the label printed after the carets.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Width of the line-number gutter.
    pub fn gutter_width(&self) -> usize {
        self.line_number.to_string().len().max(3)
    }

    /// Formats the line and a caret line underneath it.
    pub fn format(&self) -> String {
        let width = self.gutter_width();
        let tab = " ".repeat(TAB_WIDTH as usize);
        let line = self.line.replace('\t', &tab);

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);

        let mut result = format!("{:>width$} | {}\n", self.line_number, line, width = width);
        result.push_str(&format!("{:>width$} | ", "", width = width));
        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));

        if let Some(label) = &self.label {
            result.push(' ');
            result.push_str(label);
        }

        result
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// ```
/// use xorc_util::{DiagnosticBuilder, Level, Position};
///
/// let diag = DiagnosticBuilder::error("unexpected character")
///     .position(Position::new(0, 3, 3))
///     .label("not part of any token")
///     .help("remove it")
///     .build();
///
/// assert_eq!(diag.level, Level::Error);
/// assert_eq!(diag.helps.len(), 1);
/// ```
#[must_use]
pub struct DiagnosticBuilder {
    diagnostic: Diagnostic,
}

impl DiagnosticBuilder {
    /// Starts a diagnostic at [`Position::START`].
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            diagnostic: Diagnostic::new(level, message, Position::START),
        }
    }

    /// Starts an error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Sets the position.
    pub fn position(mut self, position: Position) -> Self {
        self.diagnostic.position = position;
        self
    }

    /// Sets the caret label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.diagnostic.label = Some(label.into());
        self
    }

    /// Adds a help message.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.diagnostic.helps.push(help.into());
        self
    }

    /// Finishes the diagnostic.
    pub fn build(self) -> Diagnostic {
        self.diagnostic
    }
}
