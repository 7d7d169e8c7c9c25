//! Source files with a line index.
//!
//! [`SourceFile`] keeps the text of one input together with the byte offset of
//! every line start, so diagnostics can recover the line a [`Position`] points
//! into without rescanning the whole file.

use std::sync::Arc;

use crate::Position;

/// A named source text.
///
/// # Examples
///
/// ```
/// use xorc_util::SourceFile;
///
/// let file = SourceFile::new("main.xor", "fn main() {}\nfn other() {}");
/// assert_eq!(file.name(), "main.xor");
/// assert_eq!(file.line_count(), 2);
/// assert_eq!(file.line_text(1), Some("fn other() {}"));
/// ```
#[derive(Clone, Debug)]
pub struct SourceFile {
    name: String,
    content: Arc<str>,
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Creates a source file and indexes its line starts.
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn line_starts(content: &str) -> Arc<[usize]> {
        std::iter::once(0)
            .chain(
                content
                    .bytes()
                    .enumerate()
                    .filter(|&(_, b)| b == b'\n')
                    .map(|(i, _)| i + 1),
            )
            .collect()
    }

    /// The display name (usually a path, `<stdin>` for standard input).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The full text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of lines; an empty file has one (empty) line.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Text of the zero-based line `line`, without its trailing newline.
    ///
    /// Returns `None` past the last line.
    pub fn line_text(&self, line: usize) -> Option<&str> {
        let start = *self.line_starts.get(line)?;
        let end = self
            .line_starts
            .get(line + 1)
            .map(|next| next - 1)
            .unwrap_or(self.content.len());
        let text = &self.content[start..end];
        Some(text.strip_suffix('\r').unwrap_or(text))
    }

    /// Text of the line a position points into.
    pub fn line_of(&self, position: Position) -> Option<&str> {
        self.line_text(position.line as usize)
    }
}
