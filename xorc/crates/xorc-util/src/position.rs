//! Source positions.
//!
//! A [`Position`] marks a single point in a source text. All three coordinates
//! are zero-based; the `Display` impl renders the one-based `line:column` form
//! people expect in error messages.

use std::fmt;

/// Number of display columns a tab character advances the column counter.
pub const TAB_WIDTH: u32 = 4;

/// A point in the source text.
///
/// # Examples
///
/// ```
/// use xorc_util::Position;
///
/// let pos = Position::new(2, 4, 17);
/// assert_eq!(pos.to_string(), "3:5");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Number of newline characters before this point.
    pub line: u32,
    /// Display columns since the last newline (a tab counts [`TAB_WIDTH`]).
    pub column: u32,
    /// Byte offset from the start of the source.
    pub offset: usize,
}

impl Position {
    /// The start of every source text.
    pub const START: Position = Position {
        line: 0,
        column: 0,
        offset: 0,
    };

    /// Creates a position from its raw coordinates.
    #[inline]
    pub const fn new(line: u32, column: u32, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// Returns the position reached after consuming `c` from this one.
    ///
    /// A newline moves to column 0 of the next line, a tab advances the
    /// column by [`TAB_WIDTH`], anything else advances it by one.
    ///
    /// ```
    /// use xorc_util::Position;
    ///
    /// let pos = Position::START.advance('\t').advance('x');
    /// assert_eq!(pos, Position::new(0, 5, 2));
    ///
    /// let pos = pos.advance('\n');
    /// assert_eq!(pos, Position::new(1, 0, 3));
    /// ```
    #[inline]
    pub fn advance(self, c: char) -> Self {
        let offset = self.offset + c.len_utf8();
        match c {
            '\n' => Self::new(self.line + 1, 0, offset),
            '\t' => Self::new(self.line, self.column + TAB_WIDTH, offset),
            _ => Self::new(self.line, self.column + 1, offset),
        }
    }

    /// One-based line number, for display.
    #[inline]
    pub const fn display_line(&self) -> u32 {
        self.line + 1
    }

    /// One-based column number, for display.
    #[inline]
    pub const fn display_column(&self) -> u32 {
        self.column + 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.display_line(), self.display_column())
    }
}
