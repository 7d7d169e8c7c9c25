//! Character cursor for traversing source code.
//!
//! The cursor never modifies the source: it keeps a borrowed `&str` and a
//! [`Position`] that only ever moves forward. Every lookahead goes through
//! [`Cursor::peek`], which returns `None` past the end instead of indexing.

use xorc_util::Position;

/// A forward-only cursor over source text.
///
/// # Example
///
/// ```
/// use xorc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("fn\tx");
/// assert_eq!(cursor.current(), Some('f'));
/// cursor.bump();
/// cursor.bump();
/// cursor.bump();
/// assert_eq!(cursor.position().column, 6);
/// assert_eq!(cursor.rest(), "x");
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'src> {
    /// The source text being traversed.
    source: &'src str,

    /// Line, column and byte offset of the next unconsumed character.
    position: Position,
}

impl<'src> Cursor<'src> {
    /// Creates a cursor at the start of `source`.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            position: Position::START,
        }
    }

    /// The full source text.
    #[inline]
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Position of the next unconsumed character.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Byte offset of the next unconsumed character.
    #[inline]
    pub fn offset(&self) -> usize {
        self.position.offset
    }

    /// Returns true once every character has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position.offset >= self.source.len()
    }

    /// The unconsumed part of the source.
    #[inline]
    pub fn rest(&self) -> &'src str {
        &self.source[self.position.offset..]
    }

    /// Returns the character `n` characters ahead (`0` is the current one).
    #[inline]
    pub fn peek(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    /// Returns the current character.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Returns true if the unconsumed text starts with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Consumes and returns the current character.
    #[inline]
    pub fn bump(&mut self) -> Option<char> {
        let c = self.current()?;
        self.position = self.position.advance(c);
        Some(c)
    }

    /// Consumes `expected` if it is the current character.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.current() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consumes `expected` if the unconsumed text starts with it.
    pub fn eat_str(&mut self, expected: &str) -> bool {
        if !self.starts_with(expected) {
            return false;
        }
        for _ in expected.chars() {
            self.bump();
        }
        true
    }

    /// Consumes characters while `predicate` holds. Returns how many.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> usize {
        let mut count = 0;
        while let Some(c) = self.current() {
            if !predicate(c) {
                break;
            }
            self.bump();
            count += 1;
        }
        count
    }

    /// Consumes whole characters until at least `len` more bytes are behind
    /// the cursor (or the text ends).
    pub fn skip_bytes(&mut self, len: usize) {
        let target = self.position.offset + len;
        while self.position.offset < target && self.bump().is_some() {}
    }

    /// The source between byte offset `start` and the cursor.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'src str {
        &self.source[start..self.position.offset]
    }
}
