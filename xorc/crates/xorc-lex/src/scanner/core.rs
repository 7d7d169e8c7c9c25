//! Core scanner implementation.
//!
//! This module contains the Scanner struct, its lifecycle and the dispatch
//! from a token's first character to the sub-scanner that finishes it.

use std::iter::FusedIterator;

use tracing::{debug, trace};
use xorc_util::Position;

use crate::chars::{classify, CharClass};
use crate::cursor::Cursor;
use crate::error::{ScanError, ScanResult};
use crate::token::{Token, TokenKind};

/// Where the scanner is in its lifecycle.
#[derive(Clone, Debug, PartialEq, Eq)]
enum State {
    /// The end-of-input token has not been produced yet.
    Scanning,
    /// A scan error stopped the scanner before the end-of-input token.
    Failed(ScanError),
    /// The end-of-input token has been produced.
    Finished,
}

/// Scanner for the Xor language.
///
/// Turns source text into tokens, one per [`Scanner::next_token`] call.
/// Whitespace and comments are tokens too, so concatenating the text of every
/// token reproduces the input exactly.
///
/// # Example
///
/// ```
/// use xorc_lex::{Scanner, TokenKind};
///
/// let mut scanner = Scanner::new("x >>= 1");
/// let mut kinds = Vec::new();
/// while scanner.has_more() {
///     kinds.push(scanner.next_token().unwrap().kind);
/// }
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Identifier,
///         TokenKind::Space,
///         TokenKind::RightShiftAssign,
///         TokenKind::Space,
///         TokenKind::Number,
///         TokenKind::Eoi,
///     ]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Scanner<'src> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'src>,

    /// Position of the first character of the token being scanned.
    pub(crate) token_start: Position,

    state: State,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner positioned at the start of `source`.
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: Position::START,
            state: State::Scanning,
        }
    }

    /// Returns true until the end-of-input token has been produced.
    ///
    /// Still true when the cursor sits at the end of the text but the
    /// end-of-input token has not been handed out yet, and after a scan
    /// error, which never produces it.
    #[inline]
    pub fn has_more(&self) -> bool {
        !matches!(self.state, State::Finished)
    }

    /// The error that stopped the scanner, if any.
    pub fn failure(&self) -> Option<&ScanError> {
        match &self.state {
            State::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Position of the next unconsumed character.
    #[inline]
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    /// The source text being scanned.
    #[inline]
    pub fn source(&self) -> &'src str {
        self.cursor.source()
    }

    /// Scans the next token.
    ///
    /// # Errors
    ///
    /// Returns a [`ScanError`] for malformed input, or
    /// [`ScanError::AlreadyFinished`] when called after the end-of-input
    /// token. Once an error is returned, every later call returns the same
    /// error. The cursor position is unspecified after an error.
    pub fn next_token(&mut self) -> ScanResult<Token<'src>> {
        match &self.state {
            State::Scanning => {},
            State::Failed(error) => return Err(error.clone()),
            State::Finished => {
                return Err(ScanError::AlreadyFinished {
                    position: self.cursor.position(),
                })
            },
        }

        self.token_start = self.cursor.position();
        match self.scan() {
            Ok(token) => {
                trace!(
                    kind = token.kind.name(),
                    line = token.position.line,
                    column = token.position.column,
                    offset = token.position.offset,
                    "token"
                );
                Ok(token)
            },
            Err(error) => {
                debug!(
                    line = error.position().line,
                    column = error.position().column,
                    "scan error: {}",
                    error
                );
                self.state = State::Failed(error.clone());
                Err(error)
            },
        }
    }

    fn scan(&mut self) -> ScanResult<Token<'src>> {
        let Some(c) = self.cursor.current() else {
            self.state = State::Finished;
            return Ok(Token::new(TokenKind::Eoi, "", self.token_start));
        };

        let kind = match classify(c) {
            CharClass::Newline => self.scan_newline()?,
            CharClass::Space => self.scan_space(),
            CharClass::Tab => self.scan_tab(),
            CharClass::Slash => self.scan_slash()?,
            CharClass::Symbol => self.scan_symbol(c)?,
            CharClass::IdentStart => self.scan_identifier(),
            CharClass::Digit => self.scan_number(),
            CharClass::Quote => self.scan_literal(c)?,
            CharClass::Other => return Err(self.unexpected(c)),
        };

        let text = self.cursor.slice_from(self.token_start.offset);
        Ok(Token::new(kind, text, self.token_start))
    }

    /// Error for a character that starts no token, at the token start.
    pub(crate) fn unexpected(&self, ch: char) -> ScanError {
        ScanError::UnexpectedCharacter {
            ch,
            position: self.token_start,
        }
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = ScanResult<Token<'src>>;

    /// Yields every token, the end-of-input token included, then `None`.
    ///
    /// Stops after the first error.
    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            State::Scanning => Some(self.next_token()),
            State::Failed(_) | State::Finished => None,
        }
    }
}

impl FusedIterator for Scanner<'_> {}

/// Scans all of `source`, the end-of-input token included.
///
/// ```
/// use xorc_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("3.14").unwrap();
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].kind, TokenKind::Decimal);
/// assert!(tokens[1].is_terminal());
/// ```
///
/// # Errors
///
/// Returns the first [`ScanError`] encountered.
pub fn tokenize(source: &str) -> ScanResult<Vec<Token<'_>>> {
    Scanner::new(source).collect()
}
