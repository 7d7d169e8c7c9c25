//! Scan errors.
//!
//! Every variant records the [`Position`] where the malformed input begins.
//! Messages carry no location; renderers combine [`ScanError::position`] with
//! the source themselves.

use thiserror::Error;
use xorc_util::Position;

use crate::escape::EscapeError;

/// Result alias for scanner operations.
pub type ScanResult<T> = Result<T, ScanError>;

/// A malformed-token condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// A character that starts no token.
    #[error("unexpected character {ch:?}")]
    UnexpectedCharacter {
        /// The offending character.
        ch: char,
        /// Where it is.
        position: Position,
    },

    /// `/*` without a matching `*/`.
    #[error("unterminated block comment")]
    UnterminatedComment {
        /// Position of the opening `/*`.
        position: Position,
    },

    /// String or character literal cut off by a newline or end of input.
    #[error("unterminated {} literal", literal_name(.delimiter))]
    UnterminatedLiteral {
        /// The opening quote.
        delimiter: char,
        /// Position of the opening quote.
        position: Position,
    },

    /// Unknown or malformed escape sequence.
    #[error("invalid escape in literal: {reason}")]
    InvalidEscape {
        /// What is wrong with the escape.
        #[source]
        reason: EscapeError,
        /// Position of the backslash.
        position: Position,
    },

    /// Character literal that is empty or holds more than one character.
    #[error("character literal must contain exactly one character")]
    InvalidCharLiteral {
        /// Position of the opening quote.
        position: Position,
    },

    /// `next_token` called after the end-of-input token was produced.
    #[error("scanner already produced the end-of-input token")]
    AlreadyFinished {
        /// End of the source.
        position: Position,
    },
}

fn literal_name(delimiter: &char) -> &'static str {
    if *delimiter == '\'' {
        "character"
    } else {
        "string"
    }
}

impl ScanError {
    /// Where the malformed input begins.
    pub fn position(&self) -> Position {
        match self {
            ScanError::UnexpectedCharacter { position, .. }
            | ScanError::UnterminatedComment { position }
            | ScanError::UnterminatedLiteral { position, .. }
            | ScanError::InvalidEscape { position, .. }
            | ScanError::InvalidCharLiteral { position }
            | ScanError::AlreadyFinished { position } => *position,
        }
    }

    /// A short suggestion for fixing the input, if there is an obvious one.
    pub fn help(&self) -> Option<String> {
        match self {
            ScanError::UnterminatedComment { .. } => {
                Some("add `*/` to close the comment".to_string())
            },
            ScanError::UnterminatedLiteral { delimiter, .. } => Some(format!(
                "close the literal with `{}` before the end of the line",
                delimiter
            )),
            ScanError::InvalidEscape { .. } => Some(
                "valid escapes are \\n \\t \\r \\0 \\\\ \\\" \\' \\xHH and \\u{...}".to_string(),
            ),
            ScanError::InvalidCharLiteral { .. } => {
                Some("use double quotes for text longer than one character".to_string())
            },
            ScanError::UnexpectedCharacter { .. } | ScanError::AlreadyFinished { .. } => None,
        }
    }
}
