//! String and character literal scanning.
//!
//! Literal text is kept verbatim in the token; escapes are validated here and
//! decoded later by [`crate::unescape`].

use crate::error::{ScanError, ScanResult};
use crate::escape::decode_escape;
use crate::token::TokenKind;
use crate::Scanner;

impl<'src> Scanner<'src> {
    /// Scans a literal opened by `delimiter` (`"` or `'`).
    pub(crate) fn scan_literal(&mut self, delimiter: char) -> ScanResult<TokenKind> {
        self.cursor.bump();

        let mut units = 0usize;
        loop {
            match self.cursor.current() {
                None | Some('\n') => return Err(self.unterminated(delimiter)),
                Some(c) if c == delimiter => {
                    self.cursor.bump();
                    break;
                },
                Some('\\') => self.scan_escape(delimiter)?,
                Some(_) => {
                    self.cursor.bump();
                },
            }
            units += 1;
        }

        if delimiter == '"' {
            Ok(TokenKind::String)
        } else if units == 1 {
            Ok(TokenKind::Character)
        } else {
            Err(ScanError::InvalidCharLiteral {
                position: self.token_start,
            })
        }
    }

    /// Validates and skips one escape sequence, backslash included.
    fn scan_escape(&mut self, delimiter: char) -> ScanResult<()> {
        let backslash = self.cursor.position();
        if matches!(self.cursor.peek(1), None | Some('\n')) {
            return Err(self.unterminated(delimiter));
        }

        let after = &self.cursor.rest()[1..];
        let (_, len) = decode_escape(after).map_err(|reason| ScanError::InvalidEscape {
            reason,
            position: backslash,
        })?;
        self.cursor.skip_bytes(1 + len);
        Ok(())
    }

    fn unterminated(&self, delimiter: char) -> ScanError {
        ScanError::UnterminatedLiteral {
            delimiter,
            position: self.token_start,
        }
    }
}
