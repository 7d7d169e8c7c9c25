//! Comment scanning.
//!
//! This module handles line and block comments. Both become
//! [`TokenKind::Comment`] tokens with their delimiters included.

use crate::error::{ScanError, ScanResult};
use crate::token::TokenKind;
use crate::Scanner;

impl<'src> Scanner<'src> {
    /// Scans a token starting with `/`: a comment, `/=` or `/`.
    pub(crate) fn scan_slash(&mut self) -> ScanResult<TokenKind> {
        if self.cursor.starts_with("//") {
            self.scan_line_comment();
            Ok(TokenKind::Comment)
        } else if self.cursor.starts_with("/*") {
            self.scan_block_comment()
        } else {
            self.scan_symbol('/')
        }
    }

    /// Scans from `//` up to, not including, the end of the line.
    fn scan_line_comment(&mut self) {
        self.cursor.eat_str("//");
        while let Some(c) = self.cursor.current() {
            if c == '\n' || self.cursor.starts_with("\r\n") {
                break;
            }
            self.cursor.bump();
        }
    }

    /// Scans from `/*` through the first `*/`. Block comments do not nest.
    fn scan_block_comment(&mut self) -> ScanResult<TokenKind> {
        self.cursor.eat_str("/*");
        while !self.cursor.eat_str("*/") {
            if self.cursor.bump().is_none() {
                return Err(ScanError::UnterminatedComment {
                    position: self.token_start,
                });
            }
        }
        Ok(TokenKind::Comment)
    }
}
