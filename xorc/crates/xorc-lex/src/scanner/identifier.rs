//! Identifier and keyword scanning.

use crate::chars::is_ident_continue;
use crate::token::{keyword_from_ident, TokenKind};
use crate::Scanner;

impl<'src> Scanner<'src> {
    /// Scans `[A-Za-z_][A-Za-z0-9_]*` and reclassifies reserved words.
    pub(crate) fn scan_identifier(&mut self) -> TokenKind {
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice_from(self.token_start.offset);
        keyword_from_ident(text).unwrap_or(TokenKind::Identifier)
    }
}
