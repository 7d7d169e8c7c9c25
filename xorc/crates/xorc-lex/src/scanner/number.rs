//! Number literal scanning.
//!
//! Numbers are plain decimal digit runs. A `.` followed by a digit turns the
//! literal into a decimal; a `.` followed by anything else is left alone.

use crate::token::TokenKind;
use crate::Scanner;

impl<'src> Scanner<'src> {
    /// Scans `[0-9]+` or `[0-9]+.[0-9]+`.
    pub(crate) fn scan_number(&mut self) -> TokenKind {
        self.cursor.eat_while(|c| c.is_ascii_digit());

        let has_fraction = self.cursor.current() == Some('.')
            && self.cursor.peek(1).is_some_and(|c| c.is_ascii_digit());
        if has_fraction {
            self.cursor.bump();
            self.cursor.eat_while(|c| c.is_ascii_digit());
            TokenKind::Decimal
        } else {
            TokenKind::Number
        }
    }
}
