//! Whitespace scanning.
//!
//! Each newline, space and tab is its own token.

use crate::error::ScanResult;
use crate::token::TokenKind;
use crate::Scanner;

impl<'src> Scanner<'src> {
    /// Scans `\n`, or `\r\n` as a single newline.
    ///
    /// A `\r` not followed by `\n` is not valid input.
    pub(crate) fn scan_newline(&mut self) -> ScanResult<TokenKind> {
        if self.cursor.eat_str("\r\n") || self.cursor.eat('\n') {
            Ok(TokenKind::Newline)
        } else {
            Err(self.unexpected('\r'))
        }
    }

    pub(crate) fn scan_space(&mut self) -> TokenKind {
        self.cursor.bump();
        TokenKind::Space
    }

    pub(crate) fn scan_tab(&mut self) -> TokenKind {
        self.cursor.bump();
        TokenKind::Tab
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ScanError;
    use crate::token::TokenKind;
    use crate::tokenize;
    use xorc_util::Position;

    #[test]
    fn test_one_token_per_character() {
        let tokens = tokenize("  \t\n").unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            [
                TokenKind::Space,
                TokenKind::Space,
                TokenKind::Tab,
                TokenKind::Newline,
                TokenKind::Eoi
            ]
        );
    }

    #[test]
    fn test_positions() {
        let tokens = tokenize(" \t\n ").unwrap();
        assert_eq!(tokens[1].position, Position::new(0, 1, 1));
        assert_eq!(tokens[2].position, Position::new(0, 5, 2));
        assert_eq!(tokens[3].position, Position::new(1, 0, 3));
        assert_eq!(tokens[4].position, Position::new(1, 1, 4));
    }

    #[test]
    fn test_crlf_is_one_newline() {
        let tokens = tokenize("a\r\nb").unwrap();
        assert_eq!(tokens[1].kind, TokenKind::Newline);
        assert_eq!(tokens[1].text, "\r\n");
        assert_eq!(tokens[2].position, Position::new(1, 0, 3));
    }

    #[test]
    fn test_lone_carriage_return() {
        assert_eq!(
            tokenize("a\rb"),
            Err(ScanError::UnexpectedCharacter {
                ch: '\r',
                position: Position::new(0, 1, 1)
            })
        );
    }
}
