//! Edge case tests for xorc-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, ScanError, Scanner, Token, TokenKind};
    use xorc_util::Position;

    fn scan_all(source: &str) -> Vec<Token<'_>> {
        tokenize(source).unwrap()
    }

    fn significant(source: &str) -> Vec<TokenKind> {
        scan_all(source)
            .into_iter()
            .filter(|t| !t.is_trivia())
            .map(|t| t.kind)
            .collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_whitespace_only() {
        let tokens = scan_all("\n\n");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[2].position, Position::new(2, 0, 2));
    }

    #[test]
    fn test_edge_single_char_ident() {
        assert_eq!(significant("x"), [TokenKind::Identifier, TokenKind::Eoi]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let source = format!("let {} = 1;", name);
        let tokens = scan_all(&source);
        assert_eq!(tokens[2].text, name);
    }

    #[test]
    fn test_edge_long_number() {
        let digits = "9".repeat(500);
        let tokens = scan_all(&digits);
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].len(), 500);
    }

    #[test]
    fn test_edge_keywords_adjacent_to_symbols() {
        assert_eq!(
            significant("return;fn(){}"),
            [
                TokenKind::Return,
                TokenKind::Semicolon,
                TokenKind::Fn,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::Eoi,
            ]
        );
    }

    #[test]
    fn test_edge_comment_then_eof_without_newline() {
        let tokens = scan_all("fn //");
        assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eoi));
        assert_eq!(tokens[2].text, "//");
    }

    #[test]
    fn test_edge_slash_star_inside_line_comment() {
        let tokens = scan_all("// /* not a block\nx");
        assert_eq!(tokens[0].text, "// /* not a block");
        assert_eq!(tokens[2].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_edge_line_comment_inside_block_comment() {
        let tokens = scan_all("/* // */x");
        assert_eq!(tokens[0].text, "/* // */");
        assert_eq!(tokens[1].text, "x");
    }

    #[test]
    fn test_edge_star_slash_outside_comment() {
        assert_eq!(
            significant("*/"),
            [TokenKind::Star, TokenKind::Slash, TokenKind::Eoi]
        );
    }

    #[test]
    fn test_edge_division_is_not_a_comment() {
        assert_eq!(
            significant("a / b"),
            [
                TokenKind::Identifier,
                TokenKind::Slash,
                TokenKind::Identifier,
                TokenKind::Eoi
            ]
        );
    }

    #[test]
    fn test_edge_decimal_then_method() {
        assert_eq!(
            significant("1.5.abs"),
            [
                TokenKind::Decimal,
                TokenKind::Dot,
                TokenKind::Identifier,
                TokenKind::Eoi
            ]
        );
    }

    #[test]
    fn test_edge_dot_then_digits() {
        assert_eq!(
            significant(".5"),
            [TokenKind::Dot, TokenKind::Number, TokenKind::Eoi]
        );
    }

    #[test]
    fn test_edge_negative_number_is_two_tokens() {
        assert_eq!(
            significant("-1"),
            [TokenKind::Minus, TokenKind::Number, TokenKind::Eoi]
        );
    }

    #[test]
    fn test_edge_double_colon_path() {
        assert_eq!(
            significant("a::b"),
            [
                TokenKind::Identifier,
                TokenKind::DoubleColon,
                TokenKind::Identifier,
                TokenKind::Eoi
            ]
        );
    }

    #[test]
    fn test_edge_tab_column_width() {
        let tokens = scan_all("\t\tx");
        assert_eq!(tokens[2].position, Position::new(0, 8, 2));
    }

    #[test]
    fn test_edge_multibyte_in_string() {
        let tokens = scan_all("\"日本\" x");
        assert_eq!(tokens[0].len(), 8);
        assert_eq!(tokens[2].position, Position::new(0, 5, 9));
    }

    #[test]
    fn test_edge_multibyte_in_comment() {
        let tokens = scan_all("// héllo\nx");
        assert_eq!(tokens[2].position, Position::new(1, 0, 10));
    }

    #[test]
    fn test_edge_non_ascii_outside_literal() {
        assert_eq!(
            tokenize("λ"),
            Err(ScanError::UnexpectedCharacter {
                ch: 'λ',
                position: Position::START
            })
        );
    }

    #[test]
    fn test_edge_nul_outside_literal() {
        assert!(matches!(
            tokenize("\0"),
            Err(ScanError::UnexpectedCharacter { ch: '\0', .. })
        ));
    }

    #[test]
    fn test_edge_error_position_on_later_line() {
        let err = tokenize("fn main() {\n\tlet x = `;\n}").unwrap_err();
        assert_eq!(err.position(), Position::new(1, 12, 21));
    }

    #[test]
    fn test_edge_byte_order_mark_is_not_a_token() {
        let err = tokenize("\u{FEFF}fn").unwrap_err();
        assert_eq!(
            err,
            ScanError::UnexpectedCharacter {
                ch: '\u{FEFF}',
                position: Position::START
            }
        );
    }

    #[test]
    fn test_edge_has_more_is_false_only_after_terminal() {
        let mut scanner = Scanner::new(" ");
        assert!(scanner.has_more());
        scanner.next_token().unwrap();
        assert!(scanner.has_more());
        scanner.next_token().unwrap();
        assert!(!scanner.has_more());
        assert!(scanner.next_token().is_err());
        assert!(!scanner.has_more());
    }

    #[test]
    fn test_edge_terminal_position_is_end_of_input() {
        let tokens = scan_all("ab\ncd");
        let last = tokens.last().copied();
        assert_eq!(last.map(|t| t.position), Some(Position::new(1, 2, 5)));
    }

    #[test]
    fn test_edge_literal_value_round_trip() {
        let tokens = scan_all(r#""tab\there" '\x41'"#);
        assert_eq!(tokens[0].literal_value().as_deref(), Some("tab\there"));
        assert_eq!(tokens[2].literal_value().as_deref(), Some("A"));
    }
}
