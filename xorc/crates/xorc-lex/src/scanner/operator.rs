//! Operator and punctuation scanning.
//!
//! Symbols are grouped into families by their first character. Each family
//! lists its spellings longest first, so the first spelling the remaining
//! input starts with is the longest match.

use crate::error::ScanResult;
use crate::token::TokenKind;
use crate::Scanner;

type Family = &'static [(&'static str, TokenKind)];

/// The symbols starting with `first`, longest spelling first.
///
/// Empty when `first` starts no symbol.
pub(crate) fn symbol_family(first: char) -> Family {
    use TokenKind::*;

    match first {
        '(' => &[("(", LParen)],
        ')' => &[(")", RParen)],
        '{' => &[("{", LBrace)],
        '}' => &[("}", RBrace)],
        '[' => &[("[", LBracket)],
        ']' => &[("]", RBracket)],
        ';' => &[(";", Semicolon)],
        ',' => &[(",", Comma)],
        '?' => &[("?", Question)],
        '@' => &[("@", At)],
        '#' => &[("#", Hash)],
        '~' => &[("~", Tilde)],
        ':' => &[("::", DoubleColon), (":", Colon)],
        '.' => &[("...", Ellipsis), ("..", DotDot), (".", Dot)],
        '=' => &[("==", Equal), ("=>", FatArrow), ("=", Assign)],
        '!' => &[("!=", NotEqual), ("!", Bang)],
        '<' => &[
            ("<<=", LeftShiftAssign),
            ("<<", LeftShift),
            ("<=", LessEqual),
            ("<", LAngle),
        ],
        '>' => &[
            (">>=", RightShiftAssign),
            (">>", RightShift),
            (">=", GreaterEqual),
            (">", RAngle),
        ],
        '&' => &[("&&", And), ("&=", AmpersandAssign), ("&", Ampersand)],
        '|' => &[("||", Or), ("|=", PipeAssign), ("|", Pipe)],
        '^' => &[("^=", CaretAssign), ("^", Caret)],
        '+' => &[("++", Increment), ("+=", PlusAssign), ("+", Plus)],
        '-' => &[
            ("--", Decrement),
            ("-=", MinusAssign),
            ("->", ReturnArrow),
            ("-", Minus),
        ],
        '*' => &[("*=", StarAssign), ("*", Star)],
        '/' => &[("/=", SlashAssign), ("/", Slash)],
        '%' => &[("%=", PercentAssign), ("%", Percent)],
        _ => &[],
    }
}

impl<'src> Scanner<'src> {
    /// Scans the longest symbol at the cursor, which sits on `first`.
    pub(crate) fn scan_symbol(&mut self, first: char) -> ScanResult<TokenKind> {
        let rest = self.cursor.rest();
        match symbol_family(first)
            .iter()
            .find(|(spelling, _)| rest.starts_with(*spelling))
        {
            Some(&(spelling, kind)) => {
                self.cursor.skip_bytes(spelling.len());
                Ok(kind)
            },
            None => Err(self.unexpected(first)),
        }
    }
}
