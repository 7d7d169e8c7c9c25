//! Character classification used for dispatch.

/// The sub-scanner responsible for a token's first character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    /// `\n`, or `\r` that may start `\r\n`.
    Newline,
    /// ` `
    Space,
    /// `\t`
    Tab,
    /// `/`, which starts either a comment or an operator.
    Slash,
    /// First character of some punctuation or operator.
    Symbol,
    /// `[A-Za-z_]`
    IdentStart,
    /// `[0-9]`
    Digit,
    /// `"` or `'`
    Quote,
    /// Starts no token.
    Other,
}

/// Classifies the first character of a token.
pub fn classify(c: char) -> CharClass {
    match c {
        '\n' | '\r' => CharClass::Newline,
        ' ' => CharClass::Space,
        '\t' => CharClass::Tab,
        '/' => CharClass::Slash,
        '(' | ')' | '{' | '}' | '[' | ']' | ';' | ',' | ':' | '.' | '?' | '@' | '#' | '='
        | '!' | '<' | '>' | '&' | '|' | '^' | '~' | '+' | '-' | '*' | '%' => CharClass::Symbol,
        c if is_ident_start(c) => CharClass::IdentStart,
        '0'..='9' => CharClass::Digit,
        '"' | '\'' => CharClass::Quote,
        _ => CharClass::Other,
    }
}

/// Returns true if `c` can start an identifier.
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns true if `c` can continue an identifier.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
