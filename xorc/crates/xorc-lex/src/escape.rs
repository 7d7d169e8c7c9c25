//! Escape sequences in string and character literals.
//!
//! The grammar, after a backslash:
//!
//! | Escape      | Value                         |
//! |-------------|-------------------------------|
//! | `n t r 0`   | newline, tab, return, NUL     |
//! | `\ " '`     | the character itself          |
//! | `xHH`       | byte `0xHH` (exactly two hex digits) |
//! | `u{H..H}`   | Unicode scalar value, 1-6 hex digits |
//!
//! The scanner only validates escapes; [`unescape`] decodes them.

use std::borrow::Cow;

use thiserror::Error;

/// Longest run of hex digits accepted inside `\u{...}`.
const MAX_UNICODE_DIGITS: usize = 6;

/// Why an escape sequence was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EscapeError {
    /// Backslash at the very end of the text.
    #[error("incomplete escape sequence")]
    Incomplete,

    /// Backslash followed by a character with no escape meaning.
    #[error("unknown escape sequence `\\{0}`")]
    Unknown(char),

    /// `\x` not followed by two hex digits.
    #[error("`\\x` must be followed by exactly two hex digits")]
    MalformedHex,

    /// `\u` not followed by `{`, 1-6 hex digits and `}`.
    #[error("`\\u` must be followed by `{{` one to six hex digits `}}`")]
    MalformedUnicode,

    /// `\u{...}` naming a surrogate or a value above `10FFFF`.
    #[error("`{0:X}` is not a Unicode scalar value")]
    InvalidCodepoint(u32),
}

/// Decodes one escape sequence.
///
/// `rest` starts right after the backslash. Returns the decoded character and
/// the number of bytes of `rest` the escape occupies.
///
/// ```
/// use xorc_lex::escape::decode_escape;
///
/// assert_eq!(decode_escape("n rest"), Ok(('\n', 1)));
/// assert_eq!(decode_escape("x41"), Ok(('A', 3)));
/// assert_eq!(decode_escape("u{1F600}"), Ok(('😀', 8)));
/// ```
pub fn decode_escape(rest: &str) -> Result<(char, usize), EscapeError> {
    let c = rest.chars().next().ok_or(EscapeError::Incomplete)?;

    let simple = match c {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        '0' => Some('\0'),
        '\\' | '"' | '\'' => Some(c),
        _ => None,
    };
    if let Some(decoded) = simple {
        return Ok((decoded, 1));
    }

    match c {
        'x' => {
            let hex = rest
                .get(1..3)
                .filter(|h| h.bytes().all(|b| b.is_ascii_hexdigit()))
                .ok_or(EscapeError::MalformedHex)?;
            let byte = u8::from_str_radix(hex, 16).map_err(|_| EscapeError::MalformedHex)?;
            Ok((char::from(byte), 3))
        },
        'u' => {
            let bytes = rest.as_bytes();
            if bytes.get(1) != Some(&b'{') {
                return Err(EscapeError::MalformedUnicode);
            }
            let digits = bytes[2..]
                .iter()
                .take(MAX_UNICODE_DIGITS + 1)
                .take_while(|b| b.is_ascii_hexdigit())
                .count();
            if digits == 0 || digits > MAX_UNICODE_DIGITS || bytes.get(2 + digits) != Some(&b'}') {
                return Err(EscapeError::MalformedUnicode);
            }
            let value = u32::from_str_radix(&rest[2..2 + digits], 16)
                .map_err(|_| EscapeError::MalformedUnicode)?;
            let decoded = char::from_u32(value).ok_or(EscapeError::InvalidCodepoint(value))?;
            Ok((decoded, 3 + digits))
        },
        other => Err(EscapeError::Unknown(other)),
    }
}

/// Resolves every escape in a literal body (the text between the delimiters).
///
/// Borrows when there is nothing to decode.
///
/// ```
/// use xorc_lex::unescape;
///
/// assert_eq!(unescape("plain").unwrap(), "plain");
/// assert_eq!(unescape(r"tab\there").unwrap(), "tab\there");
/// assert!(unescape(r"\q").is_err());
/// ```
pub fn unescape(body: &str) -> Result<Cow<'_, str>, EscapeError> {
    if !body.contains('\\') {
        return Ok(Cow::Borrowed(body));
    }

    let mut out = String::with_capacity(body.len());
    let mut rest = body;
    while let Some(index) = rest.find('\\') {
        out.push_str(&rest[..index]);
        let (decoded, len) = decode_escape(&rest[index + 1..])?;
        out.push(decoded);
        rest = &rest[index + 1 + len..];
    }
    out.push_str(rest);

    Ok(Cow::Owned(out))
}
