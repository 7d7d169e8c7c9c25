//! xorc-lex - Lexical Scanner for the Xor Programming Language
//!
//! This crate turns Xor source text into a flat sequence of positioned tokens.
//! The scan is lossless: whitespace and comments come out as trivia tokens,
//! so the concatenated token text is exactly the input.
//!
//! # Example Usage
//!
//! ```
//! use xorc_lex::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("fn main() -> int {}");
//!
//! // Pull tokens until the end-of-input token
//! while scanner.has_more() {
//!     let token = scanner.next_token().unwrap();
//!     if token.kind == TokenKind::ReturnArrow {
//!         assert_eq!(token.position.column, 10);
//!     }
//! }
//!
//! // Or drain a whole file at once, skipping trivia
//! let significant = xorc_lex::tokenize("fn main() -> int {}")
//!     .unwrap()
//!     .into_iter()
//!     .filter(|t| !t.is_trivia())
//!     .count();
//! assert_eq!(significant, 9);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, categories and the reserved-word table
//! - [`scanner`] - The scanner and its per-family sub-scanners
//! - [`cursor`] - Forward-only cursor with line/column tracking
//! - [`escape`] - Escape sequences in string and character literals
//! - [`error`] - Scan errors
//!
//! # Token Categories
//!
//! - **Trivia**: newline, space, tab, comments (`//` and non-nesting `/* */`)
//! - **Symbols**: `( ) { } [ ] ; , : :: . .. ... ? @ # -> =>` and the
//!   arithmetic, bitwise, comparison and assignment operators
//! - **Keywords**: `fn return let mut const if else while for in loop break
//!   continue struct enum impl import pub extern as sizeof unsafe unsafe_cast
//!   unsafe_ptr`
//! - **Primitive types**: `i8`..`i64`, `u8`..`u64`, `f32`, `f64`, `int`,
//!   `float`, `bool`, `char`, `void`, `uvoid`
//! - **Literals**: identifiers, integers, decimals, strings, characters,
//!   `true`/`false`, `null`

#![warn(missing_docs)]

pub mod chars;
pub mod cursor;
pub mod error;
pub mod escape;
pub mod scanner;
pub mod token;

#[cfg(test)]
mod edge_cases;

pub use cursor::Cursor;
pub use error::{ScanError, ScanResult};
pub use escape::{unescape, EscapeError};
pub use scanner::{tokenize, Scanner};
pub use token::{keyword_from_ident, Token, TokenCategory, TokenKind};
