//! Scanner module.
//!
//! The scanner is split by token family:
//! - `core` - Scanner struct, lifecycle and dispatch
//! - `trivia` - newlines, spaces and tabs
//! - `comment` - line and block comments
//! - `operator` - punctuation and operators
//! - `identifier` - identifiers, keywords and primitive type names
//! - `number` - integer and decimal literals
//! - `literal` - string and character literals

mod comment;
mod core;
mod identifier;
mod literal;
mod number;
mod operator;
mod trivia;

pub use self::core::{tokenize, Scanner};
#[cfg(test)]
pub(crate) use self::operator::symbol_family;
