//! xorc-util - Shared foundation types for the Xor toolchain.
//!
//! This crate holds the small set of types that every phase of the toolchain
//! agrees on:
//!
//! - [`Position`] - a zero-based `(line, column, offset)` source location
//! - [`SourceFile`] - a named source text with a precomputed line index
//! - [`diagnostic`] - error reporting with source snippets
//!
//! # Example
//!
//! ```
//! use xorc_util::{DiagnosticBuilder, Position, SourceFile};
//!
//! let file = SourceFile::new("main.xor", "fn main() {\n    $\n}");
//! let position = Position::new(1, 4, 16);
//!
//! let rendered = DiagnosticBuilder::error("unexpected character '$'")
//!     .position(position)
//!     .build()
//!     .render(&file);
//!
//! assert!(rendered.contains("--> main.xor:2:5"));
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod position;
pub mod source;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, Level, SourceSnippet};
pub use position::{Position, TAB_WIDTH};
pub use source::SourceFile;
