//! Hand-rolled lexer for JSON5 source text.
//!
//! This crate has no knowledge of the parser's grammar; it only turns
//! UTF-8 text into a stream of [`Token`]s, one at a time, with
//! one-based line/column tracking for error reporting.

pub mod cursor;
mod lexer;
pub mod token;

pub use lexer::Lexer;
pub use token::Token;
