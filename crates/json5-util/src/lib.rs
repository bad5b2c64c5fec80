//! Shared foundation types for the `json5` codec workspace.
//!
//! This crate has no JSON5-specific logic; it exists so `json5-lex` and
//! `json5` can share [`Span`] and the error types without a dependency
//! cycle.

mod error;
mod span;

pub use error::{FormatError, ParseError, ParseErrorKind};
pub use span::Span;
