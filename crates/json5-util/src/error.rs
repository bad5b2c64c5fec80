//! Core error types shared by the lexer, parser, and formatter.

use std::fmt;

use thiserror::Error;

use crate::Span;

/// Category of a parse failure.
///
/// This mirrors the error categories a caller would want to match on
/// programmatically; [`ParseError::message`] carries the human-readable
/// detail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A string, block comment, array, or object was never closed.
    Unterminated,
    /// A character does not start any valid token at this position.
    UnexpectedChar,
    /// A required token (`:`, `,`, a closing bracket/brace) is missing.
    MissingToken,
    /// A number, identifier, or keyword literal is malformed.
    InvalidLiteral,
    /// A string escape sequence is malformed.
    BadEscape,
    /// Non-whitespace, non-comment text follows the top-level value.
    TrailingData,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ParseErrorKind::Unterminated => "unterminated",
            ParseErrorKind::UnexpectedChar => "unexpected character",
            ParseErrorKind::MissingToken => "missing token",
            ParseErrorKind::InvalidLiteral => "invalid literal",
            ParseErrorKind::BadEscape => "bad escape",
            ParseErrorKind::TrailingData => "trailing data",
        };
        f.write_str(s)
    }
}

/// A single localised parse failure.
///
/// The parser halts at the first error; there is no recovery, so a call
/// to `parse` produces at most one of these.
///
/// # Examples
///
/// ```
/// use json5_util::{ParseError, ParseErrorKind, Span};
///
/// let err = ParseError::new(
///     ParseErrorKind::UnexpectedChar,
///     "unexpected character '#'",
///     Span::new(3, 4, 1, 4),
/// );
/// assert_eq!(err.line, 1);
/// assert_eq!(err.column, 4);
/// ```
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{message} (line {line}, column {column})")]
pub struct ParseError {
    /// The error category.
    pub kind: ParseErrorKind,
    /// A human-readable description. Exact wording is not part of the
    /// contract; only the category and position are.
    pub message: String,
    /// 1-based line where the offending token starts.
    pub line: u32,
    /// 1-based column where the offending token starts.
    pub column: u32,
}

impl ParseError {
    /// Builds a `ParseError` located at `span`.
    pub fn new(kind: ParseErrorKind, message: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            message: message.into(),
            line: span.line,
            column: span.column,
        }
    }

    /// Reconstructs a zero-width [`Span`] at the error's location.
    pub fn span(&self) -> Span {
        Span::point(self.line, self.column)
    }
}

/// A failure while serialising a value tree to text.
///
/// Unlike [`ParseError`], format errors carry no source position — there
/// is no source text to point into.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    /// A `Float` value was `+Inf`, `-Inf`, or `NaN`; JSON has no literal
    /// for these and emitting one would not round-trip.
    #[error("cannot format a non-finite float (Inf or NaN)")]
    NonFiniteNumber,
    /// An object key supplied by the host was not a string.
    #[error("object key must be a string")]
    NonStringKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::new(
            ParseErrorKind::Unterminated,
            "unterminated string literal",
            Span::new(0, 1, 2, 3),
        );
        assert_eq!(
            err.to_string(),
            "unterminated string literal (line 2, column 3)"
        );
    }

    #[test]
    fn test_parse_error_kind_display() {
        assert_eq!(ParseErrorKind::BadEscape.to_string(), "bad escape");
    }

    #[test]
    fn test_format_error_display() {
        assert_eq!(
            FormatError::NonFiniteNumber.to_string(),
            "cannot format a non-finite float (Inf or NaN)"
        );
    }
}
