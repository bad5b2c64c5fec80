//! Identifier and reserved-word lexing.

use crate::lexer::Lexer;
use crate::token::Token;

/// `true` for characters allowed to start an identifier: ASCII letters,
/// `_`, `$`.
pub(crate) fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

/// `true` for characters allowed after the first in an identifier.
pub(crate) fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

impl<'a> Lexer<'a> {
    /// Lexes an identifier, mapping the three reserved spellings to
    /// their keyword tokens.
    ///
    /// `Infinity` and `NaN` are deliberately left as plain identifiers
    /// here; they are only rejected once the parser tries to use one
    /// where a value is required, since an identifier is always a
    /// legal object key.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        match self.cursor.slice_from(self.token_start) {
            "true" => Token::Bool(true),
            "false" => Token::Bool(false),
            "null" => Token::Null,
            text => Token::Ident(text.to_string()),
        }
    }
}
