//! Whitespace and comment skipping.

use json5_util::{ParseError, ParseErrorKind, Span};

use crate::lexer::Lexer;

impl<'a> Lexer<'a> {
    /// Skips ASCII whitespace and comments preceding the next token.
    ///
    /// Block comments do not nest; an unterminated one is an error.
    pub(crate) fn skip_whitespace_and_comments(&mut self) -> Result<(), ParseError> {
        loop {
            if self.cursor.is_at_end() {
                return Ok(());
            }

            match self.cursor.current_char() {
                ' ' | '\t' | '\r' | '\n' | '\u{000B}' | '\u{000C}' => {
                    self.cursor.advance();
                }
                '/' => match self.cursor.peek_char(1) {
                    '/' => self.skip_line_comment(),
                    '*' => self.skip_block_comment()?,
                    _ => return Ok(()),
                },
                _ => return Ok(()),
            }
        }
    }

    fn skip_line_comment(&mut self) {
        self.cursor.advance();
        self.cursor.advance();
        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }
    }

    fn skip_block_comment(&mut self) -> Result<(), ParseError> {
        let start = self.cursor.position();
        let line = self.cursor.line();
        let column = self.cursor.column();
        self.cursor.advance();
        self.cursor.advance();

        loop {
            if self.cursor.is_at_end() {
                return Err(ParseError::new(
                    ParseErrorKind::Unterminated,
                    "unterminated block comment",
                    Span::new(start, self.cursor.position(), line, column),
                ));
            }
            if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                self.cursor.advance();
                self.cursor.advance();
                return Ok(());
            }
            self.cursor.advance();
        }
    }
}
