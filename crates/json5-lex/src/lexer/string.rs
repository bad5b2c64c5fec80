//! String literal lexing: escapes, line continuations, surrogate pairs.

use json5_util::{ParseError, ParseErrorKind, Span};

use crate::lexer::Lexer;
use crate::token::Token;

impl<'a> Lexer<'a> {
    /// Lexes a string literal opened by `quote` (`"` or `'`).
    ///
    /// The closing delimiter must match the opener. A raw newline ends
    /// the string with an error unless it was escaped (line
    /// continuation).
    pub(crate) fn lex_string(&mut self, quote: char) -> Result<Token, ParseError> {
        let start = self.token_start;
        let line = self.token_start_line;
        let column = self.token_start_column;
        self.cursor.advance();

        let mut content = String::new();

        loop {
            if self.cursor.is_at_end() {
                return Err(self.unterminated_string(start, line, column));
            }

            let c = self.cursor.current_char();

            if c == quote {
                self.cursor.advance();
                return Ok(Token::Str(content));
            }

            if c == '\n' {
                return Err(self.unterminated_string(start, line, column));
            }

            if c == '\\' {
                self.cursor.advance();
                self.parse_escape(&mut content, start, line, column)?;
            } else {
                content.push(c);
                self.cursor.advance();
            }
        }
    }

    fn unterminated_string(&self, start: usize, line: u32, column: u32) -> ParseError {
        ParseError::new(
            ParseErrorKind::Unterminated,
            "unterminated string literal",
            Span::new(start, self.cursor.position(), line, column),
        )
    }

    /// Decodes one escape sequence (the backslash has already been
    /// consumed) and appends its result to `content`.
    fn parse_escape(
        &mut self,
        content: &mut String,
        str_start: usize,
        str_line: u32,
        str_column: u32,
    ) -> Result<(), ParseError> {
        if self.cursor.is_at_end() {
            return Err(self.unterminated_string(str_start, str_line, str_column));
        }

        let c = self.cursor.current_char();
        match c {
            '"' => {
                content.push('"');
                self.cursor.advance();
            }
            '\'' => {
                content.push('\'');
                self.cursor.advance();
            }
            '\\' => {
                content.push('\\');
                self.cursor.advance();
            }
            '/' => {
                content.push('/');
                self.cursor.advance();
            }
            'b' => {
                content.push('\u{0008}');
                self.cursor.advance();
            }
            'f' => {
                content.push('\u{000C}');
                self.cursor.advance();
            }
            'n' => {
                content.push('\n');
                self.cursor.advance();
            }
            'r' => {
                content.push('\r');
                self.cursor.advance();
            }
            't' => {
                content.push('\t');
                self.cursor.advance();
            }
            '0' => {
                content.push('\0');
                self.cursor.advance();
            }
            'x' => {
                self.cursor.advance();
                let value = self.read_hex_digits(2)?;
                content.push(char::from_u32(value).unwrap_or('\u{FFFD}'));
            }
            'u' => {
                self.cursor.advance();
                self.parse_unicode_escape(content)?;
            }
            '\r' => {
                self.cursor.advance();
                if self.cursor.current_char() == '\n' {
                    self.cursor.advance();
                }
            }
            '\n' => {
                self.cursor.advance();
            }
            other => {
                // Permissive JSON5 behaviour: an unrecognised escape
                // decodes to the literal character.
                content.push(other);
                self.cursor.advance();
            }
        }
        Ok(())
    }

    /// Decodes a `\uHHHH` escape, combining a following `\uHHHH` low
    /// surrogate into one supplementary code point when present.
    ///
    /// A surrogate with no partner cannot be represented in a
    /// well-formed Rust `String`, so it is replaced with U+FFFD.
    fn parse_unicode_escape(&mut self, content: &mut String) -> Result<(), ParseError> {
        let value = self.read_hex_digits(4)?;

        if (0xD800..=0xDBFF).contains(&value) {
            if self.cursor.current_char() == '\\'
                && self.cursor.peek_char(1) == 'u'
                && self
                    .peek_hex4(2)
                    .is_some_and(|low| (0xDC00..=0xDFFF).contains(&low))
            {
                let low = self.peek_hex4(2).expect("checked above");
                self.cursor.advance_n(6); // '\', 'u', four hex digits
                let combined = 0x10000 + ((value - 0xD800) << 10) + (low - 0xDC00);
                content.push(char::from_u32(combined).unwrap_or('\u{FFFD}'));
            } else {
                content.push('\u{FFFD}');
            }
        } else if (0xDC00..=0xDFFF).contains(&value) {
            content.push('\u{FFFD}');
        } else {
            content.push(char::from_u32(value).unwrap_or('\u{FFFD}'));
        }
        Ok(())
    }

    /// Reads exactly `n` hex digits at the cursor, advancing past them.
    fn read_hex_digits(&mut self, n: usize) -> Result<u32, ParseError> {
        let start = self.cursor.position();
        let line = self.cursor.line();
        let column = self.cursor.column();
        let mut text = String::with_capacity(n);
        for _ in 0..n {
            let c = self.cursor.current_char();
            if !c.is_ascii_hexdigit() {
                return Err(ParseError::new(
                    ParseErrorKind::BadEscape,
                    format!("expected {n} hex digits in escape"),
                    Span::new(start, self.cursor.position(), line, column),
                ));
            }
            text.push(c);
            self.cursor.advance();
        }
        Ok(u32::from_str_radix(&text, 16).expect("validated hex digits"))
    }

    /// Peeks 4 hex digits starting `offset` bytes ahead, without
    /// consuming them. Returns `None` if any of the 4 characters is not
    /// a hex digit.
    fn peek_hex4(&self, offset: usize) -> Option<u32> {
        let mut text = String::with_capacity(4);
        for i in 0..4 {
            let c = self.cursor.peek_char(offset + i);
            if !c.is_ascii_hexdigit() {
                return None;
            }
            text.push(c);
        }
        u32::from_str_radix(&text, 16).ok()
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::Lexer;
    use crate::token::Token;

    fn lex_one(source: &str) -> Token {
        Lexer::new(source).next_token().unwrap()
    }

    #[test]
    fn test_double_quoted_string() {
        assert_eq!(lex_one(r#""hello""#), Token::Str("hello".into()));
    }

    #[test]
    fn test_single_quoted_string() {
        assert_eq!(lex_one("'hello'"), Token::Str("hello".into()));
    }

    #[test]
    fn test_mismatched_delimiters_is_unterminated() {
        assert!(Lexer::new(r#"'hello""#).next_token().is_err());
    }

    #[test]
    fn test_standard_escapes() {
        assert_eq!(
            lex_one(r#""a\nb\tc\\d\"e""#),
            Token::Str("a\nb\tc\\d\"e".into())
        );
    }

    #[test]
    fn test_unknown_escape_is_literal() {
        assert_eq!(lex_one(r#""\q""#), Token::Str("q".into()));
    }

    #[test]
    fn test_hex_escape() {
        assert_eq!(lex_one(r#""\x41""#), Token::Str("A".into()));
    }

    #[test]
    fn test_unicode_escape() {
        assert_eq!(lex_one("\"\\u0041\""), Token::Str("A".into()));
    }

    #[test]
    fn test_surrogate_pair() {
        assert_eq!(
            lex_one("\"\\uD83D\\uDE03\""),
            Token::Str("\u{1F603}".into())
        );
    }

    #[test]
    fn test_lone_high_surrogate_becomes_replacement_char() {
        assert_eq!(lex_one(r#""\uD83Dx""#), Token::Str("\u{FFFD}x".into()));
    }

    #[test]
    fn test_line_continuation_dropped() {
        assert_eq!(lex_one("\"a\\\nb\""), Token::Str("ab".into()));
    }

    #[test]
    fn test_raw_newline_is_error() {
        assert!(Lexer::new("\"a\nb\"").next_token().is_err());
    }

    #[test]
    fn test_unterminated_string_is_error() {
        assert!(Lexer::new("\"abc").next_token().is_err());
    }
}
