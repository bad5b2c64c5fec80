//! Numeric literal lexing: decimal, hexadecimal, sign, exponent.

use json5_util::{ParseError, ParseErrorKind, Span};

use crate::lexer::Lexer;
use crate::token::Token;

impl<'a> Lexer<'a> {
    /// Lexes a numeric literal.
    ///
    /// An optional leading `+`/`-` is followed by either a `0x`/`0X` hex
    /// literal or a decimal literal with optional fraction and
    /// exponent. The literal is a `Float` if it contains `.`, `e`, or
    /// `E`; otherwise an `Int` (promoted to `Float` if it overflows
    /// 64 bits).
    pub(crate) fn lex_number(&mut self) -> Result<Token, ParseError> {
        let start = self.token_start;
        let negative = match self.cursor.current_char() {
            '-' => {
                self.cursor.advance();
                true
            }
            '+' => {
                self.cursor.advance();
                false
            }
            _ => false,
        };

        if self.cursor.current_char() == '0' && matches!(self.cursor.peek_char(1), 'x' | 'X') {
            self.cursor.advance();
            self.cursor.advance();
            return self.lex_hex(negative);
        }

        self.lex_decimal(start, negative)
    }

    fn lex_hex(&mut self, negative: bool) -> Result<Token, ParseError> {
        let digits_start = self.cursor.position();
        let line = self.cursor.line();
        let column = self.cursor.column();

        while self.cursor.current_char().is_ascii_hexdigit() {
            self.cursor.advance();
        }

        if self.cursor.position() == digits_start {
            return Err(ParseError::new(
                ParseErrorKind::InvalidLiteral,
                "hexadecimal literal has no digits",
                Span::new(digits_start, self.cursor.position(), line, column),
            ));
        }

        let digits = self.cursor.slice_from(digits_start);
        Ok(match u64::from_str_radix(digits, 16) {
            Ok(v) if v <= i64::MAX as u64 => {
                let v = v as i64;
                Token::Int(if negative { -v } else { v })
            }
            _ => {
                let magnitude = digits
                    .chars()
                    .fold(0f64, |acc, c| acc * 16.0 + c.to_digit(16).unwrap() as f64);
                Token::Float(if negative { -magnitude } else { magnitude })
            }
        })
    }

    fn lex_decimal(&mut self, start: usize, negative: bool) -> Result<Token, ParseError> {
        let mut has_digits = false;
        let mut is_float = false;

        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
            has_digits = true;
        }

        if self.cursor.current_char() == '.' {
            is_float = true;
            self.cursor.advance();
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
                has_digits = true;
            }
        }

        if !has_digits {
            return Err(ParseError::new(
                ParseErrorKind::InvalidLiteral,
                "numeric literal has no digits",
                Span::new(
                    start,
                    self.cursor.position(),
                    self.token_start_line,
                    self.token_start_column,
                ),
            ));
        }

        if matches!(self.cursor.current_char(), 'e' | 'E') {
            is_float = true;
            self.cursor.advance();
            if matches!(self.cursor.current_char(), '+' | '-') {
                self.cursor.advance();
            }
            let exp_digits_start = self.cursor.position();
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }
            if self.cursor.position() == exp_digits_start {
                return Err(ParseError::new(
                    ParseErrorKind::InvalidLiteral,
                    "exponent has no digits",
                    Span::new(
                        exp_digits_start,
                        self.cursor.position(),
                        self.token_start_line,
                        self.token_start_column,
                    ),
                ));
            }
        }

        let text = self.cursor.slice_from(start);
        if is_float {
            let value: f64 = text.parse().map_err(|_| {
                ParseError::new(
                    ParseErrorKind::InvalidLiteral,
                    format!("invalid float literal '{text}'"),
                    Span::new(
                        start,
                        self.cursor.position(),
                        self.token_start_line,
                        self.token_start_column,
                    ),
                )
            })?;
            Ok(Token::Float(value))
        } else {
            match text.parse::<i64>() {
                Ok(v) => Ok(Token::Int(v)),
                Err(_) => {
                    // Overflows i64: promote to Float per the
                    // overflow-to-Float policy (see DESIGN.md).
                    let value: f64 = text.parse().map_err(|_| {
                        ParseError::new(
                            ParseErrorKind::InvalidLiteral,
                            format!("invalid integer literal '{text}'"),
                            Span::new(
                                start,
                                self.cursor.position(),
                                self.token_start_line,
                                self.token_start_column,
                            ),
                        )
                    })?;
                    Ok(Token::Float(value))
                }
            }
        }
    }
}
