//! Core lexer: token dispatch and cursor ownership.

use json5_util::{ParseError, ParseErrorKind, Span};

use crate::cursor::Cursor;
use crate::lexer::identifier::is_ident_start;
use crate::token::Token;

/// Converts JSON5 source text into a stream of [`Token`]s.
///
/// There is no separate tokenisation pass: the parser calls
/// [`next_token`](Lexer::next_token) once per token, with one token of
/// lookahead.
///
/// # Examples
///
/// ```
/// use json5_lex::Lexer;
/// use json5_lex::Token;
///
/// let mut lexer = Lexer::new("{ \"a\": 1 }");
/// assert_eq!(lexer.next_token().unwrap(), Token::LBrace);
/// assert_eq!(lexer.next_token().unwrap(), Token::Str("a".into()));
/// ```
pub struct Lexer<'a> {
    pub(crate) cursor: Cursor<'a>,
    pub(crate) token_start: usize,
    pub(crate) token_start_line: u32,
    pub(crate) token_start_column: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Returns the next token, or the first lexical error encountered.
    ///
    /// Skips leading whitespace and comments. Returns
    /// [`Token::EndOfInput`] once the source is exhausted.
    pub fn next_token(&mut self) -> Result<Token, ParseError> {
        self.skip_whitespace_and_comments()?;

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return Ok(Token::EndOfInput);
        }

        match self.cursor.current_char() {
            '{' => {
                self.cursor.advance();
                Ok(Token::LBrace)
            }
            '}' => {
                self.cursor.advance();
                Ok(Token::RBrace)
            }
            '[' => {
                self.cursor.advance();
                Ok(Token::LBracket)
            }
            ']' => {
                self.cursor.advance();
                Ok(Token::RBracket)
            }
            ',' => {
                self.cursor.advance();
                Ok(Token::Comma)
            }
            ':' => {
                self.cursor.advance();
                Ok(Token::Colon)
            }
            q @ ('"' | '\'') => self.lex_string(q),
            '+' | '-' | '.' => self.lex_number(),
            c if c.is_ascii_digit() => self.lex_number(),
            c if is_ident_start(c) => Ok(self.lex_identifier()),
            c => {
                let span = Span::new(
                    self.token_start,
                    self.token_start + c.len_utf8(),
                    self.token_start_line,
                    self.token_start_column,
                );
                self.cursor.advance();
                Err(ParseError::new(
                    ParseErrorKind::UnexpectedChar,
                    format!("unexpected character '{c}'"),
                    span,
                ))
            }
        }
    }

    /// Current line number (1-based), i.e. where the *next* token would
    /// start.
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// The [`Span`] of the token last returned by `next_token`.
    pub fn current_token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }
}
