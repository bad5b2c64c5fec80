//! Recursive-descent parser: tokens to [`Value`] tree.
//!
//! The parser drives the lexer one token at a time and keeps exactly
//! one token of lookahead in `current`. There is no error recovery:
//! the first error encountered is returned immediately and nothing
//! partially built is handed back to the caller.

use json5_lex::{Lexer, Token};
use json5_util::{ParseError, ParseErrorKind, Span};

use crate::value::{Object, Value};

/// Parses `source` as a complete JSON5 document.
///
/// Equivalent to constructing a [`Parser`] and calling
/// [`Parser::parse_document`].
pub fn parse(source: &str) -> Result<Value, ParseError> {
    Parser::new(source)?.parse_document()
}

/// A JSON5 parser over one source string.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    current_span: Span,
}

impl<'a> Parser<'a> {
    /// Creates a parser and lexes its first token of lookahead.
    pub fn new(source: &'a str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        let current_span = lexer.current_token_span();
        Ok(Self {
            lexer,
            current,
            current_span,
        })
    }

    /// Parses one value, then requires end of input.
    ///
    /// Any non-whitespace, non-comment text following the value is a
    /// `TrailingData` error.
    pub fn parse_document(&mut self) -> Result<Value, ParseError> {
        let value = self.parse_value()?;
        if self.current != Token::EndOfInput {
            return Err(self.error(
                ParseErrorKind::TrailingData,
                format!("trailing data after value: found {}", self.current),
            ));
        }
        Ok(value)
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        self.current = self.lexer.next_token()?;
        self.current_span = self.lexer.current_token_span();
        Ok(())
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        match self.current.clone() {
            Token::LBrace => self.parse_object(),
            Token::LBracket => self.parse_array(),
            Token::Str(s) => {
                self.advance()?;
                Ok(Value::Str(s))
            }
            Token::Int(i) => {
                self.advance()?;
                Ok(Value::Int(i))
            }
            Token::Float(f) => {
                self.advance()?;
                Ok(Value::Float(f))
            }
            Token::Bool(b) => {
                self.advance()?;
                Ok(Value::Bool(b))
            }
            Token::Null => {
                self.advance()?;
                Ok(Value::Null)
            }
            Token::Ident(_) => Err(self.error(
                ParseErrorKind::InvalidLiteral,
                format!("unexpected identifier in value position: {}", self.current),
            )),
            _ => Err(self.error(
                ParseErrorKind::MissingToken,
                format!("expected a value, found {}", self.current),
            )),
        }
    }

    fn parse_object(&mut self) -> Result<Value, ParseError> {
        let start = self.current_span;
        self.advance()?; // consume '{'

        let mut object = Object::new();

        if self.current == Token::RBrace {
            self.advance()?;
            return Ok(Value::Object(object));
        }

        loop {
            let key = self.parse_key(start)?;
            self.expect_colon()?;
            let value = self.parse_value()?;
            object.insert(key, value);

            match &self.current {
                Token::Comma => {
                    self.advance()?;
                    if self.current == Token::RBrace {
                        self.advance()?;
                        return Ok(Value::Object(object));
                    }
                }
                Token::RBrace => {
                    self.advance()?;
                    return Ok(Value::Object(object));
                }
                Token::EndOfInput => {
                    return Err(self.error_at(ParseErrorKind::Unterminated, "unterminated object", start));
                }
                _ => {
                    return Err(self.error(
                        ParseErrorKind::MissingToken,
                        format!("expected ',' or '}}', found {}", self.current),
                    ));
                }
            }
        }
    }

    fn parse_key(&mut self, container_start: Span) -> Result<String, ParseError> {
        match self.current.clone() {
            Token::Str(s) => {
                self.advance()?;
                Ok(s)
            }
            Token::Ident(s) => {
                self.advance()?;
                Ok(s)
            }
            Token::EndOfInput => Err(self.error_at(
                ParseErrorKind::Unterminated,
                "unterminated object",
                container_start,
            )),
            _ => Err(self.error(
                ParseErrorKind::MissingToken,
                format!("expected a string or identifier object key, found {}", self.current),
            )),
        }
    }

    fn expect_colon(&mut self) -> Result<(), ParseError> {
        if self.current == Token::Colon {
            self.advance()
        } else {
            Err(self.error(
                ParseErrorKind::MissingToken,
                format!("expected ':' after object key, found {}", self.current),
            ))
        }
    }

    fn parse_array(&mut self) -> Result<Value, ParseError> {
        let start = self.current_span;
        self.advance()?; // consume '['

        let mut items = Vec::new();

        if self.current == Token::RBracket {
            self.advance()?;
            return Ok(Value::Array(items));
        }

        loop {
            items.push(self.parse_value()?);

            match &self.current {
                Token::Comma => {
                    self.advance()?;
                    if self.current == Token::RBracket {
                        self.advance()?;
                        return Ok(Value::Array(items));
                    }
                }
                Token::RBracket => {
                    self.advance()?;
                    return Ok(Value::Array(items));
                }
                Token::EndOfInput => {
                    return Err(self.error_at(ParseErrorKind::Unterminated, "unterminated array", start));
                }
                _ => {
                    return Err(self.error(
                        ParseErrorKind::MissingToken,
                        format!("expected ',' or ']', found {}", self.current),
                    ));
                }
            }
        }
    }

    fn error(&self, kind: ParseErrorKind, message: impl Into<String>) -> ParseError {
        ParseError::new(kind, message, self.current_span)
    }

    fn error_at(&self, kind: ParseErrorKind, message: impl Into<String>, span: Span) -> ParseError {
        ParseError::new(kind, message, span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scalars() {
        assert_eq!(parse("null").unwrap(), Value::Null);
        assert_eq!(parse("true").unwrap(), Value::Bool(true));
        assert_eq!(parse("42").unwrap(), Value::Int(42));
        assert_eq!(parse("3.14").unwrap(), Value::Float(3.14));
        assert_eq!(parse("\"hi\"").unwrap(), Value::Str("hi".into()));
    }

    #[test]
    fn test_parse_comment_and_unquoted_keys() {
        let value = parse("{ // c\n \"a\": true, \"b\": false, \"c\": null }").unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.get("a"), Some(&Value::Bool(true)));
        assert_eq!(obj.get("b"), Some(&Value::Bool(false)));
        assert_eq!(obj.get("c"), Some(&Value::Null));
    }

    #[test]
    fn test_unquoted_key_and_single_quoted_string() {
        let value = parse("{ unquoted: 'Hello World', \"quoted\": \"Another\" }").unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.get("unquoted"), Some(&Value::Str("Hello World".into())));
        assert_eq!(obj.get("quoted"), Some(&Value::Str("Another".into())));
    }

    #[test]
    fn test_array_with_comment_and_trailing_comma() {
        assert_eq!(
            parse("[1, 2, 3, /* c */ 4, 5]").unwrap(),
            Value::Array(vec![
                Value::Int(1),
                Value::Int(2),
                Value::Int(3),
                Value::Int(4),
                Value::Int(5),
            ])
        );
        assert_eq!(
            parse("[1,2,3,]").unwrap(),
            Value::Array(vec![Value::Int(1), Value::Int(2), Value::Int(3)])
        );
    }

    #[test]
    fn test_leading_and_signed_decimals() {
        let value = parse("{\"a\": .5, \"b\": -.5, \"c\": +.5}").unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.get("a"), Some(&Value::Float(0.5)));
        assert_eq!(obj.get("b"), Some(&Value::Float(-0.5)));
        assert_eq!(obj.get("c"), Some(&Value::Float(0.5)));
    }

    #[test]
    fn test_hex_literal() {
        let value = parse("{\"h\": 0xdecaf}").unwrap();
        assert_eq!(value.as_object().unwrap().get("h"), Some(&Value::Int(912559)));
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let value = parse("{\"a\":1,\"a\":2}").unwrap();
        assert_eq!(value.as_object().unwrap().get("a"), Some(&Value::Int(2)));
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(parse("{}").unwrap(), Value::Object(Object::new()));
        assert_eq!(parse("[]").unwrap(), Value::Array(Vec::new()));
    }

    #[test]
    fn test_nested_depth_50() {
        let mut text = String::new();
        for _ in 0..50 {
            text.push('[');
        }
        text.push('1');
        for _ in 0..50 {
            text.push(']');
        }
        let value = parse(&text).unwrap();
        let mut depth = 0;
        let mut current = &value;
        while let Value::Array(items) = current {
            depth += 1;
            current = &items[0];
        }
        assert_eq!(depth, 50);
    }

    #[test]
    fn test_invalid_unterminated_object() {
        assert!(parse("{ \"a\": 123").is_err());
    }

    #[test]
    fn test_invalid_trailing_data() {
        assert!(parse("{\"a\": 1} extra").is_err());
    }

    #[test]
    fn test_invalid_missing_colon() {
        assert!(parse("{\"a\" 123}").is_err());
    }

    #[test]
    fn test_invalid_missing_comma() {
        assert!(parse("{\"a\":1 \"b\":2}").is_err());
    }

    #[test]
    fn test_invalid_digit_led_key() {
        assert!(parse("{ 123key: \"v\" }").is_err());
    }

    #[test]
    fn test_invalid_unterminated_string() {
        assert!(parse("{\"a\":\"unterminated").is_err());
    }

    #[test]
    fn test_invalid_unterminated_array() {
        assert!(parse("[1,2").is_err());
    }

    #[test]
    fn test_invalid_unterminated_block_comment() {
        assert!(parse("{\"a\":123 /* unclosed").is_err());
    }

    #[test]
    fn test_invalid_infinity_literal() {
        assert!(parse("{\"a\": Infinity}").is_err());
    }

    #[test]
    fn test_invalid_bare_dot() {
        assert!(parse("{\"a\": .}").is_err());
    }

    #[test]
    fn test_invalid_dot_exponent() {
        assert!(parse("{\"a\": .e2}").is_err());
    }

    #[test]
    fn test_whitespace_insensitivity() {
        let a = parse("{\"a\":1,\"b\":2}").unwrap();
        let b = parse("{  \"a\" :  1 ,  // comment\n \"b\" : 2  }").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_error_localisation_points_at_offending_line() {
        let err = parse("{\n  \"a\": 1,\n  \"b\": @\n}").unwrap_err();
        assert_eq!(err.line, 3);
    }
}
