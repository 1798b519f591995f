//! Recursive-descent record parser.
//!
//! The parser pulls tokens from the [`Scanner`] and builds [`Value`] trees
//! directly. Container nesting is bounded by [`ParseOptions::max_depth`], so
//! adversarial input such as ten thousand `[` cannot exhaust the stack.

use std::collections::btree_map::Entry;
use std::str::FromStr;

use lexical_parse_float::FromLexical as _;

use crate::error::{ParseError, ParseErrorKind, Span};
use crate::options::{DuplicateKeys, ParseOptions};
use crate::scanner::{ScanError, Scanner, SpannedToken, Token, decode_string};
use crate::value::{Array, Object, Value};

/// Parse a record document with default options.
///
/// The whole input must be exactly one value, optionally surrounded by
/// whitespace.
///
/// # Example
///
/// ```
/// let v = jstp::parse(r#"{"name": "jstp", "tags": [1, 2]}"#).unwrap();
/// assert_eq!(v["name"].string_value(), "jstp");
/// assert_eq!(v["tags"][1].number_value(), 2.0);
/// ```
pub fn parse(input: &str) -> crate::Result<Value> {
    parse_with_options(input, &ParseOptions::default())
}

/// Parse a record document with custom options.
///
/// ```
/// use jstp::{DuplicateKeys, ParseOptions};
///
/// let opts = ParseOptions::new().duplicate_keys(DuplicateKeys::LastWins);
/// let v = jstp::parse_with_options(r#"{"a": 1, "a": 2}"#, &opts).unwrap();
/// assert_eq!(v["a"].number_value(), 2.0);
/// ```
pub fn parse_with_options(input: &str, options: &ParseOptions) -> crate::Result<Value> {
    tracing::trace!(len = input.len(), max_depth = options.max_depth, "parsing record");

    let mut parser = Parser::new(input, options);
    match parser.parse_document() {
        Ok(value) => {
            tracing::trace!(value_type = value.value_type().name(), "parsed record");
            Ok(value)
        }
        Err(err) => {
            tracing::debug!(
                code = err.kind.code(),
                offset = err.span.offset,
                "record parse failed"
            );
            Err(ParseError::new(err.kind, err.span, input))
        }
    }
}

impl Value {
    /// Parse a record document with default options.
    ///
    /// Same as [`parse`](crate::parse).
    pub fn parse(input: &str) -> crate::Result<Value> {
        parse(input)
    }

    /// Parse a record document, reporting failure in-band.
    ///
    /// On success returns the value and an empty message. On failure returns
    /// [`Value::UNDEFINED`] and a human-readable description of the error.
    ///
    /// ```
    /// use jstp::Value;
    ///
    /// let (value, err) = Value::parse_or_undefined("[1, 2");
    /// assert!(value.is_undefined());
    /// assert!(!err.is_empty());
    /// ```
    pub fn parse_or_undefined(input: &str) -> (Value, String) {
        match parse(input) {
            Ok(value) => (value, String::new()),
            Err(err) => (Value::UNDEFINED, err.to_string()),
        }
    }
}

impl FromStr for Value {
    type Err = ParseError;

    fn from_str(s: &str) -> crate::Result<Self> {
        parse(s)
    }
}

type ParseResult<T> = Result<T, ScanError>;

struct Parser<'a> {
    input: &'a str,
    scanner: Scanner<'a>,
    options: &'a ParseOptions,
    /// Number of containers currently open
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, options: &'a ParseOptions) -> Self {
        Self {
            input,
            scanner: Scanner::new(input),
            options,
            depth: 0,
        }
    }

    fn parse_document(&mut self) -> ParseResult<Value> {
        let first = self.scanner.next_token("a value")?;
        if first.token == Token::Eof {
            return Err(ScanError::new(ParseErrorKind::EmptyInput, first.span));
        }

        let value = self.parse_value(first)?;

        if !self.scanner.at_end() {
            let pos = self.scanner.pos();
            return Err(ScanError::new(
                ParseErrorKind::TrailingCharacters,
                Span::new(pos, self.input.len() - pos),
            ));
        }

        Ok(value)
    }

    /// Parse the value that starts with `token`.
    fn parse_value(&mut self, token: SpannedToken) -> ParseResult<Value> {
        match token.token {
            Token::Undefined => Ok(Value::UNDEFINED),
            Token::Null => Ok(Value::NULL),
            Token::True => Ok(Value::TRUE),
            Token::False => Ok(Value::FALSE),
            Token::Number { start, end } => self.parse_number(start, end, token.span),
            Token::String {
                start,
                end,
                has_escapes,
            } => Ok(Value::string(decode_string(
                self.input,
                start,
                end,
                has_escapes,
            )?)),
            Token::ArrayStart => {
                self.enter(token.span)?;
                let array = self.parse_array();
                self.depth -= 1;
                array
            }
            Token::ObjectStart => {
                self.enter(token.span)?;
                let object = self.parse_object();
                self.depth -= 1;
                object
            }
            Token::Eof => Err(ScanError::new(
                ParseErrorKind::UnexpectedEof {
                    expected: "a value",
                },
                token.span,
            )),
            other => Err(unexpected(other, token.span, "a value")),
        }
    }

    fn enter(&mut self, span: Span) -> ParseResult<()> {
        let max_depth = self.options.max_depth;
        if self.depth >= max_depth {
            tracing::debug!(max_depth, offset = span.offset, "nesting depth limit reached");
            return Err(ScanError::new(
                ParseErrorKind::DepthLimitExceeded { max_depth },
                span,
            ));
        }
        self.depth += 1;
        Ok(())
    }

    fn parse_number(&self, start: usize, end: usize, span: Span) -> ParseResult<Value> {
        let text = &self.input.as_bytes()[start..end];
        let not_representable = || {
            ScanError::new(
                ParseErrorKind::InvalidNumber {
                    reason: "not representable as a double",
                },
                span,
            )
        };
        let n = f64::from_lexical(text).map_err(|_| not_representable())?;
        // Infinity has no text form to dump back to.
        if !n.is_finite() {
            return Err(not_representable());
        }
        Ok(Value::number(n))
    }

    /// Parse array elements after the opening `[`.
    fn parse_array(&mut self) -> ParseResult<Value> {
        let mut items = Array::new();

        let mut token = self.scanner.next_token("a value or ']'")?;
        match token.token {
            Token::ArrayEnd => return Ok(Value::array(items)),
            Token::Eof => return Err(eof(token.span, "a value or ']'")),
            _ => {}
        }

        loop {
            items.push(self.parse_value(token)?);

            let separator = self.scanner.next_token("',' or ']'")?;
            match separator.token {
                Token::Comma => token = self.scanner.next_token("a value")?,
                Token::ArrayEnd => return Ok(Value::array(items)),
                Token::Eof => return Err(eof(separator.span, "',' or ']'")),
                other => return Err(unexpected(other, separator.span, "',' or ']'")),
            }
        }
    }

    /// Parse object entries after the opening `{`.
    fn parse_object(&mut self) -> ParseResult<Value> {
        let mut entries = Object::new();

        let mut token = self.scanner.next_token("a string key or '}'")?;
        match token.token {
            Token::ObjectEnd => return Ok(Value::object(entries)),
            Token::Eof => return Err(eof(token.span, "a string key or '}'")),
            _ => {}
        }

        loop {
            let key_span = token.span;
            let key = match token.token {
                Token::String {
                    start,
                    end,
                    has_escapes,
                } => decode_string(self.input, start, end, has_escapes)?,
                Token::Eof => return Err(eof(token.span, "a string key")),
                other => return Err(unexpected(other, token.span, "a string key")),
            };

            let colon = self.scanner.next_token("':'")?;
            match colon.token {
                Token::Colon => {}
                Token::Eof => return Err(eof(colon.span, "':'")),
                other => return Err(unexpected(other, colon.span, "':'")),
            }

            let value_token = self.scanner.next_token("a value")?;
            let value = self.parse_value(value_token)?;
            self.insert(&mut entries, key, value, key_span)?;

            let separator = self.scanner.next_token("',' or '}'")?;
            match separator.token {
                Token::Comma => token = self.scanner.next_token("a string key")?,
                Token::ObjectEnd => return Ok(Value::object(entries)),
                Token::Eof => return Err(eof(separator.span, "',' or '}'")),
                other => return Err(unexpected(other, separator.span, "',' or '}'")),
            }
        }
    }

    fn insert(
        &self,
        entries: &mut Object,
        key: String,
        value: Value,
        key_span: Span,
    ) -> ParseResult<()> {
        match (entries.entry(key), self.options.duplicate_keys) {
            (Entry::Vacant(slot), _) => {
                slot.insert(value);
            }
            (Entry::Occupied(mut slot), DuplicateKeys::LastWins) => {
                slot.insert(value);
            }
            (Entry::Occupied(_), DuplicateKeys::FirstWins) => {}
            (Entry::Occupied(slot), DuplicateKeys::Reject) => {
                return Err(ScanError::new(
                    ParseErrorKind::DuplicateKey {
                        key: slot.key().clone(),
                    },
                    key_span,
                ));
            }
        }
        Ok(())
    }
}

fn unexpected(token: Token, span: Span, expected: &'static str) -> ScanError {
    ScanError::new(
        ParseErrorKind::UnexpectedToken {
            got: token.describe(),
            expected,
        },
        span,
    )
}

fn eof(span: Span, expected: &'static str) -> ScanError {
    ScanError::new(ParseErrorKind::UnexpectedEof { expected }, span)
}
