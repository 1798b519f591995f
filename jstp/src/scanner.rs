//! Low-level record scanner that finds token boundaries without materializing strings.
//!
//! The scanner's job is to identify where tokens are in the input and to
//! enforce the lexical grammar (number syntax, string termination, raw
//! control characters). String content is returned as indices plus a
//! `has_escapes` flag; [`decode_string`] turns it into an owned `String`
//! when the parser needs it.

use crate::error::{ParseErrorKind, Span};

/// Token kinds with minimal data - strings/numbers are just indices into the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Token {
    /// `{`
    ObjectStart,
    /// `}`
    ObjectEnd,
    /// `[`
    ArrayStart,
    /// `]`
    ArrayEnd,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `null`
    Null,
    /// `true`
    True,
    /// `false`
    False,
    /// `undefined`
    Undefined,
    /// A string literal - indices point to content (excluding quotes)
    String {
        /// Start index of string content (after opening quote)
        start: usize,
        /// End index of string content (before closing quote)
        end: usize,
        /// True if the string contains escape sequences that need processing
        has_escapes: bool,
    },
    /// A number literal - indices point to the raw number text
    Number {
        /// Start index of number
        start: usize,
        /// End index of number
        end: usize,
    },
    /// End of input reached
    Eof,
}

impl Token {
    /// Short description used in "unexpected ..." messages.
    pub(crate) const fn describe(&self) -> &'static str {
        match self {
            Token::ObjectStart => "'{'",
            Token::ObjectEnd => "'}'",
            Token::ArrayStart => "'['",
            Token::ArrayEnd => "']'",
            Token::Colon => "':'",
            Token::Comma => "','",
            Token::Null => "`null`",
            Token::True => "`true`",
            Token::False => "`false`",
            Token::Undefined => "`undefined`",
            Token::String { .. } => "string",
            Token::Number { .. } => "number",
            Token::Eof => "end of input",
        }
    }
}

/// Spanned token with location information
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SpannedToken {
    /// The token
    pub token: Token,
    /// Source span
    pub span: Span,
}

/// Scanner error, turned into a [`ParseError`](crate::ParseError) once the
/// parser gives up.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScanError {
    /// The error kind
    pub kind: ParseErrorKind,
    /// Source span
    pub span: Span,
}

impl ScanError {
    pub(crate) const fn new(kind: ParseErrorKind, span: Span) -> Self {
        ScanError { kind, span }
    }
}

/// Result type for scanner operations
pub(crate) type ScanResult = Result<SpannedToken, ScanError>;

/// Record scanner over a complete in-memory input.
pub(crate) struct Scanner<'a> {
    input: &'a str,
    /// Current position in the input
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner starting at position 0
    pub(crate) const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Current position in the input
    pub(crate) const fn pos(&self) -> usize {
        self.pos
    }

    /// Skip whitespace and report whether anything but whitespace remains.
    pub(crate) fn at_end(&mut self) -> bool {
        self.skip_whitespace();
        self.pos >= self.input.len()
    }

    /// Scan the next token.
    ///
    /// `expected` describes what the caller is looking for and is only used
    /// to word the error when the next character cannot start any token.
    pub(crate) fn next_token(&mut self, expected: &'static str) -> ScanResult {
        self.skip_whitespace();

        let start = self.pos;
        let Some(&byte) = self.bytes().get(start) else {
            return Ok(SpannedToken {
                token: Token::Eof,
                span: Span::new(start, 0),
            });
        };

        let punct = match byte {
            b'{' => Some(Token::ObjectStart),
            b'}' => Some(Token::ObjectEnd),
            b'[' => Some(Token::ArrayStart),
            b']' => Some(Token::ArrayEnd),
            b':' => Some(Token::Colon),
            b',' => Some(Token::Comma),
            _ => None,
        };
        if let Some(token) = punct {
            self.pos += 1;
            return Ok(SpannedToken {
                token,
                span: Span::new(start, 1),
            });
        }

        match byte {
            b'"' => self.scan_string(start),
            b'-' | b'0'..=b'9' => self.scan_number(start),
            b't' => self.scan_literal(start, "true", Token::True),
            b'f' => self.scan_literal(start, "false", Token::False),
            b'n' => self.scan_literal(start, "null", Token::Null),
            b'u' => self.scan_literal(start, "undefined", Token::Undefined),
            _ => Err(self.unexpected_char(start, expected)),
        }
    }

    fn bytes(&self) -> &'a [u8] {
        self.input.as_bytes()
    }

    fn skip_whitespace(&mut self) {
        let mut pos = self.pos;
        while let Some(&b) = self.bytes().get(pos) {
            match b {
                b' ' | b'\t' | b'\n' | b'\r' => pos += 1,
                _ => break,
            }
        }
        self.pos = pos;
    }

    /// Error for the (possibly multi-byte) character at `at`.
    fn unexpected_char(&self, at: usize, expected: &'static str) -> ScanError {
        match self.input.get(at..).and_then(|rest| rest.chars().next()) {
            Some(ch) => ScanError::new(
                ParseErrorKind::UnexpectedChar { ch, expected },
                Span::new(at, ch.len_utf8()),
            ),
            None => ScanError::new(ParseErrorKind::UnexpectedEof { expected }, Span::new(at, 0)),
        }
    }

    /// Scan a string, finding its boundaries and noting if it has escapes.
    ///
    /// Escapes are only skipped here; [`decode_string`] validates them.
    fn scan_string(&mut self, start: usize) -> ScanResult {
        // Skip opening quote
        self.pos += 1;
        let content_start = self.pos;
        let mut has_escapes = false;

        while let Some(&byte) = self.bytes().get(self.pos) {
            match byte {
                b'"' => {
                    let content_end = self.pos;
                    self.pos += 1;
                    return Ok(SpannedToken {
                        token: Token::String {
                            start: content_start,
                            end: content_end,
                            has_escapes,
                        },
                        span: Span::new(start, self.pos - start),
                    });
                }
                b'\\' => {
                    has_escapes = true;
                    // The escaped byte can never close the string. If it is a
                    // control character, report it rather than hiding it.
                    match self.bytes().get(self.pos + 1) {
                        Some(&next) if next < 0x20 => {
                            return Err(control_character(self.pos + 1, next));
                        }
                        Some(_) => self.pos += 2,
                        None => self.pos += 1,
                    }
                }
                b if b < 0x20 => return Err(control_character(self.pos, b)),
                _ => self.pos += 1,
            }
        }

        Err(ScanError::new(
            ParseErrorKind::UnexpectedEof {
                expected: "'\"' to close the string",
            },
            Span::new(start, self.pos - start),
        ))
    }

    /// Scan a number, enforcing the JSON number grammar:
    /// `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`
    fn scan_number(&mut self, start: usize) -> ScanResult {
        let bytes = self.bytes();
        let mut pos = start;

        if bytes.get(pos) == Some(&b'-') {
            pos += 1;
        }

        // Integer part
        match bytes.get(pos) {
            Some(b'0') => {
                pos += 1;
                if bytes.get(pos).is_some_and(u8::is_ascii_digit) {
                    return Err(invalid_number(
                        "leading zeros are not allowed",
                        start,
                        pos + 1,
                    ));
                }
            }
            Some(b'1'..=b'9') => pos = skip_digits(bytes, pos),
            _ => return Err(invalid_number("expected a digit after '-'", start, pos)),
        }

        // Fractional part
        if bytes.get(pos) == Some(&b'.') {
            pos += 1;
            let digits_end = skip_digits(bytes, pos);
            if digits_end == pos {
                return Err(invalid_number(
                    "expected a digit after the decimal point",
                    start,
                    pos,
                ));
            }
            pos = digits_end;
        }

        // Exponent
        if matches!(bytes.get(pos), Some(b'e' | b'E')) {
            pos += 1;
            if matches!(bytes.get(pos), Some(b'+' | b'-')) {
                pos += 1;
            }
            let digits_end = skip_digits(bytes, pos);
            if digits_end == pos {
                return Err(invalid_number("expected a digit in the exponent", start, pos));
            }
            pos = digits_end;
        }

        self.pos = pos;
        Ok(SpannedToken {
            token: Token::Number { start, end: pos },
            span: Span::new(start, pos - start),
        })
    }

    /// Scan a literal keyword (true, false, null, undefined)
    fn scan_literal(&mut self, start: usize, expected: &'static str, token: Token) -> ScanResult {
        for (matched, &want) in expected.as_bytes().iter().enumerate() {
            let at = start + matched;
            match self.bytes().get(at) {
                Some(&b) if b == want => {}
                Some(_) => return Err(self.unexpected_char(at, literal_name(token))),
                None => {
                    return Err(ScanError::new(
                        ParseErrorKind::UnexpectedEof {
                            expected: literal_name(token),
                        },
                        Span::new(start, at - start),
                    ));
                }
            }
        }

        self.pos = start + expected.len();
        Ok(SpannedToken {
            token,
            span: Span::new(start, expected.len()),
        })
    }
}

fn literal_name(token: Token) -> &'static str {
    match token {
        Token::True => "literal `true`",
        Token::False => "literal `false`",
        Token::Null => "literal `null`",
        _ => "literal `undefined`",
    }
}

fn skip_digits(bytes: &[u8], mut pos: usize) -> usize {
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    pos
}

fn invalid_number(reason: &'static str, start: usize, end: usize) -> ScanError {
    ScanError::new(
        ParseErrorKind::InvalidNumber { reason },
        Span::new(start, end.max(start + 1) - start),
    )
}

fn control_character(at: usize, byte: u8) -> ScanError {
    ScanError::new(
        ParseErrorKind::ControlCharacterInString { ch: byte as char },
        Span::new(at, 1),
    )
}

// =============================================================================
// String decoding (second pass)
// =============================================================================

/// Decode the content of a string token, handling escape sequences.
///
/// `start..end` must be the content span reported by [`Token::String`].
pub(crate) fn decode_string(
    input: &str,
    start: usize,
    end: usize,
    has_escapes: bool,
) -> Result<String, ScanError> {
    if !has_escapes {
        return Ok(input[start..end].to_string());
    }

    let bytes = input.as_bytes();
    let mut result = String::with_capacity(end - start);
    let mut run_start = start;
    let mut i = start;

    while i < end {
        if bytes[i] != b'\\' {
            i += 1;
            continue;
        }

        // Flush the unescaped run. Backslashes are ASCII, so `i` is a char boundary.
        result.push_str(&input[run_start..i]);

        let Some(&esc) = bytes.get(i + 1).filter(|_| i + 1 < end) else {
            return Err(ScanError::new(
                ParseErrorKind::UnexpectedEof {
                    expected: "an escape character",
                },
                Span::new(i, 1),
            ));
        };

        match esc {
            b'"' => result.push('"'),
            b'\\' => result.push('\\'),
            b'/' => result.push('/'),
            b'b' => result.push('\x08'),
            b'f' => result.push('\x0c'),
            b'n' => result.push('\n'),
            b'r' => result.push('\r'),
            b't' => result.push('\t'),
            b'u' => {
                let (ch, consumed) = decode_unicode_escape(input, i, end)?;
                result.push(ch);
                i += consumed;
                run_start = i;
                continue;
            }
            _ => {
                let ch = input[i + 1..].chars().next().unwrap_or('\\');
                return Err(ScanError::new(
                    ParseErrorKind::InvalidEscape { ch },
                    Span::new(i, 1 + ch.len_utf8()),
                ));
            }
        }

        i += 2;
        run_start = i;
    }

    result.push_str(&input[run_start..end]);
    Ok(result)
}

/// Decode `\uXXXX` (or a `\uXXXX\uXXXX` surrogate pair) starting at the
/// backslash at `at`. Returns the character and the number of bytes consumed.
fn decode_unicode_escape(input: &str, at: usize, end: usize) -> Result<(char, usize), ScanError> {
    let high = read_hex4(input, at, end)?;

    let code_point = match high {
        0xD800..=0xDBFF => {
            let low_at = at + 6;
            let bytes = input.as_bytes();
            if low_at + 1 >= end || bytes[low_at] != b'\\' || bytes[low_at + 1] != b'u' {
                return Err(ScanError::new(
                    ParseErrorKind::InvalidUnicodeEscape {
                        reason: "high surrogate is not followed by a low surrogate",
                    },
                    Span::new(at, 6),
                ));
            }
            let low = read_hex4(input, low_at, end)?;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(ScanError::new(
                    ParseErrorKind::InvalidUnicodeEscape {
                        reason: "high surrogate is not followed by a low surrogate",
                    },
                    Span::new(at, 12),
                ));
            }
            let code_point = 0x10000 + ((u32::from(high) & 0x3FF) << 10) + (u32::from(low) & 0x3FF);
            return char::from_u32(code_point)
                .map(|ch| (ch, 12))
                .ok_or_else(|| {
                    ScanError::new(
                        ParseErrorKind::InvalidUnicodeEscape {
                            reason: "not a unicode scalar value",
                        },
                        Span::new(at, 12),
                    )
                });
        }
        0xDC00..=0xDFFF => {
            return Err(ScanError::new(
                ParseErrorKind::InvalidUnicodeEscape {
                    reason: "unpaired low surrogate",
                },
                Span::new(at, 6),
            ));
        }
        other => u32::from(other),
    };

    char::from_u32(code_point)
        .map(|ch| (ch, 6))
        .ok_or_else(|| {
            ScanError::new(
                ParseErrorKind::InvalidUnicodeEscape {
                    reason: "not a unicode scalar value",
                },
                Span::new(at, 6),
            )
        })
}

/// Read the four hex digits of the `\uXXXX` escape whose backslash is at `at`.
fn read_hex4(input: &str, at: usize, end: usize) -> Result<u16, ScanError> {
    let digits_at = at + 2;
    let digits = input
        .as_bytes()
        .get(digits_at..digits_at + 4)
        .filter(|_| digits_at + 4 <= end)
        .filter(|digits| digits.iter().all(u8::is_ascii_hexdigit));

    let Some(digits) = digits else {
        return Err(ScanError::new(
            ParseErrorKind::InvalidUnicodeEscape {
                reason: "expected four hex digits after `\\u`",
            },
            Span::new(at, (end.min(at + 6)).saturating_sub(at).max(2)),
        ));
    };

    Ok(digits
        .iter()
        .fold(0u16, |acc, &d| (acc << 4) | u16::from(hex_value(d))))
}

const fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}
