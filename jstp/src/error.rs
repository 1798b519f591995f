//! Error types for record parsing.

use std::fmt::{self, Display};

/// A byte range in the parsed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Byte offset of the first byte
    pub offset: usize,
    /// Length in bytes
    pub len: usize,
}

impl Span {
    /// Create a span from an offset and a length.
    pub const fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// Byte offset one past the last byte of the span.
    pub const fn end(&self) -> usize {
        self.offset + self.len
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        miette::SourceSpan::new(span.offset.into(), span.len)
    }
}

/// Error returned when a record document fails to parse.
///
/// Carries the failure kind, where it happened (as a byte span and as a
/// 1-based line/column pair) and a copy of the input so that it can be
/// rendered as a [`miette::Diagnostic`].
#[derive(Debug, Clone)]
pub struct ParseError {
    kind: ParseErrorKind,
    span: Span,
    line: usize,
    column: usize,
    source_code: String,
}

impl ParseError {
    /// Create an error pointing at `span` inside `source`.
    pub(crate) fn new(kind: ParseErrorKind, span: Span, source: &str) -> Self {
        let (line, column) = line_column(source, span.offset);
        ParseError {
            kind,
            span,
            line,
            column,
            source_code: source.to_string(),
        }
    }

    /// The specific kind of failure.
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// Where in the input the failure was detected.
    pub fn span(&self) -> Span {
        self.span
    }

    /// 1-based line of the failure.
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column (counted in characters) of the failure.
    pub fn column(&self) -> usize {
        self.column
    }

    /// The input that failed to parse.
    pub fn source_code(&self) -> &str {
        &self.source_code
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at line {}, column {}",
            self.kind, self.line, self.column
        )
    }
}

impl std::error::Error for ParseError {}

/// Specific failure kinds for record parsing.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// The input contained nothing but whitespace
    EmptyInput,
    /// A character that cannot start or continue the current token
    UnexpectedChar {
        /// The character that was found
        ch: char,
        /// What was expected instead
        expected: &'static str,
    },
    /// Input ended in the middle of a value
    UnexpectedEof {
        /// What was expected before the end of input
        expected: &'static str,
    },
    /// A well-formed token in the wrong place
    UnexpectedToken {
        /// Description of the token that was found
        got: &'static str,
        /// What was expected instead
        expected: &'static str,
    },
    /// A number literal that does not follow the numeric grammar
    InvalidNumber {
        /// Why the literal was rejected
        reason: &'static str,
    },
    /// A backslash followed by a character that is not a known escape
    InvalidEscape {
        /// The character after the backslash
        ch: char,
    },
    /// A malformed `\uXXXX` escape or an unpaired surrogate
    InvalidUnicodeEscape {
        /// Why the escape was rejected
        reason: &'static str,
    },
    /// A raw control character inside a string literal
    ControlCharacterInString {
        /// The offending character
        ch: char,
    },
    /// The same key appeared twice in one object
    DuplicateKey {
        /// The repeated key
        key: String,
    },
    /// Containers were nested deeper than the configured limit
    DepthLimitExceeded {
        /// The configured maximum depth
        max_depth: usize,
    },
    /// Non-whitespace input after a complete top-level value
    TrailingCharacters,
}

impl Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::EmptyInput => write!(f, "empty input, expected a value"),
            ParseErrorKind::UnexpectedChar { ch, expected } => {
                write!(f, "unexpected character {ch:?}, expected {expected}")
            }
            ParseErrorKind::UnexpectedEof { expected } => {
                write!(f, "unexpected end of input, expected {expected}")
            }
            ParseErrorKind::UnexpectedToken { got, expected } => {
                write!(f, "unexpected {got}, expected {expected}")
            }
            ParseErrorKind::InvalidNumber { reason } => write!(f, "invalid number: {reason}"),
            ParseErrorKind::InvalidEscape { ch } => {
                write!(f, "invalid escape sequence `\\{ch}`")
            }
            ParseErrorKind::InvalidUnicodeEscape { reason } => {
                write!(f, "invalid unicode escape: {reason}")
            }
            ParseErrorKind::ControlCharacterInString { ch } => {
                write!(
                    f,
                    "control character U+{:04X} must be escaped in strings",
                    *ch as u32
                )
            }
            ParseErrorKind::DuplicateKey { key } => write!(f, "duplicate key `{key}`"),
            ParseErrorKind::DepthLimitExceeded { max_depth } => {
                write!(f, "nesting depth exceeds the limit of {max_depth}")
            }
            ParseErrorKind::TrailingCharacters => {
                write!(f, "trailing characters after the value")
            }
        }
    }
}

impl ParseErrorKind {
    /// Get an error code for this kind of error.
    pub const fn code(&self) -> &'static str {
        match self {
            ParseErrorKind::EmptyInput => "jstp::empty_input",
            ParseErrorKind::UnexpectedChar { .. } => "jstp::unexpected_char",
            ParseErrorKind::UnexpectedEof { .. } => "jstp::unexpected_eof",
            ParseErrorKind::UnexpectedToken { .. } => "jstp::unexpected_token",
            ParseErrorKind::InvalidNumber { .. } => "jstp::invalid_number",
            ParseErrorKind::InvalidEscape { .. } => "jstp::invalid_escape",
            ParseErrorKind::InvalidUnicodeEscape { .. } => "jstp::invalid_unicode_escape",
            ParseErrorKind::ControlCharacterInString { .. } => "jstp::control_character",
            ParseErrorKind::DuplicateKey { .. } => "jstp::duplicate_key",
            ParseErrorKind::DepthLimitExceeded { .. } => "jstp::depth_limit",
            ParseErrorKind::TrailingCharacters => "jstp::trailing_characters",
        }
    }

    /// Get a label describing where/what the error points to.
    pub fn label(&self) -> String {
        match self {
            ParseErrorKind::EmptyInput => "no value here".into(),
            ParseErrorKind::UnexpectedChar { ch, expected } => {
                format!("unexpected {ch:?}, expected {expected}")
            }
            ParseErrorKind::UnexpectedEof { expected } => format!("expected {expected}"),
            ParseErrorKind::UnexpectedToken { expected, .. } => format!("expected {expected}"),
            ParseErrorKind::InvalidNumber { reason } => reason.to_string(),
            ParseErrorKind::InvalidEscape { .. } => "unknown escape".into(),
            ParseErrorKind::InvalidUnicodeEscape { reason } => reason.to_string(),
            ParseErrorKind::ControlCharacterInString { .. } => "unescaped control character".into(),
            ParseErrorKind::DuplicateKey { key } => format!("`{key}` already defined"),
            ParseErrorKind::DepthLimitExceeded { .. } => "nested too deeply".into(),
            ParseErrorKind::TrailingCharacters => "value ended before this".into(),
        }
    }
}

impl miette::Diagnostic for ParseError {
    fn code<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.source_code as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = miette::LabeledSpan> + '_>> {
        Some(Box::new(std::iter::once(miette::LabeledSpan::at(
            self.span,
            self.kind.label(),
        ))))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        match &self.kind {
            ParseErrorKind::DepthLimitExceeded { .. } => Some(Box::new(
                "raise the limit with `ParseOptions::max_depth` if this input is trusted",
            )),
            ParseErrorKind::DuplicateKey { .. } => Some(Box::new(
                "use `DuplicateKeys::LastWins` or `DuplicateKeys::FirstWins` to accept repeated keys",
            )),
            _ => None,
        }
    }
}

/// Result type for record parsing
pub type Result<T> = core::result::Result<T, ParseError>;

/// Translate a byte offset into a 1-based (line, column) pair.
fn line_column(source: &str, offset: usize) -> (usize, usize) {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    let before = &source[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |idx| idx + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}
