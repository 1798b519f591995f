//! Compact serialization of [`Value`] trees.
//!
//! Output is the record text format with no insignificant whitespace.
//! Objects are written in key order, so equal values always produce equal
//! text, and parsing the output yields a value equal to the input.

use std::fmt::{self, Display, Formatter, Write};

use crate::value::{Node, Value};

/// Largest magnitude below which every integral double is exactly an `i64`
/// that round-trips through text (2^53).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

impl Value {
    /// Serialize to compact record text.
    ///
    /// Serialization has no depth limit. A value built in code with more
    /// than [`DEFAULT_MAX_DEPTH`](crate::DEFAULT_MAX_DEPTH) levels of nesting
    /// dumps fine, but [`parse`](crate::parse) rejects the text; read it back
    /// with [`parse_with_options`](crate::parse_with_options) and a large
    /// enough [`ParseOptions::max_depth`](crate::ParseOptions::max_depth).
    ///
    /// ```
    /// let v = jstp::parse(r#"{ "b": [1, 2.5], "a": null }"#).unwrap();
    /// assert_eq!(v.dump(), r#"{"a":null,"b":[1,2.5]}"#);
    /// ```
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(&mut out);
        out
    }

    /// Serialize to compact record text, appending to `out`.
    pub fn dump_into(&self, out: &mut String) {
        // Writing into a `String` never fails.
        let _ = RecordSerializer::new(out).write_value(self);
    }
}

impl Display for Value {
    /// Same text as [`Value::dump`], written straight into the formatter.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        RecordSerializer::new(f).write_value(self)
    }
}

struct RecordSerializer<W> {
    out: W,
}

impl<W: Write> RecordSerializer<W> {
    fn new(out: W) -> Self {
        Self { out }
    }

    fn write_value(&mut self, value: &Value) -> fmt::Result {
        match &value.node {
            Node::Undefined => self.out.write_str("undefined"),
            Node::Null => self.out.write_str("null"),
            Node::Bool(true) => self.out.write_str("true"),
            Node::Bool(false) => self.out.write_str("false"),
            Node::Number(n) => self.write_number(*n),
            Node::String(s) => write_record_string(&mut self.out, s),
            Node::Array(items) => {
                self.out.write_char('[')?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        self.out.write_char(',')?;
                    }
                    self.write_value(item)?;
                }
                self.out.write_char(']')
            }
            Node::Object(entries) => {
                self.out.write_char('{')?;
                for (index, (key, item)) in entries.iter().enumerate() {
                    if index > 0 {
                        self.out.write_char(',')?;
                    }
                    write_record_string(&mut self.out, key)?;
                    self.out.write_char(':')?;
                    self.write_value(item)?;
                }
                self.out.write_char('}')
            }
        }
    }

    /// Integral values print without a fraction, everything else uses the
    /// shortest text that parses back to the same double. NaN and the
    /// infinities have no text form and print as `null`.
    fn write_number(&mut self, n: f64) -> fmt::Result {
        if !n.is_finite() {
            self.out.write_str("null")
        } else if n == 0.0 && n.is_sign_negative() {
            self.out.write_str("-0")
        } else if n.fract() == 0.0 && n.abs() < MAX_EXACT_INTEGER {
            let mut buf = itoa::Buffer::new();
            self.out.write_str(buf.format(n as i64))
        } else {
            let mut buf = ryu::Buffer::new();
            let text = buf.format_finite(n);
            self.out.write_str(text.strip_suffix(".0").unwrap_or(text))
        }
    }
}

/// Write a string with record escaping.
///
/// Quotes, backslashes and control characters are escaped; everything else,
/// including non-ASCII text, is written as-is.
fn write_record_string<W: Write>(out: &mut W, s: &str) -> fmt::Result {
    out.write_char('"')?;

    let mut run_start = 0;
    for (index, ch) in s.char_indices() {
        if needs_escape(ch) {
            out.write_str(&s[run_start..index])?;
            write_escaped_char(out, ch)?;
            run_start = index + ch.len_utf8();
        }
    }
    out.write_str(&s[run_start..])?;

    out.write_char('"')
}

#[inline]
fn needs_escape(ch: char) -> bool {
    ch == '"' || ch == '\\' || ch.is_ascii_control()
}

fn write_escaped_char<W: Write>(out: &mut W, ch: char) -> fmt::Result {
    match ch {
        '"' => out.write_str("\\\""),
        '\\' => out.write_str("\\\\"),
        '\n' => out.write_str("\\n"),
        '\r' => out.write_str("\\r"),
        '\t' => out.write_str("\\t"),
        '\u{08}' => out.write_str("\\b"),
        '\u{0C}' => out.write_str("\\f"),
        _ => {
            const HEX: &[u8; 16] = b"0123456789abcdef";
            let code = ch as u32;
            out.write_str("\\u00")?;
            out.write_char(HEX[((code >> 4) & 0xF) as usize] as char)?;
            out.write_char(HEX[(code & 0xF) as usize] as char)
        }
    }
}
