//! `jstp` implements the JSTP record serialization format: an immutable,
//! reference-counted dynamic value, a strict parser and a compact serializer.
//!
//! # Features
//!
//! - **Seven value types**: Undefined, Null, Bool, Number, String, Array, Object
//! - **Cheap clones**: strings, arrays and objects are shared behind an `Arc`
//! - **Soft accessors**: type mismatches and lookup misses yield defaults or
//!   `undefined` instead of panicking
//! - **Total order**: every value compares with every other, so values work as
//!   `BTreeMap` keys and sort deterministically
//! - **Diagnostics**: parse errors carry a span and implement [`miette::Diagnostic`]
//!
//! # Example
//!
//! ```
//! use jstp::{Value, record};
//!
//! let v: Value = r#"{"id": 7, "tags": ["x", "y"]}"#.parse().unwrap();
//! assert_eq!(v["id"].number_value(), 7.0);
//! assert_eq!(v["tags"][1].string_value(), "y");
//! assert!(v["missing"][0].is_undefined());
//!
//! assert_eq!(v, record!({"tags": ["x", "y"], "id": 7}));
//! assert_eq!(v.dump(), r#"{"id":7,"tags":["x","y"]}"#);
//! ```

#![warn(missing_docs)]

#[macro_use]
mod macros;

mod cmp;
mod error;
mod options;
mod parser;
mod scanner;
mod serialize;
mod value;

pub use error::{ParseError, ParseErrorKind, Result, Span};
pub use options::{DEFAULT_MAX_DEPTH, DuplicateKeys, ParseOptions};
pub use parser::{parse, parse_with_options};
pub use value::{Array, Object, Value, ValueType};
