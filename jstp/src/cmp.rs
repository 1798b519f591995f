//! Equality, ordering and hashing for [`Value`].
//!
//! Values of different types order by [`ValueType`](crate::ValueType):
//! `undefined < null < bool < number < string < array < object`.
//! Within a type:
//!
//! - booleans: `false < true`
//! - numbers: numeric order, with `-0.0 == 0.0`; NaNs sort after every
//!   other number (before it when negative) so the order stays total
//! - strings: lexicographic by bytes
//! - arrays: lexicographic by element
//! - objects: lexicographic over `(key, value)` pairs in key order
//!
//! Equality is exactly "neither is less than the other".

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::value::{Node, Value};

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (&self.node, &other.node) {
            (Node::Undefined, Node::Undefined) | (Node::Null, Node::Null) => true,
            (Node::Bool(a), Node::Bool(b)) => a == b,
            (Node::Number(a), Node::Number(b)) => compare_numbers(*a, *b).is_eq(),
            (Node::String(a), Node::String(b)) => Arc::ptr_eq(a, b) || a == b,
            (Node::Array(a), Node::Array(b)) => Arc::ptr_eq(a, b) || a == b,
            (Node::Object(a), Node::Object(b)) => Arc::ptr_eq(a, b) || a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.node, &other.node) {
            (Node::Undefined, Node::Undefined) | (Node::Null, Node::Null) => Ordering::Equal,
            (Node::Bool(a), Node::Bool(b)) => a.cmp(b),
            (Node::Number(a), Node::Number(b)) => compare_numbers(*a, *b),
            (Node::String(a), Node::String(b)) => {
                if Arc::ptr_eq(a, b) {
                    Ordering::Equal
                } else {
                    a.as_bytes().cmp(b.as_bytes())
                }
            }
            (Node::Array(a), Node::Array(b)) => {
                if Arc::ptr_eq(a, b) {
                    Ordering::Equal
                } else {
                    a.iter().cmp(b.iter())
                }
            }
            (Node::Object(a), Node::Object(b)) => {
                if Arc::ptr_eq(a, b) {
                    Ordering::Equal
                } else {
                    a.iter().cmp(b.iter())
                }
            }
            _ => self.value_type().cmp(&other.value_type()),
        }
    }
}

/// Numeric order that is total: IEEE comparison where it is defined, the
/// bit-level total order for NaN.
fn compare_numbers(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value_type().hash(state);
        match &self.node {
            Node::Undefined | Node::Null => {}
            Node::Bool(b) => b.hash(state),
            // Equal numbers must hash alike, and -0.0 == 0.0.
            Node::Number(n) => {
                let n = if *n == 0.0 { 0.0f64 } else { *n };
                n.to_bits().hash(state);
            }
            Node::String(s) => s.hash(state),
            Node::Array(items) => items.hash(state),
            Node::Object(entries) => entries.hash(state),
        }
    }
}
