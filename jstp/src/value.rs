//! Core `Value` type: an immutable, reference-counted record node.
//!
//! # Representation
//!
//! A [`Value`] is a handle over a closed set of variants. Scalars are stored
//! inline in the handle; strings, arrays and objects live behind an [`Arc`]
//! so that cloning a handle never copies payload:
//!
//! ```text
//! Value ─┬─ Undefined
//!        ├─ Null
//!        ├─ Bool(bool)
//!        ├─ Number(f64)
//!        ├─ String ──► Arc<String>
//!        ├─ Array  ──► Arc<Vec<Value>>
//!        └─ Object ──► Arc<BTreeMap<String, Value>>
//! ```
//!
//! There is no mutation API. New arrays and objects are assembled from
//! existing handles, which shares the children instead of copying them, and
//! since no node can be changed after construction no node can reach itself.
//!
//! # Soft failures
//!
//! Typed accessors never fail: asking a value for a payload it does not carry
//! returns the zero value for that payload (`false`, `0.0`, `""`, an empty
//! array or object). Index lookups that miss return [`Value::UNDEFINED`].

use std::collections::BTreeMap;
use std::fmt::{self, Debug, Formatter};
use std::ops::Index;
use std::sync::Arc;

/// Ordered sequence of values held by an array.
pub type Array = Vec<Value>;

/// Key-sorted map held by an object.
///
/// Keys iterate in lexicographic byte order; serialization and ordering both
/// follow that order.
pub type Object = BTreeMap<String, Value>;

static EMPTY_OBJECT: Object = BTreeMap::new();

/// Returned by index lookups that miss.
static UNDEFINED: Value = Value::UNDEFINED;

/// Enum distinguishing the value types.
///
/// The declaration order is the cross-type ordering used by [`Value`]'s
/// `Ord` implementation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueType {
    /// No value present (missed lookup, default handle)
    Undefined,
    /// Explicit `null`
    Null,
    /// Boolean value
    Bool,
    /// Double-precision number
    Number,
    /// String (UTF-8)
    String,
    /// Array
    Array,
    /// Object (key-value map)
    Object,
}

impl ValueType {
    /// Lowercase name of the type, as used in messages.
    pub const fn name(self) -> &'static str {
        match self {
            ValueType::Undefined => "undefined",
            ValueType::Null => "null",
            ValueType::Bool => "bool",
            ValueType::Number => "number",
            ValueType::String => "string",
            ValueType::Array => "array",
            ValueType::Object => "object",
        }
    }
}

/// A dynamic record value.
///
/// `Value` has value semantics at the API boundary: it is immutable, and
/// `clone` is a cheap reference-count increment.
#[derive(Clone)]
pub struct Value {
    pub(crate) node: Node,
}

#[derive(Clone)]
pub(crate) enum Node {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(Arc<String>),
    Array(Arc<Array>),
    Object(Arc<Object>),
}

impl Value {
    // === Constants for inline values ===

    /// The `undefined` value.
    pub const UNDEFINED: Self = Self {
        node: Node::Undefined,
    };

    /// The `null` value.
    pub const NULL: Self = Self { node: Node::Null };

    /// The `true` value.
    pub const TRUE: Self = Self {
        node: Node::Bool(true),
    };

    /// The `false` value.
    pub const FALSE: Self = Self {
        node: Node::Bool(false),
    };

    // === Constructors ===

    /// Create an `undefined` value.
    pub const fn undefined() -> Self {
        Self::UNDEFINED
    }

    /// Create a `null` value.
    pub const fn null() -> Self {
        Self::NULL
    }

    /// Create a boolean value.
    pub const fn bool(b: bool) -> Self {
        Self {
            node: Node::Bool(b),
        }
    }

    /// Create a number value.
    pub const fn number(n: f64) -> Self {
        Self {
            node: Node::Number(n),
        }
    }

    /// Create a string value. An owned `String` is moved in without copying.
    pub fn string(s: impl Into<String>) -> Self {
        Self {
            node: Node::String(Arc::new(s.into())),
        }
    }

    /// Create an array value.
    pub fn array(items: Array) -> Self {
        Self {
            node: Node::Array(Arc::new(items)),
        }
    }

    /// Create an object value.
    pub fn object(entries: Object) -> Self {
        Self {
            node: Node::Object(Arc::new(entries)),
        }
    }

    // === Type inspection ===

    /// Returns the type of this value.
    #[inline]
    pub fn value_type(&self) -> ValueType {
        match &self.node {
            Node::Undefined => ValueType::Undefined,
            Node::Null => ValueType::Null,
            Node::Bool(_) => ValueType::Bool,
            Node::Number(_) => ValueType::Number,
            Node::String(_) => ValueType::String,
            Node::Array(_) => ValueType::Array,
            Node::Object(_) => ValueType::Object,
        }
    }

    /// Returns `true` if this is `undefined`.
    #[inline]
    pub fn is_undefined(&self) -> bool {
        self.value_type() == ValueType::Undefined
    }

    /// Returns `true` if this is `null`.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.value_type() == ValueType::Null
    }

    /// Returns `true` if this is a boolean.
    #[inline]
    pub fn is_bool(&self) -> bool {
        self.value_type() == ValueType::Bool
    }

    /// Returns `true` if this is a number.
    #[inline]
    pub fn is_number(&self) -> bool {
        self.value_type() == ValueType::Number
    }

    /// Returns `true` if this is a string.
    #[inline]
    pub fn is_string(&self) -> bool {
        self.value_type() == ValueType::String
    }

    /// Returns `true` if this is an array.
    #[inline]
    pub fn is_array(&self) -> bool {
        self.value_type() == ValueType::Array
    }

    /// Returns `true` if this is an object.
    #[inline]
    pub fn is_object(&self) -> bool {
        self.value_type() == ValueType::Object
    }

    // === Lenient accessors ===

    /// The enclosed boolean, or `false` for any other type.
    pub fn bool_value(&self) -> bool {
        matches!(self.node, Node::Bool(true))
    }

    /// The enclosed number, or `0.0` for any other type.
    pub fn number_value(&self) -> f64 {
        match self.node {
            Node::Number(n) => n,
            _ => 0.0,
        }
    }

    /// The enclosed string, or `""` for any other type.
    pub fn string_value(&self) -> &str {
        match &self.node {
            Node::String(s) => s.as_str(),
            _ => "",
        }
    }

    /// The enclosed elements, or an empty slice for any other type.
    pub fn array_items(&self) -> &[Value] {
        match &self.node {
            Node::Array(items) => items.as_slice(),
            _ => &[],
        }
    }

    /// The enclosed entries, or an empty map for any other type.
    pub fn object_items(&self) -> &Object {
        match &self.node {
            Node::Object(entries) => entries,
            _ => &EMPTY_OBJECT,
        }
    }

    // === Strict accessors ===

    /// Returns the boolean if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self.node {
            Node::Bool(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the number if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self.node {
            Node::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the string if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match &self.node {
            Node::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the elements if this is an array.
    pub fn as_array(&self) -> Option<&Array> {
        match &self.node {
            Node::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the entries if this is an object.
    pub fn as_object(&self) -> Option<&Object> {
        match &self.node {
            Node::Object(entries) => Some(entries),
            _ => None,
        }
    }

    // === Lookup ===

    /// Element `index` of an array, or `None` on a miss or a non-array.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.as_array().and_then(|items| items.get(index))
    }

    /// Entry `key` of an object, or `None` on a miss or a non-object.
    pub fn get_key(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|entries| entries.get(key))
    }

    /// Number of elements (arrays) or entries (objects); zero for anything else.
    pub fn len(&self) -> usize {
        match &self.node {
            Node::Array(items) => items.len(),
            Node::Object(entries) => entries.len(),
            _ => 0,
        }
    }

    /// Returns `true` if [`len`](Self::len) is zero.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if both handles share the same heap node.
    ///
    /// Scalars are stored inline and never share a node, so this is always
    /// `false` for undefined, null, booleans and numbers.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.node, &other.node) {
            (Node::String(a), Node::String(b)) => Arc::ptr_eq(a, b),
            (Node::Array(a), Node::Array(b)) => Arc::ptr_eq(a, b),
            (Node::Object(a), Node::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

// === Index ===

impl Index<usize> for Value {
    type Output = Value;

    /// Element `index`, or [`Value::UNDEFINED`] on a miss or a non-array.
    fn index(&self, index: usize) -> &Value {
        self.get(index).unwrap_or(&UNDEFINED)
    }
}

impl Index<&str> for Value {
    type Output = Value;

    /// Entry `key`, or [`Value::UNDEFINED`] on a miss or a non-object.
    fn index(&self, key: &str) -> &Value {
        self.get_key(key).unwrap_or(&UNDEFINED)
    }
}

// === Debug ===

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.node {
            Node::Undefined => f.write_str("undefined"),
            Node::Null => f.write_str("null"),
            Node::Bool(b) => Debug::fmt(b, f),
            Node::Number(n) => Debug::fmt(n, f),
            Node::String(s) => Debug::fmt(s.as_str(), f),
            Node::Array(items) => f.debug_list().entries(items.iter()).finish(),
            Node::Object(entries) => f.debug_map().entries(entries.iter()).finish(),
        }
    }
}

// === Default ===

impl Default for Value {
    fn default() -> Self {
        Self::UNDEFINED
    }
}

// === From implementations ===

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Self::NULL
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::bool(b)
    }
}

macro_rules! impl_from_number {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Self::number(n as f64)
                }
            }
        )*
    };
}

impl_from_number!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::string(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Self::string(s.as_str())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::string(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::array(items.into_iter().map(Into::into).collect())
    }
}

impl From<Object> for Value {
    fn from(entries: Object) -> Self {
        Self::object(entries)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Self::NULL,
        }
    }
}

// === FromIterator implementations ===

impl<T: Into<Value>> FromIterator<T> for Value {
    /// Collect into an array value.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::array(iter.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    /// Collect key-value pairs into an object value. Later pairs replace
    /// earlier ones with the same key.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::object(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
