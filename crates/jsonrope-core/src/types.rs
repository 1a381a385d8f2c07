//! The JSON value tree and object-key model.
//!
//! Objects are `Vec<(Key, Value)>` rather than a map: insertion order is
//! preserved without depending on `IndexMap`, and duplicate keys can exist
//! in the tree; whether they are an error is the encoder's call, via
//! [`Maps::Strict`](crate::encoder::Maps).

use std::fmt;
use std::sync::Arc;

use crate::ext::ToFragments;

/// An in-memory JSON document.
///
/// Integers and floats are separate variants (the distinction survives a
/// round trip); `i128` is the widest integer the host offers. Strings are
/// UTF-8. The `Ext` variant carries a user type that renders itself through
/// its [`ToFragments`] hook.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i128),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    /// Key-value pairs in insertion order. May contain duplicates.
    Object(Vec<(Key, Value)>),
    /// A user value encoded by its extension hook.
    Ext(Arc<dyn ToFragments>),
}

impl Value {
    /// Wrap a user type that encodes itself through [`ToFragments`].
    pub fn ext<T: ToFragments + 'static>(value: T) -> Self {
        Value::Ext(Arc::new(value))
    }

    /// Build an object from anything yielding key-value pairs.
    pub fn object<K, I>(pairs: I) -> Self
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Object(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            // Extensions have no structural identity; compare by pointer.
            (Value::Ext(a), Value::Ext(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// An object key.
///
/// `Str` is an ordinary string key. `Sym` mirrors identifier-like symbolic
/// names that are not themselves strings; both forms escape identically, so
/// a `Str("id")` and a `Sym("id")` collide under strict map encoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Str(String),
    Sym(&'static str),
}

impl Key {
    /// A symbolic key.
    pub fn sym(name: &'static str) -> Self {
        Key::Sym(name)
    }

    /// Coerce any displayable value into a string key. This is the boundary
    /// for non-string key types: integers, UUIDs, whatever renders itself.
    pub fn display<T: fmt::Display>(value: T) -> Self {
        Key::Str(value.to_string())
    }

    /// The key's textual form, the bytes that get escaped into the output.
    pub fn text(&self) -> &str {
        match self {
            Key::Str(s) => s,
            Key::Sym(s) => s,
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Str(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! value_from_int {
    ($($t:ty),*) => {$(
        impl From<$t> for Value {
            fn from(n: $t) -> Self {
                Value::Int(n as i128)
            }
        }
    )*};
}

value_from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f64::from(f))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

impl FromIterator<(Key, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (Key, Value)>>(iter: I) -> Self {
        Value::Object(iter.into_iter().collect())
    }
}

/// Decode-side conversion. `serde_json`'s `preserve_order` feature keeps
/// object insertion order intact across this boundary.
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i128::from(i))
                } else if let Some(u) = n.as_u64() {
                    Value::Int(i128::from(u))
                } else {
                    n.as_f64().map_or(Value::Null, Value::Float)
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (Key::Str(k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}
