//! The value tree that `encode`/`decode` operate over, and its
//! borrowing counterpart, `ValueView`.

use std::fmt;

/// A value drawn from Poculum's closed, dynamically-typed value space.
///
/// `Null`, `false`, the integer `0`, the empty string, and the empty list
/// are all distinct values; tags in the wire format discriminate them
/// (see the tag table for the byte layout).
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    UInt(u64),
    Int(i64),
    Float(f64),
    String(String),
    Bytes(Vec<u8>),
    List(Vec<Value>),
    /// An ordered sequence of (key, value) pairs. Keys SHOULD be unique;
    /// the decoder does not enforce this and preserves every entry in
    /// the order it was decoded.
    Map(Vec<(String, Value)>),
}

impl Value {
    /// Convenience constructor for `Value::String` that accepts anything
    /// convertible to an owned `String`.
    pub fn string(value: impl Into<String>) -> Value {
        Value::String(value.into())
    }

    /// Convenience constructor for `Value::Map` built from an iterator of
    /// key/value pairs, preserving iteration order.
    pub fn map(entries: impl IntoIterator<Item = (String, Value)>) -> Value {
        Value::Map(entries.into_iter().collect())
    }

    pub fn as_map(&self) -> Option<&[(String, Value)]> {
        match self {
            Value::Map(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Value {
        Value::Bool(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Value {
        Value::UInt(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Value {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Value {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Value {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Value {
        Value::String(value.to_owned())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Value {
        Value::Bytes(value)
    }
}

/// A borrowing counterpart of [`Value`], returned by
/// [`decode_view`][crate::decode_view]. Strings and byte strings borrow
/// directly from the decoded buffer instead of allocating.
///
/// `ValueView` is not part of the round-trip/canonicality contract that
/// governs [`Value`] — it exists purely so that read-only callers can
/// avoid allocating. Use [`ValueView::to_owned_value`] to obtain an owned
/// [`Value`] when one is needed.
#[derive(Clone, Debug, PartialEq)]
pub enum ValueView<'a> {
    Null,
    Bool(bool),
    UInt(u64),
    Int(i64),
    Float(f64),
    String(&'a str),
    Bytes(&'a [u8]),
    List(Vec<ValueView<'a>>),
    Map(Vec<(&'a str, ValueView<'a>)>),
}

impl<'a> ValueView<'a> {
    /// Copies this view into an owned [`Value`] tree.
    pub fn to_owned_value(&self) -> Value {
        match self {
            ValueView::Null => Value::Null,
            ValueView::Bool(b) => Value::Bool(*b),
            ValueView::UInt(v) => Value::UInt(*v),
            ValueView::Int(v) => Value::Int(*v),
            ValueView::Float(v) => Value::Float(*v),
            ValueView::String(s) => Value::String((*s).to_owned()),
            ValueView::Bytes(b) => Value::Bytes(b.to_vec()),
            ValueView::List(items) => {
                Value::List(items.iter().map(ValueView::to_owned_value).collect())
            }
            ValueView::Map(entries) => Value::Map(
                entries
                    .iter()
                    .map(|(k, v)| ((*k).to_owned(), v.to_owned_value()))
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Null => write!(fmt, "null"),
            Value::Bool(b) => write!(fmt, "{}", b),
            Value::UInt(v) => write!(fmt, "{}", v),
            Value::Int(v) => write!(fmt, "{}", v),
            Value::Float(v) => write!(fmt, "{}", v),
            Value::String(s) => write!(fmt, "{:?}", s),
            Value::Bytes(b) => write!(fmt, "[{} bytes]", b.len()),
            Value::List(items) => write!(fmt, "[{} items]", items.len()),
            Value::Map(entries) => write!(fmt, "{{{} entries}}", entries.len()),
        }
    }
}
