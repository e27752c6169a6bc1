//! Dynamic values stored in record fields.

use indexmap::IndexMap;
use std::fmt;

use crate::error::{FactoryError, Result};
use crate::records::RecordInstance;
use crate::types::Key;

/// A dynamically-typed value held in a record slot.
///
/// `Value::Null` doubles as the unset marker: a field that was not supplied
/// at construction time holds `Null` until assigned.
#[derive(Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Map(IndexMap<String, Value>),
    Record(RecordInstance),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Short name of the value's kind, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Record(_) => "record",
        }
    }

    /// Resolve a key against this value during a `dig` traversal.
    ///
    /// Records resolve strictly through their own `get`. Lists and maps
    /// resolve their own key kind leniently: a missing entry yields `Null`,
    /// which the caller then short-circuits on. Anything else cannot be
    /// indexed into and is a type mismatch.
    pub(crate) fn lookup(&self, key: &Key) -> Result<Value> {
        match (self, key) {
            (Value::Record(record), key) => record.get(key.clone()).cloned(),
            (Value::List(items), Key::Index(i)) => {
                Ok(items.get(*i).cloned().unwrap_or(Value::Null))
            }
            (Value::Map(map), Key::Name(name)) => {
                Ok(map.get(name).cloned().unwrap_or(Value::Null))
            }
            (value, key) => Err(FactoryError::TypeMismatch(format!(
                "cannot dig into {} with key {key}",
                value.kind()
            ))),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "{s:?}"),
            Value::List(items) => f.debug_list().entries(items).finish(),
            Value::Map(map) => f.debug_map().entries(map.iter()).finish(),
            Value::Record(record) => record.fmt(f),
        }
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(map: IndexMap<String, Value>) -> Self {
        Value::Map(map)
    }
}

impl From<RecordInstance> for Value {
    fn from(record: RecordInstance) -> Self {
        Value::Record(record)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Value::Null)
    }
}
