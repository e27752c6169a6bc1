//! Record instances and their accessor surface.

use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{FactoryError, Result};
use crate::records::RecordType;
use crate::types::Key;
use crate::value::Value;

/// A value conforming to a [`RecordType`]: one slot per declared field,
/// stored in declaration order.
///
/// The type handle is shared and read-only; the value slots are owned by
/// this instance and mutable in place. Mutation takes `&mut self`, so
/// sharing an instance across threads for writing requires external
/// synchronization.
#[derive(Clone)]
pub struct RecordInstance {
    ty: Arc<RecordType>,
    values: Vec<Value>,
}

impl RecordInstance {
    pub(crate) fn new(ty: Arc<RecordType>, values: Vec<Value>) -> Self {
        debug_assert_eq!(ty.len(), values.len());
        Self { ty, values }
    }

    /// The descriptor this instance conforms to.
    pub fn record_type(&self) -> &Arc<RecordType> {
        &self.ty
    }

    /// Whether two instances share the exact same record type.
    pub fn same_type(&self, other: &RecordInstance) -> bool {
        Arc::ptr_eq(&self.ty, &other.ty)
    }

    /// Number of declared fields (independent of how many slots are unset).
    pub fn len(&self) -> usize {
        self.ty.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ty.is_empty()
    }

    /// Field names in declaration order.
    pub fn members(&self) -> &[String] {
        self.ty.fields()
    }

    /// Stored values in declaration order, unset slots included as `Null`.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Resolve a key to a slot position, or fail.
    fn resolve(&self, key: &Key) -> Result<usize> {
        match key {
            Key::Index(index) => {
                if *index < self.values.len() {
                    Ok(*index)
                } else {
                    Err(FactoryError::IndexOutOfBounds {
                        index: *index,
                        len: self.values.len(),
                    })
                }
            }
            Key::Name(name) => self
                .ty
                .index_of(name)
                .ok_or_else(|| FactoryError::UnknownField(name.clone())),
        }
    }

    /// Value at an index or field name.
    pub fn get(&self, key: impl Into<Key>) -> Result<&Value> {
        let slot = self.resolve(&key.into())?;
        Ok(&self.values[slot])
    }

    /// Assign the slot at an index or field name.
    pub fn set(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Result<()> {
        let slot = self.resolve(&key.into())?;
        self.values[slot] = value.into();
        Ok(())
    }

    /// Field-name-to-value mapping, iterating in declaration order.
    pub fn to_hash(&self) -> IndexMap<String, Value> {
        self.ty
            .fields()
            .iter()
            .cloned()
            .zip(self.values.iter().cloned())
            .collect()
    }

    /// Values in declaration order. Each call starts over from the front.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    /// `(name, value)` pairs in declaration order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.ty
            .fields()
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }

    /// Values at the given positions, in the order the positions were given.
    pub fn values_at(&self, indexes: &[usize]) -> Result<Vec<Value>> {
        indexes
            .iter()
            .map(|&index| self.get(index).cloned())
            .collect()
    }

    /// Values for which the predicate holds, preserving declaration order.
    pub fn select<P>(&self, predicate: P) -> Vec<Value>
    where
        P: Fn(&Value) -> bool,
    {
        self.values
            .iter()
            .filter(|v| predicate(v))
            .cloned()
            .collect()
    }

    /// Chained nested lookup.
    ///
    /// Keys resolve left to right, the first against this instance. A `Null`
    /// at any step short-circuits the whole traversal to `Null` — a missing
    /// intermediate is not an error. A non-null intermediate resolves the
    /// next key through its own lookup (nested records strictly, lists and
    /// maps leniently); values with no lookup capability fail with
    /// `TypeMismatch`.
    pub fn dig(&self, keys: &[Key]) -> Result<Value> {
        let mut current = Value::Record(self.clone());
        for key in keys {
            if current.is_null() {
                return Ok(Value::Null);
            }
            current = current.lookup(key)?;
        }
        Ok(current)
    }

    /// Structural equality, checked.
    ///
    /// Instances of the same record type compare element-wise over their
    /// values. Comparing across different record types is a `TypeMismatch`
    /// rather than `false`; use `==` for the lenient form.
    pub fn try_eq(&self, other: &RecordInstance) -> Result<bool> {
        if !self.same_type(other) {
            return Err(FactoryError::TypeMismatch(format!(
                "cannot compare {} with {}",
                self.ty.name().unwrap_or("<anonymous>"),
                other.ty.name().unwrap_or("<anonymous>"),
            )));
        }
        Ok(self.values == other.values)
    }

    /// Invoke an extension method attached to this instance's type.
    pub fn call(&self, method: &str, args: &[Value]) -> Result<Value> {
        let f = self
            .ty
            .method(method)
            .ok_or_else(|| FactoryError::UnknownMethod(method.to_string()))?;
        f(self, args)
    }
}

impl PartialEq for RecordInstance {
    fn eq(&self, other: &Self) -> bool {
        self.same_type(other) && self.values == other.values
    }
}

impl<'a> IntoIterator for &'a RecordInstance {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for RecordInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct(self.ty.name().unwrap_or("Record"));
        for (name, value) in self.pairs() {
            s.field(name, value);
        }
        s.finish()
    }
}
