//! Record type descriptors.
//!
//! A [`RecordType`] is a data-driven description of a record shape: an
//! ordered list of unique field names, an optional type name, and any
//! extension methods attached while the type was being defined. Instances
//! interpret the descriptor rather than each type generating its own code.

use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{FactoryError, Result};
use crate::records::RecordInstance;
use crate::types::is_identifier;
use crate::value::Value;

/// An extension method attached to a record type.
///
/// Invoked with the receiving instance and positional arguments.
pub type Method = Arc<dyn Fn(&RecordInstance, &[Value]) -> Result<Value> + Send + Sync>;

/// Immutable descriptor of a record shape.
///
/// Created once by [`RecordTypeBuilder::build`] (usually via the factory),
/// then shared read-only by every instance. Field order is significant: it
/// defines positional indexes and construction-argument order, and it never
/// changes after creation.
pub struct RecordType {
    name: Option<String>,
    fields: Vec<String>,
    methods: IndexMap<String, Method>,
}

impl RecordType {
    /// The type name, if one was given at definition time.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Field names in declaration order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Position of a field name, if declared.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f == name)
    }

    /// Extension method by name, if one was attached.
    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.get(name)
    }

    /// Names of attached extension methods, in attachment order.
    pub fn method_names(&self) -> impl Iterator<Item = &str> {
        self.methods.keys().map(String::as_str)
    }

    /// Construct an instance from positional values, in field order.
    ///
    /// Supplying fewer values than fields is fine: the remaining slots hold
    /// [`Value::Null`]. Supplying more is an error.
    pub fn construct(self: &Arc<Self>, values: Vec<Value>) -> Result<RecordInstance> {
        if values.len() > self.fields.len() {
            return Err(FactoryError::ExcessArguments {
                supplied: values.len(),
                declared: self.fields.len(),
            });
        }
        let mut values = values;
        values.resize(self.fields.len(), Value::Null);
        Ok(RecordInstance::new(Arc::clone(self), values))
    }
}

impl fmt::Debug for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RecordType({}, fields: {:?})",
            self.name.as_deref().unwrap_or("<anonymous>"),
            self.fields
        )
    }
}

/// Mutable, in-progress definition of a [`RecordType`].
///
/// This is what the factory's extension hook receives: the built-in shape is
/// already present, and the hook may attach methods before the type is
/// finalized by [`build`](Self::build).
pub struct RecordTypeBuilder {
    name: Option<String>,
    fields: Vec<String>,
    methods: IndexMap<String, Method>,
}

impl RecordTypeBuilder {
    pub fn new() -> Self {
        Self {
            name: None,
            fields: Vec::new(),
            methods: IndexMap::new(),
        }
    }

    /// Set the type name used for registration.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Append one field.
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.fields.push(name.into());
        self
    }

    /// Append fields in order.
    pub fn fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(names.into_iter().map(Into::into));
        self
    }

    /// Attach an extension method. A later attachment under the same name
    /// replaces the earlier one.
    pub fn method<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&RecordInstance, &[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        self.methods.insert(name.into(), Arc::new(f));
        self
    }

    /// Validate and finalize the descriptor.
    ///
    /// Fails with `InvalidDefinition` on an empty field list, a field or
    /// type name that is not a plain identifier, or a duplicate field name.
    pub fn build(self) -> Result<Arc<RecordType>> {
        if self.fields.is_empty() {
            return Err(FactoryError::InvalidDefinition(
                "record type needs at least one field".to_string(),
            ));
        }
        if let Some(name) = &self.name {
            if !is_identifier(name) {
                return Err(FactoryError::InvalidDefinition(format!(
                    "invalid type name: {name:?}"
                )));
            }
        }
        for (i, field) in self.fields.iter().enumerate() {
            if !is_identifier(field) {
                return Err(FactoryError::InvalidDefinition(format!(
                    "invalid field name: {field:?}"
                )));
            }
            if self.fields[..i].contains(field) {
                return Err(FactoryError::InvalidDefinition(format!(
                    "duplicate field name: {field}"
                )));
            }
        }
        Ok(Arc::new(RecordType {
            name: self.name,
            fields: self.fields,
            methods: self.methods,
        }))
    }
}

impl Default for RecordTypeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_basic() {
        let ty = RecordTypeBuilder::new()
            .named("Point")
            .fields(["x", "y"])
            .build()
            .unwrap();
        assert_eq!(ty.name(), Some("Point"));
        assert_eq!(ty.fields(), ["x", "y"]);
        assert_eq!(ty.len(), 2);
        assert_eq!(ty.index_of("y"), Some(1));
        assert_eq!(ty.index_of("z"), None);
    }

    #[test]
    fn test_build_rejects_empty_fields() {
        let result = RecordTypeBuilder::new().build();
        assert!(matches!(result, Err(FactoryError::InvalidDefinition(_))));
    }

    #[test]
    fn test_build_rejects_duplicate_field() {
        let result = RecordTypeBuilder::new().fields(["a", "b", "a"]).build();
        assert!(matches!(result, Err(FactoryError::InvalidDefinition(_))));
    }

    #[test]
    fn test_build_rejects_bad_names() {
        let result = RecordTypeBuilder::new().field("not valid").build();
        assert!(matches!(result, Err(FactoryError::InvalidDefinition(_))));

        let result = RecordTypeBuilder::new().named("3D").field("x").build();
        assert!(matches!(result, Err(FactoryError::InvalidDefinition(_))));
    }

    #[test]
    fn test_construct_pads_missing_values() {
        let ty = RecordTypeBuilder::new().fields(["x", "y"]).build().unwrap();
        let instance = ty.construct(vec![Value::from(1)]).unwrap();
        assert_eq!(instance.values(), [Value::Int(1), Value::Null]);
    }

    #[test]
    fn test_construct_rejects_excess_values() {
        let ty = RecordTypeBuilder::new().fields(["x", "y"]).build().unwrap();
        let result = ty.construct(vec![Value::from(1), Value::from(2), Value::from(3)]);
        assert!(matches!(
            result,
            Err(FactoryError::ExcessArguments {
                supplied: 3,
                declared: 2
            })
        ));
    }
}
