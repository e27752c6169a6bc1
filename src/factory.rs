//! Factory entry points for defining record types.

use std::sync::Arc;
use tracing::debug;

use crate::error::Result;
use crate::records::{RecordType, RecordTypeBuilder};
use crate::registry::TypeRegistry;

/// Produces [`RecordType`] descriptors from field lists.
///
/// The factory never owns process-wide state: if a registry capability was
/// injected, named types are handed to it after creation; otherwise naming
/// a type has no side effect.
pub struct RecordTypeFactory {
    registry: Option<Arc<dyn TypeRegistry>>,
}

impl RecordTypeFactory {
    /// A factory with no registration side channel.
    pub fn new() -> Self {
        Self { registry: None }
    }

    /// A factory that registers named types with the given collaborator.
    pub fn with_registry(registry: Arc<dyn TypeRegistry>) -> Self {
        Self {
            registry: Some(registry),
        }
    }

    /// Define an anonymous record type from ordered field names.
    pub fn create(&self, fields: &[&str]) -> Result<Arc<RecordType>> {
        self.create_with(None, fields, |builder| builder)
    }

    /// Define a named record type. The name is registered if this factory
    /// carries a registry.
    pub fn create_named(&self, name: &str, fields: &[&str]) -> Result<Arc<RecordType>> {
        self.create_with(Some(name), fields, |builder| builder)
    }

    /// Full form: optional name, ordered field names, and an extension hook.
    ///
    /// The hook runs exactly once, after the built-in shape is assembled and
    /// before the type is finalized, and may attach extension methods via
    /// the builder it receives.
    pub fn create_with<F>(
        &self,
        name: Option<&str>,
        fields: &[&str],
        extend: F,
    ) -> Result<Arc<RecordType>>
    where
        F: FnOnce(RecordTypeBuilder) -> RecordTypeBuilder,
    {
        let mut builder = RecordTypeBuilder::new().fields(fields.iter().copied());
        if let Some(name) = name {
            builder = builder.named(name);
        }
        let ty = extend(builder).build()?;
        debug!(name = ?ty.name(), fields = ty.len(), "created record type");

        if let (Some(registry), Some(name)) = (&self.registry, ty.name()) {
            registry.register(name, Arc::clone(&ty))?;
            debug!(name, "registered record type");
        }
        Ok(ty)
    }
}

impl Default for RecordTypeFactory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FactoryError;
    use crate::registry::NamespaceRegistry;
    use crate::value::Value;

    #[test]
    fn test_create_anonymous() {
        let factory = RecordTypeFactory::new();
        let ty = factory.create(&["x", "y"]).unwrap();
        assert_eq!(ty.name(), None);
        assert_eq!(ty.fields(), ["x", "y"]);
    }

    #[test]
    fn test_create_named_without_registry() {
        let factory = RecordTypeFactory::new();
        let ty = factory.create_named("Point", &["x", "y"]).unwrap();
        assert_eq!(ty.name(), Some("Point"));
    }

    #[test]
    fn test_create_named_registers() {
        let registry = Arc::new(NamespaceRegistry::new());
        let factory = RecordTypeFactory::with_registry(registry.clone());

        let ty = factory.create_named("Point", &["x", "y"]).unwrap();
        let found = registry.lookup("Point").unwrap();
        assert!(Arc::ptr_eq(&found, &ty));
    }

    #[test]
    fn test_create_rejects_invalid_fields() {
        let factory = RecordTypeFactory::new();
        assert!(matches!(
            factory.create(&[]),
            Err(FactoryError::InvalidDefinition(_))
        ));
        assert!(matches!(
            factory.create(&["x", "x"]),
            Err(FactoryError::InvalidDefinition(_))
        ));
    }

    #[test]
    fn test_extension_hook_runs_once() {
        let factory = RecordTypeFactory::new();
        let mut calls = 0;
        let ty = factory
            .create_with(None, &["x"], |builder| {
                calls += 1;
                builder.method("zero", |_, _| Ok(Value::Int(0)))
            })
            .unwrap();
        assert_eq!(calls, 1);

        let instance = ty.construct(vec![]).unwrap();
        assert_eq!(instance.call("zero", &[]).unwrap(), Value::Int(0));
    }
}
