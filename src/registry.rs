//! Process-wide namespace for named record types.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{FactoryError, Result};
use crate::records::RecordType;

/// Where named types end up after creation.
///
/// The factory's only obligation is to hand `(name, type)` pairs to this
/// collaborator; storage and lookup semantics belong to the implementation.
pub trait TypeRegistry: Send + Sync {
    /// Bind a type under a name.
    fn register(&self, name: &str, ty: Arc<RecordType>) -> Result<()>;

    /// Look up a previously registered type.
    fn lookup(&self, name: &str) -> Option<Arc<RecordType>>;
}

/// In-memory namespace keyed by type name.
///
/// Safe to share across threads; reads don't block each other.
#[derive(Default)]
pub struct NamespaceRegistry {
    entries: RwLock<HashMap<String, Arc<RecordType>>>,
}

impl NamespaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Names of all registered types, in no particular order.
    pub fn names(&self) -> Vec<String> {
        self.entries.read().keys().cloned().collect()
    }
}

impl TypeRegistry for NamespaceRegistry {
    fn register(&self, name: &str, ty: Arc<RecordType>) -> Result<()> {
        let mut entries = self.entries.write();
        if entries.contains_key(name) {
            return Err(FactoryError::InvalidDefinition(format!(
                "type name already registered: {name}"
            )));
        }
        entries.insert(name.to_string(), ty);
        Ok(())
    }

    fn lookup(&self, name: &str) -> Option<Arc<RecordType>> {
        self.entries.read().get(name).cloned()
    }
}
