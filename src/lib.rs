//! # Record Factory
//!
//! A runtime record-type factory: define a value type from an ordered list
//! of field names, then construct instances whose slots are accessible both
//! by name and by positional index.
//!
//! ## Core Concepts
//!
//! - **RecordType**: an immutable descriptor of field order and names
//! - **RecordInstance**: one value per field, mutable in place
//! - **Value**: the dynamic value model; `Null` marks unset slots
//! - **Registry**: an injected namespace where named types are bound
//!
//! ## Example
//!
//! ```
//! use record_factory::{RecordTypeFactory, Value};
//!
//! let factory = RecordTypeFactory::new();
//! let point = factory.create_named("Point", &["x", "y"])?;
//!
//! let mut p = point.construct(vec![1.into(), 2.into()])?;
//! assert_eq!(p.get("x")?, &Value::Int(1));
//! assert_eq!(p.get(1)?, &Value::Int(2));
//!
//! p.set("y", 20)?;
//! assert_eq!(p.values(), [Value::Int(1), Value::Int(20)]);
//! # Ok::<(), record_factory::FactoryError>(())
//! ```

pub mod error;
pub mod factory;
pub mod records;
pub mod registry;
pub mod types;
pub mod value;

// Re-exports
pub use error::{FactoryError, Result};
pub use factory::RecordTypeFactory;
pub use records::{Method, RecordInstance, RecordType, RecordTypeBuilder};
pub use registry::{NamespaceRegistry, TypeRegistry};
pub use types::Key;
pub use value::Value;
