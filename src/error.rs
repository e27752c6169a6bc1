//! Error types for the record-type factory.

use thiserror::Error;

/// Main error type for factory and instance operations.
#[derive(Debug, Error)]
pub enum FactoryError {
    #[error("Invalid definition: {0}")]
    InvalidDefinition(String),

    #[error("Excess arguments: {supplied} supplied, {declared} declared")]
    ExcessArguments { supplied: usize, declared: usize },

    #[error("Index {index} out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Unknown method: {0}")]
    UnknownMethod(String),

    #[error("Type mismatch: {0}")]
    TypeMismatch(String),
}

/// Result type for factory operations.
pub type Result<T> = std::result::Result<T, FactoryError>;
