use std::result;

use thiserror::Error;

use crate::{AggregateOp, ElementKind};

pub type Result<T, E = Error> = result::Result<T, E>;

/// Error types for listdb operations.
///
/// Every variant is raised before the list is touched, so a failed call leaves
/// the collection exactly as it was.
#[derive(Debug, Error)]
pub enum Error {
    #[cfg(feature = "serde_json")]
    #[error(transparent)]
    SerdeJSON(#[from] serde_json::Error),

    // Bounds
    #[error("Index {index} is out of bounds (must be less than {bound})")]
    OutOfRange { index: usize, bound: usize },

    // Element validation
    #[error("Invalid value of type '{found}' for list of '{expected}'")]
    TypeMismatch { expected: ElementKind, found: String },
    #[error("Invalid null value for non-optional '{expected}'")]
    NullNotAllowed { expected: ElementKind },
    #[error("Object has no resolved schema and cannot be added to a list")]
    UninitializedSchema,
    #[error("Object of type '{found}' does not match the schema of list type '{expected}'")]
    SchemaMismatch { expected: String, found: String },

    // Schema lookups
    #[error("Schema '{0}' is not known to the resolver")]
    UnknownSchema(String),
    #[error("Schema '{0}' is already registered")]
    DuplicateSchema(String),
    #[error("Property '{property}' does not exist on object of type '{schema}'")]
    UnknownProperty { schema: String, property: String },
    #[error("Primary key '{property}' of '{schema}' must be a scalar property")]
    InvalidPrimaryKey { schema: String, property: String },

    // Queries
    #[error("{op} is not supported for {ty} property")]
    UnsupportedAggregate { op: AggregateOp, ty: String },
    #[error("Key paths with multiple segments are not supported on unmanaged lists: '{0}'")]
    UnresolvedNestedPath(String),
    #[error("{0}")]
    UnsupportedOperation(&'static str),

    // Batches
    #[error("Index count {indexes} does not match value count {values}")]
    CountMismatch { indexes: usize, values: usize },
}

impl Error {
    pub(crate) fn out_of_range(index: usize, bound: usize) -> Self {
        Self::OutOfRange { index, bound }
    }
}
