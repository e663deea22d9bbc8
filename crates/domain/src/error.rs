//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The HTTP method is not supported.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// A variable was given an empty (or whitespace-only) name.
    #[error("Variable name is required!")]
    EmptyVariableName,

    /// A catalog index does not point at a stored template.
    #[error("no request at index {index} (catalog holds {len})")]
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// Number of templates in the catalog.
        len: usize,
    },
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
