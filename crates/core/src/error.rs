//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic input/domain failures. File and format
/// concerns belong to the importer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A price or quantity could not be parsed as an exact decimal.
    #[error("malformed numeric input for `{field}`: {value:?}")]
    MalformedNumericInput { field: String, value: String },

    /// A value failed validation (e.g. an empty group key).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn malformed_numeric(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::MalformedNumericInput {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Returns `true` for the numeric parsing failure kind.
    pub fn is_malformed_numeric(&self) -> bool {
        matches!(self, Self::MalformedNumericInput { .. })
    }
}
