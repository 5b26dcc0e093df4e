//! # Store Errors
//!
//! Typed errors surfaced by the document store. Callers classify failures
//! by matching on the kind, never by inspecting message strings.

use thiserror::Error;

use crate::model::ValidationError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Document store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A unique index rejected the write
    #[error("duplicate value for unique field '{field}': {value}")]
    DuplicateKey {
        field: &'static str,
        value: String,
    },

    /// The identifier is not well-formed for the store's id format
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Schema-level validation rejected the document
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Any other store failure
    #[error("store error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_message_names_value() {
        let err = StoreError::DuplicateKey {
            field: "email",
            value: "a@x.com".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("email"));
        assert!(msg.contains("a@x.com"));
    }

    #[test]
    fn test_validation_error_wraps() {
        let err = StoreError::from(ValidationError::MissingEmail);
        assert!(matches!(err, StoreError::Validation(_)));
        assert!(err.to_string().contains("email is required"));
    }
}
