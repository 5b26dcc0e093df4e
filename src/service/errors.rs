//! # Service Errors
//!
//! The error taxonomy exposed to the transport layer. Each variant carries
//! the human-readable message the caller sees in the response envelope.

use thiserror::Error;

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Business-layer errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Another user already holds this email
    #[error("a user with email {0} already exists")]
    DuplicateEmail(String),

    /// No record for the identifier
    #[error("user with id {0} not found")]
    NotFound(String),

    /// Malformed identifier, distinct from NotFound
    #[error("invalid user id: {0}")]
    InvalidId(String),

    /// Field validation failed
    #[error("validation failed: {0}")]
    Validation(String),

    /// Any other datastore failure
    #[error("internal error: {0}")]
    Internal(String),
}
