//! # Service Layer
//!
//! Stateless business logic between the HTTP handlers and the document
//! store: uniqueness checks, store-error normalization, mutation logging.

pub mod errors;
pub mod users;

pub use errors::{ServiceError, ServiceResult};
pub use users::UserService;
