//! # Data Model
//!
//! The user entity, its create/update inputs, and field validation.

pub mod user;

pub use user::{CreateUser, UpdateUser, User, ValidationError};
