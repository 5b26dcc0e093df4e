//! # Observability
//!
//! Structured JSON logging for server lifecycle and user mutations.

pub mod logger;

pub use logger::{Logger, Severity};
