//! # HTTP Server Module
//!
//! The transport layer: axum router, request handlers, response envelopes,
//! and the status-code mapping for the service error taxonomy.
//!
//! # Endpoints
//!
//! - `POST /api/users` - create a user
//! - `GET /api/users` - list users, most recent first
//! - `GET /api/users/:id` - fetch a user
//! - `PATCH /api/users/:id` - partial update
//! - `DELETE /api/users/:id` - delete a user
//! - `GET /health` - health check

pub mod config;
pub mod errors;
pub mod response;
pub mod server;
pub mod user_routes;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
pub use user_routes::user_routes;
