//! usersvc - a minimal user management HTTP service backed by a document store

pub mod cli;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod service;
pub mod store;
