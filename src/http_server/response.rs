//! # Response Envelopes
//!
//! The `{success, message/data}` JSON wrappers returned by every endpoint.
//! Shapes match the original API contract, including the capitalized
//! `User` key on the create response.

use serde::Serialize;

use crate::model::User;

/// Envelope for a successful create (201)
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub message: String,
    #[serde(rename = "User")]
    pub user: User,
}

impl CreatedResponse {
    pub fn new(user: User) -> Self {
        Self {
            success: true,
            message: "User created successfully".to_string(),
            user,
        }
    }
}

/// Envelope for the list endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<User>,
}

impl ListResponse {
    pub fn new(data: Vec<User>) -> Self {
        let count = data.len();
        Self {
            success: true,
            count,
            data,
        }
    }
}

/// Envelope for a single fetched record
#[derive(Debug, Clone, Serialize)]
pub struct SingleResponse {
    pub success: bool,
    pub data: User,
}

impl SingleResponse {
    pub fn new(data: User) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Envelope for a successful update
#[derive(Debug, Clone, Serialize)]
pub struct UpdatedResponse {
    pub success: bool,
    pub message: String,
    pub data: User,
}

impl UpdatedResponse {
    pub fn new(id: &str, data: User) -> Self {
        Self {
            success: true,
            message: format!("User {} updated successfully", id),
            data,
        }
    }
}

/// Envelope for a successful delete
#[derive(Debug, Clone, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub message: String,
}

impl DeletedResponse {
    pub fn new(id: &str) -> Self {
        Self {
            success: true,
            message: format!("User {} deleted successfully", id),
        }
    }
}

/// Failure envelope, shared by every endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: String) -> Self {
        Self {
            success: false,
            message,
        }
    }
}
