//! # User Model
//!
//! The user entity and its create/update inputs.
//! Users are stored as documents in the `users` collection; the id and
//! creation timestamp are assigned by the store, never by the caller.

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Maximum length of the `name` profile field (characters)
pub const MAX_NAME_LEN: usize = 100;

/// Exclusive upper bound for the `age` profile field
pub const MAX_AGE: u32 = 150;

/// A stored user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (store-assigned, immutable)
    pub id: Uuid,

    /// User's email address (unique)
    pub email: String,

    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Age in years
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,

    /// When the user was created
    pub created_at: DateTime<Utc>,
}

/// User creation input
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub email: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub age: Option<u32>,
}

/// Partial update input
///
/// Absent fields are left untouched; `id` and `created_at` are immutable
/// and cannot appear here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUser {
    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub age: Option<u32>,
}

impl UpdateUser {
    /// Whether the update carries no fields at all
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.name.is_none() && self.age.is_none()
    }
}

/// Field-level validation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Email is required and must be non-empty
    #[error("email is required")]
    MissingEmail,

    /// Email does not look like `local@domain.tld`
    #[error("invalid email format: {0}")]
    InvalidEmail(String),

    /// Name exceeds the maximum length
    #[error("name exceeds {} characters", MAX_NAME_LEN)]
    NameTooLong,

    /// Age is out of the accepted range
    #[error("age must be below {}", MAX_AGE)]
    AgeOutOfRange,
}

impl CreateUser {
    /// Validate the creation input against the schema rules
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.email, self.name.as_deref(), self.age)
    }
}

impl User {
    /// Produce the record state after applying a partial update
    ///
    /// `id` and `created_at` are carried over unchanged.
    pub fn merge(&self, update: &UpdateUser) -> User {
        User {
            id: self.id,
            email: update.email.clone().unwrap_or_else(|| self.email.clone()),
            name: update.name.clone().or_else(|| self.name.clone()),
            age: update.age.or(self.age),
            created_at: self.created_at,
        }
    }

    /// Validate the record against the schema rules
    ///
    /// Runs on create and on the merged record during update, so an update
    /// cannot bypass schema-level validation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.email, self.name.as_deref(), self.age)
    }
}

fn validate_fields(
    email: &str,
    name: Option<&str>,
    age: Option<u32>,
) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    if !email_regex().is_match(email) {
        return Err(ValidationError::InvalidEmail(email.to_string()));
    }
    if let Some(name) = name {
        if name.chars().count() > MAX_NAME_LEN {
            return Err(ValidationError::NameTooLong);
        }
    }
    if let Some(age) = age {
        if age >= MAX_AGE {
            return Err(ValidationError::AgeOutOfRange);
        }
    }
    Ok(())
}

/// Compiled email pattern, built once
fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
    })
}
