//! # Document Store
//!
//! The persistence seam for user records. `UserStore` abstracts the
//! document store so the service layer never sees driver-specific error
//! shapes; failures come back as typed `StoreError` kinds.

pub mod errors;
pub mod memory;

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;

use crate::model::{CreateUser, UpdateUser, User};

/// Document store operations for the `users` collection
///
/// Identifiers cross this boundary as strings; each operation rejects
/// malformed ids with `StoreError::InvalidId` before touching the
/// collection, so "malformed" and "absent" stay distinguishable.
pub trait UserStore: Send + Sync {
    /// Insert a new user document, assigning its id and creation timestamp.
    ///
    /// Enforces the unique-email index atomically with the insert.
    fn insert(&self, input: &CreateUser) -> StoreResult<User>;

    /// All users, most recently created first
    fn find_all(&self) -> StoreResult<Vec<User>>;

    /// Find a user by id; `Ok(None)` when no record matches
    fn find_by_id(&self, id: &str) -> StoreResult<Option<User>>;

    /// Find a user by exact email
    fn find_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    /// Apply a partial update, re-validating the merged record.
    ///
    /// Returns `Ok(None)` when no record matches the id.
    fn update(&self, id: &str, update: &UpdateUser) -> StoreResult<Option<User>>;

    /// Delete by id; returns whether a record was actually removed
    fn delete(&self, id: &str) -> StoreResult<bool>;
}
