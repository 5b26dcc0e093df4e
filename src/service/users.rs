//! # User Service
//!
//! Business operations over the `users` collection. Holds no state of its
//! own: every method is a single pass from input to store operation to
//! normalized result.

use crate::model::{CreateUser, UpdateUser, User};
use crate::observability::Logger;
use crate::store::{StoreError, UserStore};

use super::errors::{ServiceError, ServiceResult};

/// User business logic, generic over the store
pub struct UserService<S: UserStore> {
    store: S,
}

impl<S: UserStore> UserService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Create a user after checking no other user holds the email.
    ///
    /// The pre-check is not atomic with the insert; the store's unique
    /// index is what actually closes that race.
    pub fn create(&self, input: CreateUser) -> ServiceResult<User> {
        if let Some(existing) = self
            .store
            .find_by_email(&input.email)
            .map_err(normalize)?
        {
            return Err(ServiceError::DuplicateEmail(existing.email));
        }

        let user = self.store.insert(&input).map_err(normalize)?;

        Logger::info(
            "USER_CREATED",
            &[("id", &user.id.to_string()), ("email", &user.email)],
        );
        Ok(user)
    }

    /// All users, most recent first
    pub fn list(&self) -> ServiceResult<Vec<User>> {
        self.store.find_all().map_err(normalize)
    }

    /// Single user by id
    pub fn get(&self, id: &str) -> ServiceResult<User> {
        self.store
            .find_by_id(id)
            .map_err(normalize)?
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))
    }

    /// Partial update; returns the record's state after the update
    pub fn update(&self, id: &str, update: UpdateUser) -> ServiceResult<User> {
        let user = self
            .store
            .update(id, &update)
            .map_err(normalize)?
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))?;

        Logger::info("USER_UPDATED", &[("id", id)]);
        Ok(user)
    }

    /// Delete by id; deleting an absent record reports NotFound
    pub fn delete(&self, id: &str) -> ServiceResult<()> {
        let removed = self.store.delete(id).map_err(normalize)?;
        if !removed {
            return Err(ServiceError::NotFound(id.to_string()));
        }

        Logger::info("USER_DELETED", &[("id", id)]);
        Ok(())
    }
}

/// Rewrap store errors into the service taxonomy, exhaustively by kind
fn normalize(err: StoreError) -> ServiceError {
    match err {
        StoreError::DuplicateKey { value, .. } => ServiceError::DuplicateEmail(value),
        StoreError::InvalidId(id) => ServiceError::InvalidId(id),
        StoreError::Validation(e) => ServiceError::Validation(e.to_string()),
        StoreError::Internal(msg) => ServiceError::Internal(msg),
    }
}
