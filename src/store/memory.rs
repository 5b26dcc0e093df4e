//! # In-Memory Document Store
//!
//! `RwLock`-guarded document store for the `users` collection. Each
//! operation runs entirely under the lock, so the unique-email index is
//! checked atomically with the insert that depends on it.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::{CreateUser, UpdateUser, User};

use super::errors::{StoreError, StoreResult};
use super::UserStore;

/// A stored document plus its insertion sequence number
///
/// The sequence breaks creation-time ties so listing order stays
/// deterministic even when two inserts land on the same timestamp.
#[derive(Debug, Clone)]
struct StoredUser {
    user: User,
    seq: u64,
}

/// The `users` collection
#[derive(Debug, Default)]
struct Collection {
    documents: HashMap<Uuid, StoredUser>,
    next_seq: u64,
}

/// In-memory document store
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<Collection>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an id string into the store's identifier format
    fn parse_id(id: &str) -> StoreResult<Uuid> {
        Uuid::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_string()))
    }

    fn read(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, Collection>> {
        self.users
            .read()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, Collection>> {
        self.users
            .write()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))
    }
}

impl UserStore for MemoryStore {
    fn insert(&self, input: &CreateUser) -> StoreResult<User> {
        input.validate()?;

        let mut coll = self.write()?;

        // Unique-email index, checked under the same write lock as the
        // insert: concurrent duplicate creates resolve to a single winner.
        if coll.documents.values().any(|d| d.user.email == input.email) {
            return Err(StoreError::DuplicateKey {
                field: "email",
                value: input.email.clone(),
            });
        }

        let user = User {
            id: Uuid::new_v4(),
            email: input.email.clone(),
            name: input.name.clone(),
            age: input.age,
            created_at: Utc::now(),
        };

        let seq = coll.next_seq;
        coll.next_seq += 1;
        coll.documents.insert(
            user.id,
            StoredUser {
                user: user.clone(),
                seq,
            },
        );

        Ok(user)
    }

    fn find_all(&self) -> StoreResult<Vec<User>> {
        let coll = self.read()?;

        let mut docs: Vec<&StoredUser> = coll.documents.values().collect();
        docs.sort_by(|a, b| sort_key(b).cmp(&sort_key(a)));

        Ok(docs.into_iter().map(|d| d.user.clone()).collect())
    }

    fn find_by_id(&self, id: &str) -> StoreResult<Option<User>> {
        let id = Self::parse_id(id)?;
        let coll = self.read()?;
        Ok(coll.documents.get(&id).map(|d| d.user.clone()))
    }

    fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let coll = self.read()?;
        Ok(coll
            .documents
            .values()
            .find(|d| d.user.email == email)
            .map(|d| d.user.clone()))
    }

    fn update(&self, id: &str, update: &UpdateUser) -> StoreResult<Option<User>> {
        let id = Self::parse_id(id)?;
        let mut coll = self.write()?;

        let Some(existing) = coll.documents.get(&id) else {
            return Ok(None);
        };

        let merged = existing.user.merge(update);
        merged.validate()?;

        // Re-check the unique-email index when the email changes
        if merged.email != existing.user.email
            && coll
                .documents
                .values()
                .any(|d| d.user.id != id && d.user.email == merged.email)
        {
            return Err(StoreError::DuplicateKey {
                field: "email",
                value: merged.email,
            });
        }

        let doc = coll
            .documents
            .get_mut(&id)
            .ok_or_else(|| StoreError::Internal("document vanished under lock".to_string()))?;
        doc.user = merged.clone();

        Ok(Some(merged))
    }

    fn delete(&self, id: &str) -> StoreResult<bool> {
        let id = Self::parse_id(id)?;
        let mut coll = self.write()?;
        Ok(coll.documents.remove(&id).is_some())
    }
}

fn sort_key(doc: &StoredUser) -> (DateTime<Utc>, u64) {
    (doc.user.created_at, doc.seq)
}
