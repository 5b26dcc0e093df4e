//! Store Invariant Tests
//!
//! Invariants of the document store and the service layer above it:
//! - the unique-email index resolves concurrent duplicate creates to a
//!   single winner (the create pre-check alone cannot)
//! - listing order is creation time descending, deterministic under ties
//! - both delete-of-absent semantics stay observable: the store primitive
//!   reports silent success, the service reports NotFound

use std::sync::Arc;
use std::thread;

use usersvc::model::{CreateUser, UpdateUser};
use usersvc::service::{ServiceError, UserService};
use usersvc::store::{MemoryStore, StoreError, UserStore};
use uuid::Uuid;

fn input(email: &str) -> CreateUser {
    CreateUser {
        email: email.to_string(),
        name: None,
        age: None,
    }
}

// =============================================================================
// Uniqueness Under Concurrency
// =============================================================================

/// The uniqueness pre-check in create is not atomic with the insert; the
/// store's unique-email index is checked under the insert's write lock, so
/// exactly one of N concurrent duplicate creates wins.
#[test]
fn test_concurrent_creates_same_email_single_winner() {
    let store = Arc::new(MemoryStore::new());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || store.insert(&input("raced@x.com")).is_ok())
        })
        .collect();

    let successes = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|&ok| ok)
        .count();

    assert_eq!(successes, 1);
    assert_eq!(store.find_all().unwrap().len(), 1);
}

/// Same race through the full service path (pre-check plus insert).
#[test]
fn test_concurrent_service_creates_single_winner() {
    let service = Arc::new(UserService::new(MemoryStore::new()));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = Arc::clone(&service);
            thread::spawn(move || service.create(input("raced@x.com")).is_ok())
        })
        .collect();

    let successes = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|&ok| ok)
        .count();

    assert_eq!(successes, 1);
    assert_eq!(service.list().unwrap().len(), 1);
}

// =============================================================================
// Ordering
// =============================================================================

/// Listing order is newest first and deterministic even when creation
/// timestamps collide (insertion sequence breaks the tie).
#[test]
fn test_listing_order_is_reverse_insertion() {
    let store = MemoryStore::new();

    let mut inserted = Vec::new();
    for i in 0..20 {
        let user = store.insert(&input(&format!("user{}@x.com", i))).unwrap();
        inserted.push(user.id);
    }

    let listed: Vec<Uuid> = store.find_all().unwrap().iter().map(|u| u.id).collect();
    inserted.reverse();
    assert_eq!(listed, inserted);
}

// =============================================================================
// Delete Semantics
// =============================================================================

/// The store primitive keeps the source's silent-success branch: deleting
/// an absent record is Ok(false), not an error.
#[test]
fn test_store_delete_absent_silently_reports_false() {
    let store = MemoryStore::new();
    let missing = Uuid::new_v4().to_string();

    assert_eq!(store.delete(&missing).unwrap(), false);
}

/// The service layer resolves the ambiguity the other way: absence is
/// reported as NotFound.
#[test]
fn test_service_delete_absent_is_not_found() {
    let service = UserService::new(MemoryStore::new());
    let missing = Uuid::new_v4().to_string();

    assert_eq!(
        service.delete(&missing).unwrap_err(),
        ServiceError::NotFound(missing)
    );
}

// =============================================================================
// Identifier Classification
// =============================================================================

/// Malformed and absent identifiers are distinct outcomes at every layer.
#[test]
fn test_malformed_and_absent_ids_are_distinct() {
    let store = MemoryStore::new();

    assert!(matches!(
        store.find_by_id("42").unwrap_err(),
        StoreError::InvalidId(_)
    ));
    assert_eq!(store.find_by_id(&Uuid::new_v4().to_string()).unwrap(), None);

    let service = UserService::new(MemoryStore::new());
    assert!(matches!(
        service.get("42").unwrap_err(),
        ServiceError::InvalidId(_)
    ));
    assert!(matches!(
        service.get(&Uuid::new_v4().to_string()).unwrap_err(),
        ServiceError::NotFound(_)
    ));
}

// =============================================================================
// Update Semantics
// =============================================================================

/// An empty partial update is a no-op that still returns the record.
#[test]
fn test_empty_update_returns_unchanged_record() {
    let service = UserService::new(MemoryStore::new());
    let user = service
        .create(CreateUser {
            email: "a@x.com".to_string(),
            name: Some("Alice".to_string()),
            age: Some(30),
        })
        .unwrap();

    let updated = service
        .update(&user.id.to_string(), UpdateUser::default())
        .unwrap();
    assert_eq!(updated, user);
}
