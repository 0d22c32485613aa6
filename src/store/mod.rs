//! Read-only record store.
//!
//! Holds the user, profile and product tables for the lifetime of the
//! process. The store is built once at startup and shared behind an `Arc`;
//! nothing mutates it afterwards, so concurrent readers need no locking.

mod records;
mod seed;

use std::collections::HashSet;

pub use records::{Product, Profile, User};

/// A record with an integer identity, unique within its type.
pub trait Record: Send + Sync + 'static {
    /// Type name used in errors and logs.
    const KIND: &'static str;

    fn id(&self) -> i32;
}

/// Access to the table holding records of type `R`.
pub trait Table<R: Record> {
    fn rows(&self) -> &[R];
}

/// Errors returned by store lookups and construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: i32 },

    #[error("duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: i32 },
}

/// Immutable in-memory tables of users, profiles and products.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    users: Vec<User>,
    profiles: Vec<Profile>,
    products: Vec<Product>,
}

impl RecordStore {
    /// Build a store from explicit tables, rejecting duplicate identities.
    pub fn new(
        users: Vec<User>,
        profiles: Vec<Profile>,
        products: Vec<Product>,
    ) -> Result<Self, StoreError> {
        ensure_unique(&users)?;
        ensure_unique(&profiles)?;
        ensure_unique(&products)?;
        Ok(Self {
            users,
            profiles,
            products,
        })
    }

    /// The built-in tables served by the central process.
    pub fn seeded() -> Self {
        Self {
            users: seed::users(),
            profiles: seed::profiles(),
            products: seed::products(),
        }
    }

    /// Every record of type `R`, in definition order.
    pub fn list_all<R: Record>(&self) -> &[R]
    where
        Self: Table<R>,
    {
        Table::<R>::rows(self)
    }

    /// The record of type `R` whose identity equals `id`.
    ///
    /// Linear scan; tables are small and fixed.
    pub fn get_by_id<R: Record>(&self, id: i32) -> Result<&R, StoreError>
    where
        Self: Table<R>,
    {
        Table::<R>::rows(self)
            .iter()
            .find(|record| record.id() == id)
            .ok_or(StoreError::NotFound { kind: R::KIND, id })
    }
}

impl Table<User> for RecordStore {
    fn rows(&self) -> &[User] {
        &self.users
    }
}

impl Table<Profile> for RecordStore {
    fn rows(&self) -> &[Profile] {
        &self.profiles
    }
}

impl Table<Product> for RecordStore {
    fn rows(&self) -> &[Product] {
        &self.products
    }
}

fn ensure_unique<R: Record>(records: &[R]) -> Result<(), StoreError> {
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.id()) {
            return Err(StoreError::DuplicateId {
                kind: R::KIND,
                id: record.id(),
            });
        }
    }
    Ok(())
}
