//! The record store contract shared by every route handler.
//!
//! Two implementations: [`PgCafeStore`] over a Postgres pool for production,
//! and [`MemoryStore`] with the same semantics for tests and local runs.

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgCafeStore;

use crate::domain::cafe::{Cafe, NewCafe};
use async_trait::async_trait;

/// Failure kinds a store call can surface.
///
/// `NotFound` and `NameTaken` are recoverable and become structured JSON
/// responses at the route boundary; `Database` covers everything else from
/// the driver and surfaces as a 500.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("cafe not found")]
    NotFound,
    #[error("a cafe named '{0}' already exists")]
    NameTaken(String),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// The six persisted-record operations plus a connectivity probe.
///
/// Each call is one store round trip, auto-committed on success. Handlers
/// never cache records across requests; every request re-reads what it needs.
#[async_trait]
pub trait CafeStore: Send + Sync {
    /// Connectivity check backing the health endpoint.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Every record, storage order. The order is not guaranteed stable
    /// across calls.
    async fn all(&self) -> Result<Vec<Cafe>, StoreError>;

    /// The first record whose `location` matches exactly (lowest id), even
    /// when several records share the location.
    async fn find_by_location(&self, location: &str) -> Result<Option<Cafe>, StoreError>;

    /// Persists a new record with a store-assigned id. A `name` collision
    /// surfaces as [`StoreError::NameTaken`].
    async fn insert(&self, cafe: NewCafe) -> Result<Cafe, StoreError>;

    /// Sets `coffee_price` on the record with the given id.
    async fn update_price(&self, id: i32, new_price: &str) -> Result<(), StoreError>;

    /// Removes the record with the given id.
    async fn delete(&self, id: i32) -> Result<(), StoreError>;
}
