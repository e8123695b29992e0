//! Store boundary shared by the Postgres repo and the in-memory store

use async_trait::async_trait;

use crate::models::{Application, NewApplication};

/// Persistence failure
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Persistence for application records.
///
/// Every method is a single round trip. Absence is reported through
/// `Option`/`bool`; only backend failures are errors.
#[async_trait]
pub trait ApplicationStore: Send + Sync {
    /// Insert a record; the store assigns the id.
    async fn insert(&self, new: NewApplication) -> Result<Application, StoreError>;

    /// Every record in natural scan order.
    async fn list(&self) -> Result<Vec<Application>, StoreError>;

    async fn get(&self, id: i32) -> Result<Option<Application>, StoreError>;

    /// Persist all mutable fields of `record`. `None` if the row is gone.
    async fn update(&self, record: &Application) -> Result<Option<Application>, StoreError>;

    /// Remove a record. `false` if nothing matched.
    async fn delete(&self, id: i32) -> Result<bool, StoreError>;

    async fn count(&self) -> Result<i64, StoreError>;
}
