//! jobtrack-server: HTTP service for job application records
//!
//! Clients create, list, update, and delete applications (company,
//! position, status, applied date, notes). Records live in Postgres, or
//! in a process-local store for tests and throwaway runs.

pub mod db;
pub mod http;
pub mod models;
pub mod service;

use std::sync::Arc;

pub use db::{ApplicationStore, MemoryApplicationStore, PgApplicationRepo, StoreError};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
pub use service::{ApplicationService, ServiceError};

/// Connect to Postgres, ensure the schema exists, and wrap the pool in a
/// service.
///
/// # Example
///
/// ```ignore
/// let service = jobtrack_server::connect_postgres(&database_url, 5).await?;
/// ```
pub async fn connect_postgres(
    database_url: &str,
    max_connections: u32,
) -> Result<ApplicationService, StoreError> {
    let pool = db::create_pool_with_options(database_url, max_connections).await?;
    db::migrations::run(&pool).await?;
    Ok(ApplicationService::new(Arc::new(PgApplicationRepo::new(pool))))
}

/// Service over a fresh in-memory store
pub fn in_memory_service() -> ApplicationService {
    ApplicationService::new(Arc::new(MemoryApplicationStore::new()))
}
