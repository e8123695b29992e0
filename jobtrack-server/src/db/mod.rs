//! Database layer - connection pool, schema bootstrap, and record stores
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections) - no Arc<Mutex<Connection>>
//! - One statement per store call, `RETURNING` instead of re-select
//! - Conditional DELETE with affected-row check - no fetch-then-delete
//! - Concurrency on the same row is left to Postgres; last write wins

pub mod pool;
pub mod migrations;
pub mod store;
pub mod memory;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options};
pub use store::{ApplicationStore, StoreError};
pub use memory::MemoryApplicationStore;
pub use repos::PgApplicationRepo;
