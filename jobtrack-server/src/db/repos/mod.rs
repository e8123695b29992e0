//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - One statement per call, `RETURNING` for write results
//! - Conditional writes report absence via affected rows

pub mod applications;

pub use applications::PgApplicationRepo;
