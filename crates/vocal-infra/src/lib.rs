//! # Vocal Infrastructure
//!
//! Concrete implementations of the ports defined in `vocal-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL store via SeaORM
//! - `minimal` - No external dependencies, in-memory store only

pub mod database;

pub use database::{DatabaseConfig, InMemoryBlogRepository};

#[cfg(feature = "postgres")]
pub use database::PostgresBlogRepository;
