//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL storage via SeaORM
//! - `seed` - Deterministic fake posts for demos and tests

pub mod database;
pub mod memory;

#[cfg(feature = "seed")]
pub mod seed;

pub use database::DatabaseConfig;
pub use memory::InMemoryPostRepository;

#[cfg(feature = "postgres")]
pub use database::{DatabaseConnections, PostgresPostRepository};
