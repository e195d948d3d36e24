//! SQLite persistence: connection pool, migrations and repository
//! implementations.
//!
//! - [`database`] - Pool construction, migrations and connectivity check
//! - [`SqliteLinkRepository`] - Link storage and retrieval

pub mod database;
pub mod sqlite_link_repository;

pub use sqlite_link_repository::SqliteLinkRepository;
