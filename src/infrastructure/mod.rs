//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer on top of an
//! embedded SQLite database.
//!
//! - [`persistence`] - SQLite pool, migrations and repositories

pub mod persistence;
