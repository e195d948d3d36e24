//! Repository trait for short link data access.

use crate::domain::entities::{LinkTotals, NewShortLink, ShortLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short links.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new short link.
    ///
    /// Uniqueness of `code` is enforced by the store. Callers must not rely on
    /// a prior lookup to decide whether a code is free.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CodeConflict`] if the code already exists.
    /// Returns [`AppError::Database`] on other database errors.
    async fn insert(&self, new_link: NewShortLink) -> Result<ShortLink, AppError>;

    /// Finds a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError>;

    /// Atomically increments the hit counter of a link.
    ///
    /// Returns `Ok(false)` if no link has that id.
    async fn increment_hits(&self, id: i64) -> Result<bool, AppError>;

    /// Returns the number of links and the sum of their hit counters.
    async fn totals(&self) -> Result<LinkTotals, AppError>;
}
