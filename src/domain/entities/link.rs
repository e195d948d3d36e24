//! Short link entity representing a stored URL mapping.

use chrono::{DateTime, Utc};

/// A stored mapping from a short code to its destination URL.
///
/// `code` is unique across all records. `hit_count` only ever grows; links are
/// never deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub id: i64,
    pub code: String,
    pub original_url: String,
    pub hit_count: i64,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(
        id: i64,
        code: String,
        original_url: String,
        hit_count: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            code,
            original_url,
            hit_count,
            created_at,
        }
    }
}

/// Input data for persisting a new short link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortLink {
    pub code: String,
    pub original_url: String,
}

/// Aggregate counters over the whole link table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkTotals {
    pub links: i64,
    pub hits: i64,
}
