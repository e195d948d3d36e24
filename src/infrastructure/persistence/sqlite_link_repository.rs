//! SQLite implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{LinkTotals, NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::{AppError, map_insert_error};

/// SQLite repository for link storage and retrieval.
///
/// Every method runs a single statement on a connection borrowed from the
/// pool; the connection goes back to the pool when the call returns, on both
/// success and error paths.
pub struct SqliteLinkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    code: String,
    original_url: String,
    hit_count: i64,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for ShortLink {
    fn from(r: LinkRow) -> Self {
        ShortLink::new(r.id, r.code, r.original_url, r.hit_count, r.created_at)
    }
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn insert(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (code, original_url, created_at)
            VALUES (?1, ?2, ?3)
            RETURNING id, code, original_url, hit_count, created_at
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.original_url)
        .bind(Utc::now())
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| map_insert_error(e, &new_link.code))?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, code, original_url, hit_count, created_at
            FROM links
            WHERE code = ?1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn increment_hits(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE links SET hit_count = hit_count + 1 WHERE id = ?1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn totals(&self) -> Result<LinkTotals, AppError> {
        let (links, hits): (i64, i64) =
            sqlx::query_as("SELECT COUNT(*), COALESCE(SUM(hit_count), 0) FROM links")
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(LinkTotals { links, hits })
    }
}
