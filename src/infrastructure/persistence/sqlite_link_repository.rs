//! SQLite implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// SQLite repository for link storage and retrieval.
///
/// All statements are prepared with bound parameters. Click increments are a
/// single `UPDATE ... RETURNING` so concurrent redirects never lose a count.
pub struct SqliteLinkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct LinkRow {
    id: i64,
    short_code: String,
    original_url: String,
    clicks: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(r: LinkRow) -> Self {
        Link::new(
            r.id,
            r.short_code,
            r.original_url,
            r.clicks,
            r.created_at,
            r.updated_at,
        )
    }
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let now = Utc::now();

        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (original_url, short_code, clicks, created_at, updated_at)
            VALUES (?, ?, 0, ?, ?)
            RETURNING id, short_code, original_url, clicks, created_at, updated_at
            "#,
        )
        .bind(&new_link.original_url)
        .bind(&new_link.short_code)
        .bind(now)
        .bind(now)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, short_code, original_url, clicks, created_at, updated_at
            FROM links
            WHERE short_code = ?
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        let rows = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, short_code, original_url, clicks, created_at, updated_at
            FROM links
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn save(&self, link: &Link) -> Result<Link, AppError> {
        // clicks only moves forward, even if `link` was read before a redirect landed.
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            UPDATE links
            SET original_url = ?,
                clicks = MAX(clicks, ?),
                updated_at = ?
            WHERE id = ?
            RETURNING id, short_code, original_url, clicks, created_at, updated_at
            "#,
        )
        .bind(&link.original_url)
        .bind(link.clicks)
        .bind(Utc::now())
        .bind(link.id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Link::from).ok_or_else(AppError::url_not_found)
    }

    async fn delete(&self, link: &Link) -> Result<(), AppError> {
        sqlx::query("DELETE FROM links WHERE id = ?")
            .bind(link.id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn increment_clicks(&self, link: &Link) -> Result<Link, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            UPDATE links
            SET clicks = clicks + 1,
                updated_at = ?
            WHERE id = ?
            RETURNING id, short_code, original_url, clicks, created_at, updated_at
            "#,
        )
        .bind(Utc::now())
        .bind(link.id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Link::from).ok_or_else(AppError::url_not_found)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
