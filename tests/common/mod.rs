#![allow(dead_code)]

use axum_test::TestServer;
use chrono::{DateTime, Utc};
use link_shortener::infrastructure::persistence::{connect, run_migrations};
use link_shortener::routes::router;
use link_shortener::state::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

/// File-backed database with several pooled connections, for tests that need
/// statements to really run side by side. Keep the `TempDir` alive.
pub async fn file_pool(max_connections: u32) -> (TempDir, SqlitePool) {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite://{}", dir.path().join("links.db").display());

    let pool = connect(&url, max_connections, Duration::from_secs(10))
        .await
        .unwrap();
    run_migrations(&pool).await.unwrap();

    (dir, pool)
}

/// Fresh in-memory database with the schema applied.
///
/// One connection only, so every query sees the same database.
pub async fn test_pool() -> SqlitePool {
    let pool = connect("sqlite::memory:", 1, Duration::from_secs(5))
        .await
        .unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(Arc::new(pool))
}

pub fn make_server(pool: SqlitePool) -> TestServer {
    TestServer::new(router(create_test_state(pool))).unwrap()
}

pub async fn create_test_link(pool: &SqlitePool, code: &str, url: &str) -> i64 {
    create_test_link_at(pool, code, url, Utc::now()).await
}

pub async fn create_test_link_at(
    pool: &SqlitePool,
    code: &str,
    url: &str,
    created_at: DateTime<Utc>,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO links (original_url, short_code, clicks, created_at, updated_at)
         VALUES (?, ?, 0, ?, ?) RETURNING id",
    )
    .bind(url)
    .bind(code)
    .bind(created_at)
    .bind(created_at)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn clicks_of(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT clicks FROM links WHERE short_code = ?")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn link_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Makes every `operation` (`INSERT`, `UPDATE` or `DELETE`) on `links` abort.
pub async fn fail_on(pool: &SqlitePool, operation: &str) {
    let sql = format!(
        "CREATE TRIGGER fail_{name} BEFORE {operation} ON links
         BEGIN SELECT RAISE(ABORT, 'disk on fire'); END",
        name = operation.to_lowercase()
    );

    sqlx::query(&sql).execute(pool).await.unwrap();
}
