#![allow(dead_code)]

use axum_test::TestServer;
use sqlx::SqlitePool;
use snipurl::routes::app_router;
use snipurl::state::AppState;

pub const TEST_BASE_URL: &str = "http://short.test";

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(pool, TEST_BASE_URL)
}

pub fn create_test_server(pool: SqlitePool) -> TestServer {
    TestServer::new(app_router(create_test_state(pool))).unwrap()
}

pub async fn create_test_link(pool: &SqlitePool, code: &str, url: &str) {
    sqlx::query("INSERT INTO links (code, original_url) VALUES (?1, ?2)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn get_hit_count(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT hit_count FROM links WHERE code = ?1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_links(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn all_codes(pool: &SqlitePool) -> Vec<String> {
    sqlx::query_scalar("SELECT code FROM links ORDER BY id")
        .fetch_all(pool)
        .await
        .unwrap()
}

/// Extracts the code shown between `<code>` tags on the result page.
pub fn code_from_page(body: &str) -> String {
    let start = body.find("<code>").expect("result page shows a code") + "<code>".len();
    let end = body[start..].find("</code>").unwrap() + start;
    body[start..end].to_string()
}

/// Undoes HTML escaping of '/' so links can be matched verbatim.
pub fn unescape_slashes(body: &str) -> String {
    body.replace("&#x2f;", "/").replace("&#47;", "/")
}
