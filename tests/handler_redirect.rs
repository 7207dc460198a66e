mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_redirect_success() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "redirect", "https://example.com/target").await;
    let server = common::make_server(pool.clone());

    let response = server.get("/redirect").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com/target");
    assert_eq!(common::clicks_of(&pool, "redirect").await, 1);
}

#[tokio::test]
async fn test_redirect_not_found() {
    let pool = common::test_pool().await;
    let server = common::make_server(pool);

    let response = server.get("/nonexist").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>(), json!({ "error": "URL not found" }));
}

#[tokio::test]
async fn test_redirect_counts_every_visit() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "count001", "https://example.com").await;
    let server = common::make_server(pool.clone());

    for _ in 0..3 {
        server
            .get("/count001")
            .await
            .assert_status(StatusCode::FOUND);
    }

    assert_eq!(common::clicks_of(&pool, "count001").await, 3);
}

#[tokio::test]
async fn test_create_redirect_stats_flow() {
    let server = common::make_server(common::test_pool().await);

    let created = server
        .post("/api/urls")
        .json(&json!({ "url": "openai.com" }))
        .await;
    created.assert_status(StatusCode::CREATED);

    let body = created.json::<Value>();
    let code = body["short_code"].as_str().unwrap().to_string();
    assert_eq!(code.len(), 8);
    assert_eq!(body["original_url"], "https://openai.com");

    let redirect = server.get(&format!("/{code}")).await;
    redirect.assert_status(StatusCode::FOUND);
    assert_eq!(redirect.header("location"), "https://openai.com");

    let stats = server.get(&format!("/api/urls/{code}/stats")).await;
    stats.assert_status_ok();
    assert_eq!(stats.json::<Value>()["clicks"], 1);
}

#[tokio::test]
async fn test_landing_page() {
    let server = common::make_server(common::test_pool().await);

    let response = server.get("/").await;

    response.assert_status_ok();
    assert!(response.text().contains("<form"));
}

#[tokio::test]
async fn test_redirect_click_update_failure() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "broken01", "https://example.com").await;
    common::fail_on(&pool, "UPDATE").await;
    let server = common::make_server(pool.clone());

    let response = server.get("/broken01").await;

    response.assert_status_internal_server_error();
    assert!(response.headers().get("location").is_none());
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Failed to update click count" })
    );
    assert_eq!(common::clicks_of(&pool, "broken01").await, 0);
}
