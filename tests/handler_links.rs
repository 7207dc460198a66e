mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use link_shortener::routes::app_router;
use serde_json::{Value, json};
use tower::ServiceExt;

#[tokio::test]
async fn test_create_link_success() {
    let server = common::make_server(common::test_pool().await);

    let response = server
        .post("/api/urls")
        .add_header("Host", "sho.rt:8080")
        .json(&json!({ "url": "openai.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    let code = body["short_code"].as_str().unwrap();
    assert_eq!(code.len(), 8);
    assert_eq!(body["original_url"], "https://openai.com");
    assert_eq!(body["short_url"], format!("sho.rt:8080/{code}"));
}

#[tokio::test]
async fn test_create_link_missing_url() {
    let server = common::make_server(common::test_pool().await);

    let response = server.post("/api/urls").json(&json!({})).await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "URL is required" })
    );
}

#[tokio::test]
async fn test_create_link_empty_url() {
    let server = common::make_server(common::test_pool().await);

    let response = server.post("/api/urls").json(&json!({ "url": "" })).await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"], "URL is required");
}

#[tokio::test]
async fn test_create_link_malformed_body() {
    let server = common::make_server(common::test_pool().await);

    let response = server.post("/api/urls").text("url=openai.com").await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"], "URL is required");
}

#[tokio::test]
async fn test_create_link_invalid_url() {
    let pool = common::test_pool().await;
    let server = common::make_server(pool.clone());

    let response = server
        .post("/api/urls")
        .json(&json!({ "url": "https://" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>()["error"],
        "invalid URL: missing host"
    );
    assert_eq!(common::link_count(&pool).await, 0);
}

#[tokio::test]
async fn test_list_links() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "list0001", "https://a.example.com").await;
    common::create_test_link(&pool, "list0002", "https://b.example.com").await;
    let server = common::make_server(pool);

    let response = server.get("/api/urls").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    let links = body.as_array().unwrap();
    assert_eq!(links.len(), 2);
    assert_eq!(links[0]["short_code"], "list0002");

    for field in [
        "id",
        "original_url",
        "short_code",
        "clicks",
        "created_at",
        "updated_at",
    ] {
        assert!(links[0].get(field).is_some(), "missing {field}");
    }
}

#[tokio::test]
async fn test_list_links_empty() {
    let server = common::make_server(common::test_pool().await);

    let response = server.get("/api/urls").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_get_link() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "get00001", "https://example.com/page").await;
    let server = common::make_server(pool);

    let response = server.get("/api/urls/get00001").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["short_code"], "get00001");
    assert_eq!(body["original_url"], "https://example.com/page");
    assert_eq!(body["clicks"], 0);
}

#[tokio::test]
async fn test_get_link_not_found() {
    let server = common::make_server(common::test_pool().await);

    let response = server.get("/api/urls/doesnotexist").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>(), json!({ "error": "URL not found" }));
}

#[tokio::test]
async fn test_update_link() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "upd00001", "https://old.example.com").await;
    let server = common::make_server(pool);

    let response = server
        .put("/api/urls/upd00001")
        .json(&json!({ "url": "new.example.com/x" }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["short_code"], "upd00001");
    assert_eq!(body["original_url"], "https://new.example.com/x");

    let fetched = server.get("/api/urls/upd00001").await.json::<Value>();
    assert_eq!(fetched["original_url"], "https://new.example.com/x");
}

#[tokio::test]
async fn test_update_link_not_found_wins_over_bad_body() {
    let server = common::make_server(common::test_pool().await);

    let response = server.put("/api/urls/missing1").json(&json!({})).await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"], "URL not found");
}

#[tokio::test]
async fn test_update_link_missing_url() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "upd00002", "https://example.com").await;
    let server = common::make_server(pool);

    let response = server.put("/api/urls/upd00002").json(&json!({})).await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"], "URL is required");
}

#[tokio::test]
async fn test_update_link_invalid_url() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "upd00003", "https://example.com").await;
    let server = common::make_server(pool);

    let response = server
        .put("/api/urls/upd00003")
        .json(&json!({ "url": "http://" }))
        .await;

    response.assert_status_bad_request();

    let fetched = server.get("/api/urls/upd00003").await.json::<Value>();
    assert_eq!(fetched["original_url"], "https://example.com");
}

#[tokio::test]
async fn test_delete_link() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "del00001", "https://example.com").await;
    let server = common::make_server(pool.clone());

    let response = server.delete("/api/urls/del00001").await;

    response.assert_status(StatusCode::NO_CONTENT);
    assert!(response.as_bytes().is_empty());
    assert_eq!(common::link_count(&pool).await, 0);

    server
        .get("/api/urls/del00001")
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_delete_link_not_found() {
    let server = common::make_server(common::test_pool().await);

    let response = server.delete("/api/urls/missing1").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"], "URL not found");
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "slash001", "https://example.com").await;
    let app = app_router(common::create_test_state(pool));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/urls/slash001/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_create_link_store_failure() {
    let pool = common::test_pool().await;
    common::fail_on(&pool, "INSERT").await;
    let server = common::make_server(pool.clone());

    let response = server
        .post("/api/urls")
        .json(&json!({ "url": "openai.com" }))
        .await;

    response.assert_status_internal_server_error();
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Failed to create short URL" })
    );
    assert_eq!(common::link_count(&pool).await, 0);
}

#[tokio::test]
async fn test_delete_link_store_failure() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "keep0001", "https://example.com").await;
    common::fail_on(&pool, "DELETE").await;
    let server = common::make_server(pool.clone());

    let response = server.delete("/api/urls/keep0001").await;

    response.assert_status_internal_server_error();
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Failed to delete URL" })
    );
    assert_eq!(common::link_count(&pool).await, 1);
}
