//! Web API Thread Tests
//!
//! Integration tests for the /api/threads/:board endpoints.

use axum_test::TestServer;
use serde_json::{json, Value};
use std::sync::Arc;

use anonboard::config::WebConfig;
use anonboard::web::create_router;
use anonboard::web::handlers::AppState;
use anonboard::Database;

/// Create a test server with an in-memory database.
async fn create_test_server() -> TestServer {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");
    let app_state = Arc::new(AppState::new(db));
    let router = create_router(app_state, &WebConfig::default());

    TestServer::new(router).expect("Failed to create test server")
}

/// Post a thread and return its id as seen by the board listing.
async fn post_thread(server: &TestServer, board: &str, text: &str, password: &str) -> String {
    let response = server
        .post(&format!("/api/threads/{board}"))
        .form(&json!({ "text": text, "delete_password": password }))
        .await;
    assert_eq!(response.status_code(), 303);

    let threads: Value = server.get(&format!("/api/threads/{board}")).await.json();
    threads[0]["_id"].as_str().expect("thread id").to_string()
}

#[tokio::test]
async fn test_list_empty_board() {
    let server = create_test_server().await;

    let response = server.get("/api/threads/empty").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_create_thread_redirects_to_board() {
    let server = create_test_server().await;

    let response = server
        .post("/api/threads/test")
        .form(&json!({ "text": "hi", "delete_password": "p1" }))
        .await;

    assert_eq!(response.status_code(), 303);
    assert_eq!(response.header("location"), "/b/test/");
}

#[tokio::test]
async fn test_created_thread_appears_in_listing() {
    let server = create_test_server().await;
    post_thread(&server, "test", "hi", "p1").await;

    let body: Value = server.get("/api/threads/test").await.json();
    let threads = body.as_array().unwrap();
    assert_eq!(threads.len(), 1);

    let thread = &threads[0];
    assert_eq!(thread["text"], "hi");
    assert_eq!(thread["replycount"], 0);
    assert_eq!(thread["replies"].as_array().unwrap().len(), 0);
    assert_eq!(thread["created_on"], thread["bumped_on"]);
}

#[tokio::test]
async fn test_listing_omits_sensitive_fields() {
    let server = create_test_server().await;
    post_thread(&server, "test", "hi", "p1").await;

    let body: Value = server.get("/api/threads/test").await.json();
    let thread = &body.as_array().unwrap()[0];
    assert!(thread.get("delete_password").is_none());
    assert!(thread.get("reported").is_none());
}

#[tokio::test]
async fn test_listing_caps_at_ten_threads() {
    let server = create_test_server().await;

    for i in 0..11 {
        server
            .post("/api/threads/test")
            .form(&json!({ "text": format!("t{i}"), "delete_password": "pw" }))
            .await;
    }

    let body: Value = server.get("/api/threads/test").await.json();
    let threads = body.as_array().unwrap();
    assert_eq!(threads.len(), 10);

    // Most recently bumped first; the very first thread fell off the page
    assert_eq!(threads[0]["text"], "t10");
    assert!(threads.iter().all(|t| t["text"] != "t0"));
}

#[tokio::test]
async fn test_listing_is_scoped_to_board() {
    let server = create_test_server().await;
    post_thread(&server, "one", "on board one", "pw").await;

    let body: Value = server.get("/api/threads/two").await.json();
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_report_thread() {
    let server = create_test_server().await;
    let thread_id = post_thread(&server, "test", "hi", "p1").await;

    let response = server
        .put("/api/threads/test")
        .form(&json!({ "thread_id": thread_id }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.text(), "reported");

    // Reporting is idempotent
    let response = server
        .put("/api/threads/test")
        .form(&json!({ "thread_id": thread_id }))
        .await;
    assert_eq!(response.text(), "reported");
}

#[tokio::test]
async fn test_report_missing_thread_still_acknowledges() {
    let server = create_test_server().await;

    let response = server
        .put("/api/threads/test")
        .form(&json!({ "thread_id": "does-not-exist" }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.text(), "reported");
}

#[tokio::test]
async fn test_delete_thread_with_wrong_password() {
    let server = create_test_server().await;
    let thread_id = post_thread(&server, "test", "hi", "p1").await;

    let response = server
        .delete("/api/threads/test")
        .form(&json!({ "thread_id": thread_id, "delete_password": "wrong" }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.text(), "incorrect password");

    // Thread is still listed
    let body: Value = server.get("/api/threads/test").await.json();
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_thread_with_correct_password() {
    let server = create_test_server().await;
    let thread_id = post_thread(&server, "test", "hi", "p1").await;

    let response = server
        .delete("/api/threads/test")
        .form(&json!({ "thread_id": thread_id, "delete_password": "p1" }))
        .await;
    assert_eq!(response.text(), "success");

    let body: Value = server.get("/api/threads/test").await.json();
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_delete_missing_thread() {
    let server = create_test_server().await;

    let response = server
        .delete("/api/threads/test")
        .form(&json!({ "thread_id": "does-not-exist", "delete_password": "pw" }))
        .await;
    assert_eq!(response.text(), "no thread found");
}

#[tokio::test]
async fn test_create_thread_with_empty_text() {
    let server = create_test_server().await;

    let response = server
        .post("/api/threads/test")
        .form(&json!({ "text": "", "delete_password": "pw" }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.text(), "error");
}

#[tokio::test]
async fn test_full_lifecycle() {
    let server = create_test_server().await;

    // Create, list, report, fail a delete, then delete
    let thread_id = post_thread(&server, "test", "hi", "p1").await;

    let response = server
        .put("/api/threads/test")
        .form(&json!({ "thread_id": thread_id }))
        .await;
    assert_eq!(response.text(), "reported");

    let response = server
        .delete("/api/threads/test")
        .form(&json!({ "thread_id": thread_id, "delete_password": "nope" }))
        .await;
    assert_eq!(response.text(), "incorrect password");

    let response = server
        .delete("/api/threads/test")
        .form(&json!({ "thread_id": thread_id, "delete_password": "p1" }))
        .await;
    assert_eq!(response.text(), "success");

    let body: Value = server.get("/api/threads/test").await.json();
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = create_test_server().await;
    let response = server.get("/health").await;
    response.assert_status_ok();
    assert_eq!(response.text(), "OK");
}

#[tokio::test]
async fn test_unknown_route_is_plain_not_found() {
    let server = create_test_server().await;
    let response = server.get("/api/unknown").await;
    assert_eq!(response.status_code(), 404);
    assert_eq!(response.text(), "Not Found");
}

#[tokio::test]
async fn test_security_headers_present() {
    let server = create_test_server().await;
    let response = server.get("/api/threads/test").await;
    assert_eq!(response.header("x-content-type-options"), "nosniff");
    assert_eq!(response.header("x-frame-options"), "DENY");
}
