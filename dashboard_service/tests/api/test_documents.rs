use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use axum::http::StatusCode;
use axum::{Json, Router, routing::get, routing::post};
use serde_json::{Value, json};

use crate::common;

#[tokio::test]
async fn test_documents_pass_through_unchanged() {
    let registry = common::mock_registry(common::happy_registry()).await;
    let server = common::gateway(Some(registry));

    let response = server
        .get("/api/documents")
        .authorization_bearer(common::TOKEN)
        .await;
    response.assert_status_ok();

    // fields the gateway does not model survive the round trip
    let body: Value = response.json();
    assert_eq!(body, json!([common::sample_document()]));
    assert_eq!(body[0]["page_count"], 12);
}

#[tokio::test]
async fn test_tab_listings_hit_their_own_registry_paths() {
    let registry = common::mock_registry(
        Router::new()
            .route("/received-documents", get(|| async { Json(json!([])) }))
            .route("/completed-documents", get(|| async { Json(json!([])) })),
    )
    .await;
    let server = common::gateway(Some(registry));

    for path in ["/api/received-documents", "/api/completed-documents"] {
        let response = server.get(path).authorization_bearer(common::TOKEN).await;
        response.assert_status_ok();
    }
}

#[tokio::test]
async fn test_complete_without_remarks_never_reaches_the_registry() {
    let hit = Arc::new(AtomicBool::new(false));
    let hit_recorder = hit.clone();
    let registry = common::mock_registry(Router::new().route(
        "/documents/{id}/complete",
        post(move || {
            hit_recorder.store(true, Ordering::SeqCst);
            async { Json(common::sample_document()) }
        }),
    ))
    .await;
    let server = common::gateway(Some(registry));

    let response = server
        .post("/api/documents/7/complete")
        .authorization_bearer(common::TOKEN)
        .json(&json!({}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("remarks"));
    assert!(!hit.load(Ordering::SeqCst));
}

#[tokio::test]
async fn test_release_without_destination_is_rejected() {
    let server = common::gateway(Some("http://127.0.0.1:1".to_string()));

    let response = server
        .post("/api/documents/7/release")
        .authorization_bearer(common::TOKEN)
        .json(&json!({ "action_id": 3 }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("destination agency"));
}

#[tokio::test]
async fn test_malformed_json_renders_the_error_contract() {
    // parse failure happens before any upstream call
    let server = common::gateway(Some("http://127.0.0.1:1".to_string()));

    let response = server
        .post("/api/documents/7/release")
        .authorization_bearer(common::TOKEN)
        .content_type("application/json")
        .bytes("not json at all".into())
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("JSON"));
}

#[tokio::test]
async fn test_upstream_errors_keep_their_status_and_message() {
    let registry = common::mock_registry(Router::new().route(
        "/documents/{id}/receive",
        post(|| async {
            (
                StatusCode::CONFLICT,
                Json(json!({ "message": "document is not in transit" })),
            )
        }),
    ))
    .await;
    let server = common::gateway(Some(registry));

    let response = server
        .post("/api/documents/7/receive")
        .authorization_bearer(common::TOKEN)
        .json(&json!({ "action_id": 2 }))
        .await;
    response.assert_status(StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["error"], "document is not in transit");
}
