use axum::http::StatusCode;
use axum::{Json, Router, routing::delete, routing::get};
use serde_json::{Value, json};

use crate::common;

#[tokio::test]
async fn test_agency_lookups_pass_through() {
    let registry = common::mock_registry(
        Router::new()
            .route(
                "/agencies",
                get(|| async { Json(json!([common::sample_agency()])) }),
            )
            .route(
                "/agencies/{id}",
                get(|| async { Json(common::sample_agency()) }),
            ),
    )
    .await;
    let server = common::gateway(Some(registry));

    let list_response = server
        .get("/api/agencies")
        .authorization_bearer(common::TOKEN)
        .await;
    list_response.assert_status_ok();
    let agencies: Value = list_response.json();
    assert_eq!(agencies[0]["name"], "Finance");

    let detail_response = server
        .get("/api/agencies/1")
        .authorization_bearer(common::TOKEN)
        .await;
    detail_response.assert_status_ok();
    // field-for-field identical, including the unmodelled "head"
    let agency: Value = detail_response.json();
    assert_eq!(agency, common::sample_agency());
    assert_eq!(agency["head"], "J. Cruz");
}

#[tokio::test]
async fn test_upstream_404_is_mirrored_not_masked() {
    let registry = common::mock_registry(Router::new().route(
        "/agencies/{id}",
        get(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": "agency not found" })),
            )
        }),
    ))
    .await;
    let server = common::gateway(Some(registry));

    let response = server
        .get("/api/agencies/42")
        .authorization_bearer(common::TOKEN)
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "agency not found");
}

#[tokio::test]
async fn test_delete_agency_returns_no_content() {
    let registry = common::mock_registry(Router::new().route(
        "/agencies/{id}",
        delete(|| async { StatusCode::NO_CONTENT }),
    ))
    .await;
    let server = common::gateway(Some(registry));

    let response = server
        .delete("/api/agencies/1")
        .authorization_bearer(common::TOKEN)
        .await;
    response.assert_status(StatusCode::NO_CONTENT);
}
