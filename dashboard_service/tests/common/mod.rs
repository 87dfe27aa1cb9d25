use axum::{Json, Router, routing::get, routing::post};
use axum_test::TestServer;
use dashboard_service::api::{self, context::AppState};
use serde_json::{Value, json};

pub const TOKEN: &str = "test-token";

/// A document as the registry would send it, including a field the gateway
/// does not model ("page_count") to prove pass-through fidelity
pub fn sample_document() -> Value {
    json!({
        "document_id": 7,
        "tracking_code": "TRK-0007",
        "document_code": "MEMO-2024-07",
        "document_type": "Memorandum",
        "classification": "Internal",
        "document_name": "Budget realignment",
        "originating_agency": { "agency_id": 1, "name": "Finance" },
        "current_agency": { "agency_id": 1, "name": "Finance" },
        "from_agency": null,
        "to_agency": null,
        "action_requested": null,
        "action_taken": null,
        "sender_action_id": null,
        "recipient_action_id": null,
        "released_at": null,
        "received_at": null,
        "completed_at": null,
        "viewed_at": null,
        "created_at": "2024-07-01T08:30:00Z",
        "updated_at": "2024-07-01T08:30:00Z",
        "status": "for_dispatch",
        "page_count": 12
    })
}

/// An agency as the registry would send it, again with an unmodelled field
/// ("head") to prove pass-through fidelity
pub fn sample_agency() -> Value {
    json!({
        "agency_id": 1,
        "code": "FIN",
        "name": "Finance",
        "address": null,
        "active": true,
        "created_at": "2024-01-15T00:00:00Z",
        "updated_at": "2024-01-15T00:00:00Z",
        "head": "J. Cruz"
    })
}

/// A mock registry that answers the happy path for the workflow test
pub fn happy_registry() -> Router {
    Router::new()
        .route("/documents", get(|| async { Json(json!([sample_document()])) }))
        .route(
            "/documents/{id}/complete",
            post(|| async { Json(sample_document()) }),
        )
}

/// Serve a mock registry on an ephemeral local port, returning its base url
pub async fn mock_registry(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// The gateway under test, pointed at the given registry base url (or none)
pub fn gateway(api_base_url: Option<String>) -> TestServer {
    TestServer::new(api::service(AppState::new(api_base_url))).unwrap()
}
