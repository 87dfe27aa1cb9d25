use crate::common;
use dashboard_service::api::health::HealthResponse;

#[tokio::test]
async fn test_health_endpoint() {
    let server = common::gateway(None);

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: HealthResponse = response.json();
    assert_eq!(body.status, "healthy");
    assert_eq!(body.service, "dashboard");
    assert!(body.timestamp.timestamp() > 0);
}

#[tokio::test]
async fn test_health_needs_no_auth() {
    let server = common::gateway(None);

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert!(body.get("status").is_some());
    assert!(body.get("service").is_some());
    assert!(body.get("timestamp").is_some());
}
