use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::common;

#[tokio::test]
async fn test_csv_export_contract() {
    // exports never touch the registry
    let server = common::gateway(None);

    let response = server
        .post("/api/reports/csv")
        .authorization_bearer(common::TOKEN)
        .json(&json!({
            "filename": "transit audit",
            "rows": [
                { "tracking_code": "TRK-0007", "status": "received", "pages": 12 },
                { "tracking_code": "TRK-0008", "remarks": null, "current_agency": { "agency_id": 1 } }
            ]
        }))
        .await;
    response.assert_status_ok();

    assert_eq!(response.header("content-type"), "text/csv");
    assert_eq!(
        response.header("content-disposition"),
        "attachment; filename=\"transit audit.csv\""
    );

    let body = response.text();
    let mut lines = body.lines();
    // union of keys in first-seen order
    assert_eq!(
        lines.next().unwrap(),
        "tracking_code,status,pages,remarks,current_agency"
    );
    assert_eq!(lines.next().unwrap(), "TRK-0007,received,12,,");
    // nested values render as compact json, quoted by the csv writer
    assert_eq!(
        lines.next().unwrap(),
        "TRK-0008,,,,\"{\"\"agency_id\"\":1}\""
    );
}

#[tokio::test]
async fn test_excel_export_is_an_xlsx_download() {
    let server = common::gateway(None);

    let response = server
        .post("/api/reports/excel")
        .authorization_bearer(common::TOKEN)
        .json(&json!({ "rows": [ { "tracking_code": "TRK-0007" } ] }))
        .await;
    response.assert_status_ok();

    assert_eq!(
        response.header("content-type"),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert_eq!(
        response.header("content-disposition"),
        "attachment; filename=\"report.xlsx\""
    );
    // xlsx files are zip archives
    let body = response.as_bytes();
    assert_eq!(&body[..2], b"PK");
}

#[tokio::test]
async fn test_empty_rows_are_rejected() {
    let server = common::gateway(None);

    for path in ["/api/reports/csv", "/api/reports/excel"] {
        let response = server
            .post(path)
            .authorization_bearer(common::TOKEN)
            .json(&json!({ "rows": [] }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "rows must not be empty");
    }
}
