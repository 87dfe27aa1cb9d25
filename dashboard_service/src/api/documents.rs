use crate::api::context::AppState;
use crate::api::error::ApiError;
use crate::api::extract::Json;
use axum::{
    Extension, Router,
    extract::{Path, State},
    routing::{get, post},
};
use dashboard_core::actions::{CompleteForm, ReceiveForm, ReleaseForm};
use docflow_auth::SessionToken;
use model::{Document, TransitDetail};
use serde::Deserialize;
use utoipa::ToSchema;

/// Release dialog body; validated here before any upstream call
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReleaseRequest {
    pub to_agency_id: Option<i32>,
    pub action_id: Option<i32>,
    pub remarks: Option<String>,
}

/// Receive dialog body
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReceiveRequest {
    pub action_id: Option<i32>,
    pub remarks: Option<String>,
}

/// Complete dialog body
#[derive(Debug, Deserialize, ToSchema)]
pub struct CompleteRequest {
    pub remarks: Option<String>,
}

#[utoipa::path(
    get,
    tag = "documents",
    path = "/api/documents",
    responses(
        (status = 200, body = Vec<Document>),
        (status = 401, body = model::ErrorResponse),
        (status = 500, body = model::ErrorResponse),
    )
)]
#[tracing::instrument(skip(ctx, token))]
pub async fn list_documents(
    State(ctx): State<AppState>,
    Extension(token): Extension<SessionToken>,
) -> Result<Json<Vec<Document>>, ApiError> {
    Ok(Json(ctx.registry()?.get_documents(&token).await?))
}

#[utoipa::path(
    get,
    tag = "documents",
    path = "/api/for-dispatch-documents",
    responses((status = 200, body = Vec<Document>))
)]
#[tracing::instrument(skip(ctx, token))]
pub async fn list_for_dispatch_documents(
    State(ctx): State<AppState>,
    Extension(token): Extension<SessionToken>,
) -> Result<Json<Vec<Document>>, ApiError> {
    Ok(Json(ctx.registry()?.get_for_dispatch_documents(&token).await?))
}

#[utoipa::path(
    get,
    tag = "documents",
    path = "/api/incoming-documents",
    responses((status = 200, body = Vec<Document>))
)]
#[tracing::instrument(skip(ctx, token))]
pub async fn list_incoming_documents(
    State(ctx): State<AppState>,
    Extension(token): Extension<SessionToken>,
) -> Result<Json<Vec<Document>>, ApiError> {
    Ok(Json(ctx.registry()?.get_incoming_documents(&token).await?))
}

#[utoipa::path(
    get,
    tag = "documents",
    path = "/api/outgoing-documents",
    responses((status = 200, body = Vec<Document>))
)]
#[tracing::instrument(skip(ctx, token))]
pub async fn list_outgoing_documents(
    State(ctx): State<AppState>,
    Extension(token): Extension<SessionToken>,
) -> Result<Json<Vec<Document>>, ApiError> {
    Ok(Json(ctx.registry()?.get_outgoing_documents(&token).await?))
}

#[utoipa::path(
    get,
    tag = "documents",
    path = "/api/received-documents",
    responses((status = 200, body = Vec<Document>))
)]
#[tracing::instrument(skip(ctx, token))]
pub async fn list_received_documents(
    State(ctx): State<AppState>,
    Extension(token): Extension<SessionToken>,
) -> Result<Json<Vec<Document>>, ApiError> {
    Ok(Json(ctx.registry()?.get_received_documents(&token).await?))
}

#[utoipa::path(
    get,
    tag = "documents",
    path = "/api/completed-documents",
    responses((status = 200, body = Vec<Document>))
)]
#[tracing::instrument(skip(ctx, token))]
pub async fn list_completed_documents(
    State(ctx): State<AppState>,
    Extension(token): Extension<SessionToken>,
) -> Result<Json<Vec<Document>>, ApiError> {
    Ok(Json(ctx.registry()?.get_completed_documents(&token).await?))
}

/// Create a document. The body is forwarded verbatim; the registry owns the
/// create contract.
#[utoipa::path(
    post,
    tag = "documents",
    path = "/api/documents",
    request_body = serde_json::Value,
    responses(
        (status = 200, body = Document),
        (status = 401, body = model::ErrorResponse),
    )
)]
#[tracing::instrument(skip(ctx, token, body))]
pub async fn create_document(
    State(ctx): State<AppState>,
    Extension(token): Extension<SessionToken>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<Document>, ApiError> {
    Ok(Json(ctx.registry()?.create_document(&token, &body).await?))
}

#[utoipa::path(
    post,
    tag = "documents",
    path = "/api/documents/{id}/release",
    request_body = ReleaseRequest,
    responses(
        (status = 200, body = Document),
        (status = 400, body = model::ErrorResponse),
    )
)]
#[tracing::instrument(skip(ctx, token, req))]
pub async fn release_document(
    State(ctx): State<AppState>,
    Extension(token): Extension<SessionToken>,
    Path(document_id): Path<i64>,
    Json(req): Json<ReleaseRequest>,
) -> Result<Json<Document>, ApiError> {
    let payload = ReleaseForm {
        to_agency_id: req.to_agency_id,
        action_id: req.action_id,
        remarks: req.remarks,
    }
    .validate()?;
    Ok(Json(
        ctx.registry()?
            .release_document(&token, document_id, &payload)
            .await?,
    ))
}

#[utoipa::path(
    post,
    tag = "documents",
    path = "/api/documents/{id}/receive",
    request_body = ReceiveRequest,
    responses(
        (status = 200, body = Document),
        (status = 400, body = model::ErrorResponse),
    )
)]
#[tracing::instrument(skip(ctx, token, req))]
pub async fn receive_document(
    State(ctx): State<AppState>,
    Extension(token): Extension<SessionToken>,
    Path(document_id): Path<i64>,
    Json(req): Json<ReceiveRequest>,
) -> Result<Json<Document>, ApiError> {
    let payload = ReceiveForm {
        action_id: req.action_id,
        remarks: req.remarks,
    }
    .validate()?;
    Ok(Json(
        ctx.registry()?
            .receive_document(&token, document_id, &payload)
            .await?,
    ))
}

#[utoipa::path(
    post,
    tag = "documents",
    path = "/api/documents/{id}/complete",
    request_body = CompleteRequest,
    responses(
        (status = 200, body = Document),
        (status = 400, body = model::ErrorResponse),
    )
)]
#[tracing::instrument(skip(ctx, token, req))]
pub async fn complete_document(
    State(ctx): State<AppState>,
    Extension(token): Extension<SessionToken>,
    Path(document_id): Path<i64>,
    Json(req): Json<CompleteRequest>,
) -> Result<Json<Document>, ApiError> {
    let payload = CompleteForm {
        remarks: req.remarks,
    }
    .validate()?;
    Ok(Json(
        ctx.registry()?
            .complete_document(&token, document_id, &payload)
            .await?,
    ))
}

#[utoipa::path(
    post,
    tag = "documents",
    path = "/api/documents/{id}/cancel",
    responses(
        (status = 200, body = Document),
        (status = 401, body = model::ErrorResponse),
    )
)]
#[tracing::instrument(skip(ctx, token))]
pub async fn cancel_document(
    State(ctx): State<AppState>,
    Extension(token): Extension<SessionToken>,
    Path(document_id): Path<i64>,
) -> Result<Json<Document>, ApiError> {
    Ok(Json(
        ctx.registry()?.cancel_document(&token, document_id).await?,
    ))
}

#[utoipa::path(
    get,
    tag = "documents",
    path = "/api/documents/{id}/offtransit",
    responses(
        (status = 200, body = TransitDetail),
        (status = 404, body = model::ErrorResponse),
    )
)]
#[tracing::instrument(skip(ctx, token))]
pub async fn get_off_transit(
    State(ctx): State<AppState>,
    Extension(token): Extension<SessionToken>,
    Path(document_id): Path<i64>,
) -> Result<Json<TransitDetail>, ApiError> {
    Ok(Json(
        ctx.registry()?.get_off_transit(&token, document_id).await?,
    ))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/documents", get(list_documents).post(create_document))
        .route("/for-dispatch-documents", get(list_for_dispatch_documents))
        .route("/incoming-documents", get(list_incoming_documents))
        .route("/outgoing-documents", get(list_outgoing_documents))
        .route("/received-documents", get(list_received_documents))
        .route("/completed-documents", get(list_completed_documents))
        .route("/documents/{id}/release", post(release_document))
        .route("/documents/{id}/receive", post(receive_document))
        .route("/documents/{id}/complete", post(complete_document))
        .route("/documents/{id}/cancel", post(cancel_document))
        .route("/documents/{id}/offtransit", get(get_off_transit))
}
