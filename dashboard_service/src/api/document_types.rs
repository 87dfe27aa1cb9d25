use crate::api::context::AppState;
use crate::api::error::ApiError;
use crate::api::extract::Json;
use axum::{
    Extension, Router,
    extract::{Path, State},
    routing::get,
};
use docflow_auth::SessionToken;
use model::DocumentType;

#[utoipa::path(
    get,
    tag = "document-types",
    path = "/api/document-types",
    responses((status = 200, body = Vec<DocumentType>))
)]
#[tracing::instrument(skip(ctx, token))]
pub async fn list_document_types(
    State(ctx): State<AppState>,
    Extension(token): Extension<SessionToken>,
) -> Result<Json<Vec<DocumentType>>, ApiError> {
    Ok(Json(ctx.registry()?.get_document_types(&token).await?))
}

#[utoipa::path(
    get,
    tag = "document-types",
    path = "/api/document-types/{id}",
    responses(
        (status = 200, body = DocumentType),
        (status = 404, body = model::ErrorResponse),
    )
)]
#[tracing::instrument(skip(ctx, token))]
pub async fn get_document_type(
    State(ctx): State<AppState>,
    Extension(token): Extension<SessionToken>,
    Path(document_type_id): Path<i32>,
) -> Result<Json<DocumentType>, ApiError> {
    Ok(Json(
        ctx.registry()?
            .get_document_type(&token, document_type_id)
            .await?,
    ))
}

#[utoipa::path(
    post,
    tag = "document-types",
    path = "/api/document-types",
    request_body = serde_json::Value,
    responses((status = 200, body = DocumentType))
)]
#[tracing::instrument(skip(ctx, token, body))]
pub async fn create_document_type(
    State(ctx): State<AppState>,
    Extension(token): Extension<SessionToken>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<DocumentType>, ApiError> {
    Ok(Json(
        ctx.registry()?.create_document_type(&token, &body).await?,
    ))
}

#[utoipa::path(
    put,
    tag = "document-types",
    path = "/api/document-types/{id}",
    request_body = serde_json::Value,
    responses((status = 200, body = DocumentType))
)]
#[tracing::instrument(skip(ctx, token, body))]
pub async fn update_document_type(
    State(ctx): State<AppState>,
    Extension(token): Extension<SessionToken>,
    Path(document_type_id): Path<i32>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<DocumentType>, ApiError> {
    Ok(Json(
        ctx.registry()?
            .update_document_type(&token, document_type_id, &body)
            .await?,
    ))
}

#[utoipa::path(
    delete,
    tag = "document-types",
    path = "/api/document-types/{id}",
    responses((status = 204), (status = 404, body = model::ErrorResponse))
)]
#[tracing::instrument(skip(ctx, token))]
pub async fn delete_document_type(
    State(ctx): State<AppState>,
    Extension(token): Extension<SessionToken>,
    Path(document_type_id): Path<i32>,
) -> Result<axum::http::StatusCode, ApiError> {
    ctx.registry()?
        .delete_document_type(&token, document_type_id)
        .await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/document-types",
            get(list_document_types).post(create_document_type),
        )
        .route(
            "/document-types/{id}",
            get(get_document_type)
                .put(update_document_type)
                .delete(delete_document_type),
        )
}
