use crate::api::context::AppState;
use crate::api::error::ApiError;
use crate::api::extract::Json;
use axum::{
    Extension, Router,
    extract::{Path, State},
    routing::get,
};
use docflow_auth::SessionToken;
use model::Agency;

#[utoipa::path(
    get,
    tag = "agencies",
    path = "/api/agencies",
    responses(
        (status = 200, body = Vec<Agency>),
        (status = 401, body = model::ErrorResponse),
    )
)]
#[tracing::instrument(skip(ctx, token))]
pub async fn list_agencies(
    State(ctx): State<AppState>,
    Extension(token): Extension<SessionToken>,
) -> Result<Json<Vec<Agency>>, ApiError> {
    Ok(Json(ctx.registry()?.get_agencies(&token).await?))
}

#[utoipa::path(
    get,
    tag = "agencies",
    path = "/api/agencies/{id}",
    responses(
        (status = 200, body = Agency),
        (status = 404, body = model::ErrorResponse),
    )
)]
#[tracing::instrument(skip(ctx, token))]
pub async fn get_agency(
    State(ctx): State<AppState>,
    Extension(token): Extension<SessionToken>,
    Path(agency_id): Path<i32>,
) -> Result<Json<Agency>, ApiError> {
    Ok(Json(ctx.registry()?.get_agency(&token, agency_id).await?))
}

#[utoipa::path(
    post,
    tag = "agencies",
    path = "/api/agencies",
    request_body = serde_json::Value,
    responses((status = 200, body = Agency))
)]
#[tracing::instrument(skip(ctx, token, body))]
pub async fn create_agency(
    State(ctx): State<AppState>,
    Extension(token): Extension<SessionToken>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<Agency>, ApiError> {
    Ok(Json(ctx.registry()?.create_agency(&token, &body).await?))
}

#[utoipa::path(
    put,
    tag = "agencies",
    path = "/api/agencies/{id}",
    request_body = serde_json::Value,
    responses((status = 200, body = Agency))
)]
#[tracing::instrument(skip(ctx, token, body))]
pub async fn update_agency(
    State(ctx): State<AppState>,
    Extension(token): Extension<SessionToken>,
    Path(agency_id): Path<i32>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<Agency>, ApiError> {
    Ok(Json(
        ctx.registry()?
            .update_agency(&token, agency_id, &body)
            .await?,
    ))
}

#[utoipa::path(
    delete,
    tag = "agencies",
    path = "/api/agencies/{id}",
    responses((status = 204), (status = 404, body = model::ErrorResponse))
)]
#[tracing::instrument(skip(ctx, token))]
pub async fn delete_agency(
    State(ctx): State<AppState>,
    Extension(token): Extension<SessionToken>,
    Path(agency_id): Path<i32>,
) -> Result<axum::http::StatusCode, ApiError> {
    ctx.registry()?.delete_agency(&token, agency_id).await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/agencies", get(list_agencies).post(create_agency))
        .route(
            "/agencies/{id}",
            get(get_agency).put(update_agency).delete(delete_agency),
        )
}
