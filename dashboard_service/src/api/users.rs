use crate::api::context::AppState;
use crate::api::error::ApiError;
use crate::api::extract::Json;
use axum::{
    Extension, Router,
    extract::{Path, State},
    routing::{delete, get, post},
};
use docflow_auth::SessionToken;
use model::User;

#[utoipa::path(
    get,
    tag = "users",
    path = "/api/users",
    responses((status = 200, body = Vec<User>))
)]
#[tracing::instrument(skip(ctx, token))]
pub async fn list_users(
    State(ctx): State<AppState>,
    Extension(token): Extension<SessionToken>,
) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(ctx.registry()?.get_users(&token).await?))
}

#[utoipa::path(
    post,
    tag = "users",
    path = "/api/users",
    request_body = serde_json::Value,
    responses((status = 200, body = User))
)]
#[tracing::instrument(skip(ctx, token, body))]
pub async fn create_user(
    State(ctx): State<AppState>,
    Extension(token): Extension<SessionToken>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(ctx.registry()?.create_user(&token, &body).await?))
}

#[utoipa::path(
    delete,
    tag = "users",
    path = "/api/users/{id}",
    responses((status = 204), (status = 404, body = model::ErrorResponse))
)]
#[tracing::instrument(skip(ctx, token))]
pub async fn delete_user(
    State(ctx): State<AppState>,
    Extension(token): Extension<SessionToken>,
    Path(user_id): Path<i64>,
) -> Result<axum::http::StatusCode, ApiError> {
    ctx.registry()?.delete_user(&token, user_id).await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    tag = "users",
    path = "/api/users/{id}/deactivate",
    responses((status = 200, body = User))
)]
#[tracing::instrument(skip(ctx, token))]
pub async fn deactivate_user(
    State(ctx): State<AppState>,
    Extension(token): Extension<SessionToken>,
    Path(user_id): Path<i64>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(ctx.registry()?.deactivate_user(&token, user_id).await?))
}

#[utoipa::path(
    post,
    tag = "users",
    path = "/api/users/{id}/reactivate",
    responses((status = 200, body = User))
)]
#[tracing::instrument(skip(ctx, token))]
pub async fn reactivate_user(
    State(ctx): State<AppState>,
    Extension(token): Extension<SessionToken>,
    Path(user_id): Path<i64>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(ctx.registry()?.reactivate_user(&token, user_id).await?))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", delete(delete_user))
        .route("/users/{id}/deactivate", post(deactivate_user))
        .route("/users/{id}/reactivate", post(reactivate_user))
}
