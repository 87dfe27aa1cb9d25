use crate::api::context::AppState;
use crate::api::error::ApiError;
use crate::api::extract::Json;
use axum::{Extension, Router, extract::State, routing::get};
use docflow_auth::SessionToken;
use model::Notification;
use registry_service_client::notifications::MarkSeenRequest;

#[utoipa::path(
    get,
    tag = "notifications",
    path = "/api/notifications",
    responses((status = 200, body = Vec<Notification>))
)]
#[tracing::instrument(skip(ctx, token))]
pub async fn list_notifications(
    State(ctx): State<AppState>,
    Extension(token): Extension<SessionToken>,
) -> Result<Json<Vec<Notification>>, ApiError> {
    Ok(Json(ctx.registry()?.get_notifications(&token).await?))
}

/// Bulk mark-seen; the badge count derives from what comes back
#[utoipa::path(
    post,
    tag = "notifications",
    path = "/api/notifications",
    request_body = MarkSeenRequest,
    responses((status = 200, body = Vec<Notification>))
)]
#[tracing::instrument(skip(ctx, token, req))]
pub async fn mark_notifications_seen(
    State(ctx): State<AppState>,
    Extension(token): Extension<SessionToken>,
    Json(req): Json<MarkSeenRequest>,
) -> Result<Json<Vec<Notification>>, ApiError> {
    Ok(Json(
        ctx.registry()?
            .mark_notifications_seen(&token, &req)
            .await?,
    ))
}

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/notifications",
        get(list_notifications).post(mark_notifications_seen),
    )
}
