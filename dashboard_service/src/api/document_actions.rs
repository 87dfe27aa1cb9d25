use crate::api::context::AppState;
use crate::api::error::ApiError;
use crate::api::extract::Json;
use axum::{Extension, Router, extract::State, routing::get};
use docflow_auth::SessionToken;
use model::DocumentAction;

/// Action-tag reference list for the release/receive forms
#[utoipa::path(
    get,
    tag = "document-actions",
    path = "/api/document-actions",
    responses((status = 200, body = Vec<DocumentAction>))
)]
#[tracing::instrument(skip(ctx, token))]
pub async fn list_document_actions(
    State(ctx): State<AppState>,
    Extension(token): Extension<SessionToken>,
) -> Result<Json<Vec<DocumentAction>>, ApiError> {
    Ok(Json(ctx.registry()?.get_document_actions(&token).await?))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/document-actions", get(list_document_actions))
}
