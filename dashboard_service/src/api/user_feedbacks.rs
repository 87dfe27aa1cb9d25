use crate::api::context::AppState;
use crate::api::error::ApiError;
use crate::api::extract::Json;
use axum::{Extension, Router, extract::State, routing::get};
use docflow_auth::SessionToken;
use model::UserFeedback;

#[utoipa::path(
    get,
    tag = "user-feedbacks",
    path = "/api/user-feedbacks",
    responses((status = 200, body = Vec<UserFeedback>))
)]
#[tracing::instrument(skip(ctx, token))]
pub async fn list_user_feedbacks(
    State(ctx): State<AppState>,
    Extension(token): Extension<SessionToken>,
) -> Result<Json<Vec<UserFeedback>>, ApiError> {
    Ok(Json(ctx.registry()?.get_user_feedbacks(&token).await?))
}

#[utoipa::path(
    post,
    tag = "user-feedbacks",
    path = "/api/user-feedbacks",
    request_body = UserFeedback,
    responses(
        (status = 200, body = UserFeedback),
        (status = 400, body = model::ErrorResponse),
    )
)]
#[tracing::instrument(skip(ctx, token, feedback))]
pub async fn create_user_feedback(
    State(ctx): State<AppState>,
    Extension(token): Extension<SessionToken>,
    Json(feedback): Json<UserFeedback>,
) -> Result<Json<UserFeedback>, ApiError> {
    if !(1..=5).contains(&feedback.rating) {
        return Err(ApiError::Validation(
            "rating must be between 1 and 5".to_string(),
        ));
    }
    Ok(Json(
        ctx.registry()?
            .create_user_feedback(&token, &feedback)
            .await?,
    ))
}

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/user-feedbacks",
        get(list_user_feedbacks).post(create_user_feedback),
    )
}
