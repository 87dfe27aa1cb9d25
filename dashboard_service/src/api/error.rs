use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dashboard_core::ActionError;
use model::ErrorResponse;
use registry_service_client::error::ClientError;

/// Everything an `/api` handler can fail with. Nothing crosses the API
/// boundary uncaught; every variant renders as `{ "error": <message> }`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// no or invalid `Authorization` header; no upstream call was made
    #[error("unauthorized")]
    Unauthorized,
    /// a required field was missing or blank; no upstream call was made
    #[error("{0}")]
    Validation(String),
    /// the registry base url is not configured
    #[error("API base URL not configured")]
    Configuration,
    /// the registry answered non-2xx; its status code is mirrored
    #[error("{}", message.as_deref().unwrap_or("upstream request failed"))]
    Upstream {
        status_code: u16,
        message: Option<String>,
    },
    /// transport or other local failure; details stay in the log
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl From<ClientError> for ApiError {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::Upstream {
                status_code,
                message,
            } => ApiError::Upstream {
                status_code,
                message,
            },
            ClientError::Generic(e) => ApiError::Internal(e),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<ActionError> for ApiError {
    fn from(e: ActionError) -> Self {
        match e {
            ActionError::Validation(_) => ApiError::Validation(e.to_string()),
            ActionError::NoSession => ApiError::Unauthorized,
            ActionError::Submit(message) => ApiError::Internal(anyhow::anyhow!(message)),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Configuration => {
                tracing::error!("API base URL not configured");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Upstream { status_code, .. } => StatusCode::from_u16(*status_code)
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            ApiError::Internal(e) => {
                tracing::error!(error = ?e, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_status_is_mirrored() {
        let response = ApiError::from(ClientError::Upstream {
            status_code: 404,
            message: Some("agency not found".to_string()),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn unmapped_upstream_status_falls_back_to_500() {
        let response = ApiError::Upstream {
            status_code: 9999,
            message: None,
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn configuration_error_has_the_contract_message() {
        assert_eq!(
            ApiError::Configuration.to_string(),
            "API base URL not configured"
        );
    }
}
