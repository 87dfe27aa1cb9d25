//! Bearer-token session relay.
//!
//! The dashboard never validates tokens itself; the registry is the
//! authority. This crate only extracts the bearer token from an incoming
//! request and carries it, as a [SessionToken] extension, to whichever
//! handler forwards it upstream. A request with no token is a 401 before any
//! upstream call.

use axum::{
    Json,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use model::ErrorResponse;
use thiserror::Error;

pub mod headers;

/// An opaque bearer token read from the session; forwarded upstream verbatim
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// wrap a raw token string
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// the raw token value, for building `Authorization` headers and socket urls
    pub fn expose(&self) -> &str {
        &self.0
    }
}

// Keep the raw token out of logs.
impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionToken(..)")
    }
}

/// An error which can occur while relaying a session token
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("no access token provided")]
    NoAccessTokenProvided,
    #[error("invalid authorization header format")]
    InvalidAuthorizationHeaderFormat,
}

/// Extracts the bearer token and attaches it to the request as a
/// [SessionToken] extension. Use this on every route that forwards to the
/// registry; unauthenticated requests are rejected here.
pub async fn require_session(mut req: Request, next: Next) -> Result<Response, Response> {
    let token = match headers::extract_bearer_from_request_headers(req.headers()) {
        Ok(token) => token,
        Err(e) => {
            tracing::trace!(error = ?e, "unable to get session token");
            return Err((
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::new("unauthorized")),
            )
                .into_response());
        }
    };

    req.extensions_mut().insert(token);
    Ok(next.run(req).await)
}
