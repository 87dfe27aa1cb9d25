use crate::{AuthError, SessionToken};

/// Pull the bearer token out of an `Authorization` header.
pub fn extract_bearer_from_request_headers(
    headers: &axum::http::HeaderMap,
) -> Result<SessionToken, AuthError> {
    let auth_header = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or(AuthError::NoAccessTokenProvided)?;

    let parts = auth_header.split("Bearer ").collect::<Vec<&str>>();
    if parts.len() != 2 || parts[1].is_empty() {
        return Err(AuthError::InvalidAuthorizationHeaderFormat);
    }
    tracing::trace!("Authorization header provided");

    Ok(SessionToken::new(parts[1]))
}
