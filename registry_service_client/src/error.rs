use anyhow::anyhow;
use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::{Error, Response};

#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("request error: {0}")]
    Generic(#[from] anyhow::Error),
    #[error("upstream error: {status_code} {}", message.as_deref().unwrap_or("<no message>"))]
    Upstream {
        status_code: u16,
        /// The `message` field of the registry's json error body, when present
        message: Option<String>,
    },
}

/// Pull the human-readable message out of a registry error body. The registry
/// answers failures with `{ "message": "..." }`; anything else is opaque.
fn upstream_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .or_else(|| value.get("error"))
        .and_then(|m| m.as_str())
        .map(|m| m.to_string())
}

#[async_trait]
pub trait ResponseExt {
    async fn map_client_error(self) -> Result<Response, ClientError>;
}

#[async_trait]
impl ResponseExt for Response {
    async fn map_client_error(self) -> Result<Response, ClientError> {
        match self.status() {
            StatusCode::OK
            | StatusCode::CREATED
            | StatusCode::ACCEPTED
            | StatusCode::NO_CONTENT => Ok(self),
            status => {
                let body = self.text().await.unwrap_or_default();
                Err(ClientError::Upstream {
                    status_code: status.as_u16(),
                    message: upstream_message(&body),
                })
            }
        }
    }
}

#[async_trait]
impl ResponseExt for Result<Response, Error> {
    async fn map_client_error(self) -> Result<Response, ClientError> {
        match self {
            Ok(response) => response.map_client_error().await,
            Err(e) => Err(ClientError::Generic(anyhow!(e.to_string()))),
        }
    }
}

/// Decode a success body, naming the operation in the error we hand back
pub(crate) async fn parse_response<T: serde::de::DeserializeOwned>(
    response: Response,
    operation: &str,
) -> Result<T, ClientError> {
    response.json::<T>().await.map_err(|e| {
        ClientError::Generic(anyhow!(
            "unable to parse response from {}: {}",
            operation,
            e.to_string()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_message_field_from_error_body() {
        assert_eq!(
            upstream_message(r#"{"message":"document already completed"}"#),
            Some("document already completed".to_string())
        );
    }

    #[test]
    fn falls_back_to_error_field() {
        assert_eq!(
            upstream_message(r#"{"error":"not found"}"#),
            Some("not found".to_string())
        );
    }

    #[test]
    fn non_json_body_has_no_message() {
        assert_eq!(upstream_message("<html>502</html>"), None);
        assert_eq!(upstream_message(""), None);
    }
}
