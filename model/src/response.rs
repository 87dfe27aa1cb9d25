use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A plain old json error response for use with axum.
/// yup, thats it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Message to explain failure
    pub error: String,
}

impl ErrorResponse {
    /// build an [ErrorResponse] from anything string-like
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
