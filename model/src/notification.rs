use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An in-app notification raised by the registry for the current user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Notification {
    pub notification_id: i64,
    pub message: String,
    /// The document this notification is about, if any
    pub document_id: Option<i64>,
    pub seen: bool,
    pub created_at: Option<DateTime<Utc>>,
}

/// Feedback submitted by a user about the dashboard itself
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserFeedback {
    /// Absent on submission, assigned by the registry
    pub feedback_id: Option<i64>,
    /// 1 through 5
    pub rating: u8,
    pub comments: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}
