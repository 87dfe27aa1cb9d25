use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use utoipa::ToSchema;

/// Lifecycle status of a document, owned and assigned by the registry.
///
/// The client never computes a status; it only decodes what the registry
/// sent. Wire values outside the known set are carried through unchanged as
/// [DocumentStatus::Unrecognized] so a proxied record re-serializes to the
/// exact string the registry produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(from = "String", into = "String")]
pub enum DocumentStatus {
    /// Created but not yet released by the originating agency
    ForDispatch,
    /// In transit towards the current user's agency
    Incoming,
    /// In transit away from the current user's agency
    Outgoing,
    /// Accepted by the destination agency
    Received,
    /// Closed out with remarks
    Completed,
    /// Cancelled before completion
    Cancelled,
    /// A wire value this client does not know about
    Unrecognized(String),
}

impl From<String> for DocumentStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "for_dispatch" => DocumentStatus::ForDispatch,
            "incoming" => DocumentStatus::Incoming,
            "outgoing" => DocumentStatus::Outgoing,
            "received" => DocumentStatus::Received,
            "completed" => DocumentStatus::Completed,
            "cancelled" => DocumentStatus::Cancelled,
            _ => DocumentStatus::Unrecognized(value),
        }
    }
}

impl From<DocumentStatus> for String {
    fn from(status: DocumentStatus) -> Self {
        match status {
            DocumentStatus::ForDispatch => "for_dispatch".to_string(),
            DocumentStatus::Incoming => "incoming".to_string(),
            DocumentStatus::Outgoing => "outgoing".to_string(),
            DocumentStatus::Received => "received".to_string(),
            DocumentStatus::Completed => "completed".to_string(),
            DocumentStatus::Cancelled => "cancelled".to_string(),
            DocumentStatus::Unrecognized(value) => value,
        }
    }
}

impl Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from(self.clone()))
    }
}

/// A shallow reference to an agency as embedded in document routing fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AgencyRef {
    pub agency_id: i32,
    pub name: String,
}

/// A document record as returned by the registry.
///
/// Optional timestamps serialize explicitly as `null` rather than being
/// skipped so an echoed record is field-for-field identical to its source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Document {
    pub document_id: i64,
    /// Public tracking handle printed on routing slips
    pub tracking_code: String,
    pub document_code: String,

    pub document_type: String,
    pub classification: String,
    pub document_name: String,

    pub originating_agency: Option<AgencyRef>,
    pub current_agency: Option<AgencyRef>,
    pub from_agency: Option<AgencyRef>,
    pub to_agency: Option<AgencyRef>,

    /// Action tag asked of the recipient on release, e.g. "For review"
    pub action_requested: Option<String>,
    /// Action tag the recipient applied on receipt
    pub action_taken: Option<String>,
    pub sender_action_id: Option<i32>,
    pub recipient_action_id: Option<i32>,

    pub released_at: Option<DateTime<Utc>>,
    pub received_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub viewed_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,

    pub status: DocumentStatus,

    /// Fields the registry sent which this client does not model
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// The transit-exit detail of a document, fetched per document on demand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TransitDetail {
    pub document_id: i64,
    pub from_agency: AgencyRef,
    pub to_agency: AgencyRef,
    pub action_requested: Option<String>,
    pub released_at: Option<DateTime<Utc>>,
    pub received_at: Option<DateTime<Utc>>,
    pub received_by: Option<String>,
    pub remarks: Option<String>,
}
