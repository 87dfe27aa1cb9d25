//! Shared wire types for the docflow services.
//!
//! Everything here mirrors the registry's snake_case JSON contract. Records
//! carry a flattened extra-field map so a payload proxied through the gateway
//! keeps every field the registry sent, modelled or not.

pub mod document;
pub mod notification;
pub mod reference;
pub mod response;

pub use document::{AgencyRef, Document, DocumentStatus, TransitDetail};
pub use notification::{Notification, UserFeedback};
pub use reference::{Agency, DocumentAction, DocumentType, User};
pub use response::ErrorResponse;
