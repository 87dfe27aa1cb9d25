//! Typed `reqwest` client for the registry REST contract.
//!
//! Every call takes the caller's [SessionToken](docflow_auth::SessionToken)
//! and forwards it as a bearer header; the client holds no credentials of its
//! own. The base url can point at the registry directly or at the dashboard
//! gateway, which mirrors the registry's paths under `/api`.

use std::time::Duration;

pub mod agencies;
pub mod document_actions;
pub mod document_types;
pub mod documents;
pub mod error;
pub mod notifications;
pub mod user_feedbacks;
pub mod users;

/// A hung request must not leave a view loading forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct RegistryServiceClient {
    url: String,
    client: reqwest::Client,
}

impl RegistryServiceClient {
    pub fn new(url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap();

        Self { url, client }
    }

    /// The base url this client targets
    pub fn base_url(&self) -> &str {
        &self.url
    }
}
