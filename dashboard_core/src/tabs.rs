use crate::session::Session;
use model::Document;
use registry_service_client::{RegistryServiceClient, error::ClientError};

/// The dashboard tabs, each backed by one registry collection endpoint.
///
/// The registry performs the status filter server-side; this projection only
/// chooses which endpoint to call and hands the records through unmodified.
/// It must never recompute or override a document's `status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentTab {
    All,
    Dispatch,
    IncomingTransit,
    OutgoingTransit,
    Received,
    Completed,
}

impl DocumentTab {
    /// every tab, in display order
    pub const ALL_TABS: [DocumentTab; 6] = [
        DocumentTab::All,
        DocumentTab::Dispatch,
        DocumentTab::IncomingTransit,
        DocumentTab::OutgoingTransit,
        DocumentTab::Received,
        DocumentTab::Completed,
    ];

    /// The registry collection path backing this tab
    pub fn endpoint(self) -> &'static str {
        match self {
            DocumentTab::All => "documents",
            DocumentTab::Dispatch => "for-dispatch-documents",
            DocumentTab::IncomingTransit => "incoming-documents",
            DocumentTab::OutgoingTransit => "outgoing-documents",
            DocumentTab::Received => "received-documents",
            DocumentTab::Completed => "completed-documents",
        }
    }
}

/// An error which can occur while loading a tab
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// no network request was made
    #[error("no authenticated session")]
    NoSession,
    /// any non-2xx or transport failure, surfaced generically; the view
    /// offers manual refresh, never an automatic retry
    #[error("could not load documents")]
    Load(#[source] ClientError),
}

/// Fetches tab collections on behalf of the document tables
#[derive(Clone)]
pub struct DocumentTabs {
    client: RegistryServiceClient,
}

impl DocumentTabs {
    pub fn new(client: RegistryServiceClient) -> Self {
        Self { client }
    }

    /// Load one tab. An empty collection is an empty state, not an error.
    #[tracing::instrument(skip(self, session))]
    pub async fn fetch(
        &self,
        session: &Session,
        tab: DocumentTab,
    ) -> Result<Vec<Document>, FetchError> {
        let token = session.token().ok_or(FetchError::NoSession)?;

        let documents = match tab {
            DocumentTab::All => self.client.get_documents(token).await,
            DocumentTab::Dispatch => self.client.get_for_dispatch_documents(token).await,
            DocumentTab::IncomingTransit => self.client.get_incoming_documents(token).await,
            DocumentTab::OutgoingTransit => self.client.get_outgoing_documents(token).await,
            DocumentTab::Received => self.client.get_received_documents(token).await,
            DocumentTab::Completed => self.client.get_completed_documents(token).await,
        };

        documents.map_err(FetchError::Load)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tab_has_a_distinct_endpoint() {
        let mut endpoints: Vec<&str> = DocumentTab::ALL_TABS
            .iter()
            .map(|tab| tab.endpoint())
            .collect();
        endpoints.sort();
        endpoints.dedup();
        assert_eq!(endpoints.len(), DocumentTab::ALL_TABS.len());
    }

    #[tokio::test]
    async fn no_session_short_circuits_before_any_request() {
        // The base url is unroutable; reaching the network would surface a
        // Load error rather than NoSession.
        let tabs = DocumentTabs::new(RegistryServiceClient::new(
            "http://registry.invalid".to_string(),
        ));

        for tab in DocumentTab::ALL_TABS {
            let result = tabs.fetch(&Session::anonymous(), tab).await;
            assert!(matches!(result, Err(FetchError::NoSession)));
        }
    }
}
