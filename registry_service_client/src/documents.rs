use super::RegistryServiceClient;
use crate::error::{ClientError, ResponseExt, parse_response};
use docflow_auth::SessionToken;
use model::{Document, TransitDetail};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body for `POST /documents/{id}/release`: hand the document to another
/// agency with an action tag
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReleasePayload {
    pub to_agency_id: i32,
    pub action_id: i32,
    pub remarks: Option<String>,
}

/// Body for `POST /documents/{id}/receive`: accept an in-transit document
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReceivePayload {
    pub action_id: i32,
    pub remarks: Option<String>,
}

/// Body for `POST /documents/{id}/complete`: close out with remarks
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompletePayload {
    pub remarks: String,
}

impl RegistryServiceClient {
    #[tracing::instrument(skip(self, token))]
    pub async fn get_documents(&self, token: &SessionToken) -> Result<Vec<Document>, ClientError> {
        self.get_document_collection(token, "documents").await
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn get_for_dispatch_documents(
        &self,
        token: &SessionToken,
    ) -> Result<Vec<Document>, ClientError> {
        self.get_document_collection(token, "for-dispatch-documents")
            .await
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn get_incoming_documents(
        &self,
        token: &SessionToken,
    ) -> Result<Vec<Document>, ClientError> {
        self.get_document_collection(token, "incoming-documents")
            .await
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn get_outgoing_documents(
        &self,
        token: &SessionToken,
    ) -> Result<Vec<Document>, ClientError> {
        self.get_document_collection(token, "outgoing-documents")
            .await
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn get_received_documents(
        &self,
        token: &SessionToken,
    ) -> Result<Vec<Document>, ClientError> {
        self.get_document_collection(token, "received-documents")
            .await
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn get_completed_documents(
        &self,
        token: &SessionToken,
    ) -> Result<Vec<Document>, ClientError> {
        self.get_document_collection(token, "completed-documents")
            .await
    }

    async fn get_document_collection(
        &self,
        token: &SessionToken,
        path: &str,
    ) -> Result<Vec<Document>, ClientError> {
        let response = self
            .client
            .get(format!("{}/{}", self.url, path))
            .bearer_auth(token.expose())
            .send()
            .await
            .map_client_error()
            .await?;

        parse_response(response, path).await
    }

    /// Create a document. The body is forwarded verbatim; the registry owns
    /// the create contract and this layer must not reshape it.
    #[tracing::instrument(skip(self, token, body))]
    pub async fn create_document(
        &self,
        token: &SessionToken,
        body: &serde_json::Value,
    ) -> Result<Document, ClientError> {
        let response = self
            .client
            .post(format!("{}/documents", self.url))
            .bearer_auth(token.expose())
            .json(body)
            .send()
            .await
            .map_client_error()
            .await?;

        parse_response(response, "create_document").await
    }

    #[tracing::instrument(skip(self, token, payload))]
    pub async fn release_document(
        &self,
        token: &SessionToken,
        document_id: i64,
        payload: &ReleasePayload,
    ) -> Result<Document, ClientError> {
        let response = self
            .client
            .post(format!("{}/documents/{}/release", self.url, document_id))
            .bearer_auth(token.expose())
            .json(payload)
            .send()
            .await
            .map_client_error()
            .await?;

        parse_response(response, "release_document").await
    }

    #[tracing::instrument(skip(self, token, payload))]
    pub async fn receive_document(
        &self,
        token: &SessionToken,
        document_id: i64,
        payload: &ReceivePayload,
    ) -> Result<Document, ClientError> {
        let response = self
            .client
            .post(format!("{}/documents/{}/receive", self.url, document_id))
            .bearer_auth(token.expose())
            .json(payload)
            .send()
            .await
            .map_client_error()
            .await?;

        parse_response(response, "receive_document").await
    }

    #[tracing::instrument(skip(self, token, payload))]
    pub async fn complete_document(
        &self,
        token: &SessionToken,
        document_id: i64,
        payload: &CompletePayload,
    ) -> Result<Document, ClientError> {
        let response = self
            .client
            .post(format!("{}/documents/{}/complete", self.url, document_id))
            .bearer_auth(token.expose())
            .json(payload)
            .send()
            .await
            .map_client_error()
            .await?;

        parse_response(response, "complete_document").await
    }

    /// Cancel a document. No body beyond the identifier in the path.
    #[tracing::instrument(skip(self, token))]
    pub async fn cancel_document(
        &self,
        token: &SessionToken,
        document_id: i64,
    ) -> Result<Document, ClientError> {
        let response = self
            .client
            .post(format!("{}/documents/{}/cancel", self.url, document_id))
            .bearer_auth(token.expose())
            .send()
            .await
            .map_client_error()
            .await?;

        parse_response(response, "cancel_document").await
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn get_off_transit(
        &self,
        token: &SessionToken,
        document_id: i64,
    ) -> Result<TransitDetail, ClientError> {
        let response = self
            .client
            .get(format!("{}/documents/{}/offtransit", self.url, document_id))
            .bearer_auth(token.expose())
            .send()
            .await
            .map_client_error()
            .await?;

        parse_response(response, "get_off_transit").await
    }
}
