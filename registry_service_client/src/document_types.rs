use super::RegistryServiceClient;
use crate::error::{ClientError, ResponseExt, parse_response};
use docflow_auth::SessionToken;
use model::DocumentType;

impl RegistryServiceClient {
    #[tracing::instrument(skip(self, token))]
    pub async fn get_document_types(
        &self,
        token: &SessionToken,
    ) -> Result<Vec<DocumentType>, ClientError> {
        let response = self
            .client
            .get(format!("{}/document-types", self.url))
            .bearer_auth(token.expose())
            .send()
            .await
            .map_client_error()
            .await?;

        parse_response(response, "get_document_types").await
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn get_document_type(
        &self,
        token: &SessionToken,
        document_type_id: i32,
    ) -> Result<DocumentType, ClientError> {
        let response = self
            .client
            .get(format!("{}/document-types/{}", self.url, document_type_id))
            .bearer_auth(token.expose())
            .send()
            .await
            .map_client_error()
            .await?;

        parse_response(response, "get_document_type").await
    }

    #[tracing::instrument(skip(self, token, body))]
    pub async fn create_document_type(
        &self,
        token: &SessionToken,
        body: &serde_json::Value,
    ) -> Result<DocumentType, ClientError> {
        let response = self
            .client
            .post(format!("{}/document-types", self.url))
            .bearer_auth(token.expose())
            .json(body)
            .send()
            .await
            .map_client_error()
            .await?;

        parse_response(response, "create_document_type").await
    }

    #[tracing::instrument(skip(self, token, body))]
    pub async fn update_document_type(
        &self,
        token: &SessionToken,
        document_type_id: i32,
        body: &serde_json::Value,
    ) -> Result<DocumentType, ClientError> {
        let response = self
            .client
            .put(format!("{}/document-types/{}", self.url, document_type_id))
            .bearer_auth(token.expose())
            .json(body)
            .send()
            .await
            .map_client_error()
            .await?;

        parse_response(response, "update_document_type").await
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn delete_document_type(
        &self,
        token: &SessionToken,
        document_type_id: i32,
    ) -> Result<(), ClientError> {
        self.client
            .delete(format!("{}/document-types/{}", self.url, document_type_id))
            .bearer_auth(token.expose())
            .send()
            .await
            .map_client_error()
            .await?;

        Ok(())
    }
}
