use super::RegistryServiceClient;
use crate::error::{ClientError, ResponseExt, parse_response};
use docflow_auth::SessionToken;
use model::DocumentAction;

impl RegistryServiceClient {
    /// The action-tag reference list used to populate release/receive forms
    #[tracing::instrument(skip(self, token))]
    pub async fn get_document_actions(
        &self,
        token: &SessionToken,
    ) -> Result<Vec<DocumentAction>, ClientError> {
        let response = self
            .client
            .get(format!("{}/document-actions", self.url))
            .bearer_auth(token.expose())
            .send()
            .await
            .map_client_error()
            .await?;

        parse_response(response, "get_document_actions").await
    }
}
