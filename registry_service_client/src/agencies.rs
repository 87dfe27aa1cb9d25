use super::RegistryServiceClient;
use crate::error::{ClientError, ResponseExt, parse_response};
use docflow_auth::SessionToken;
use model::Agency;

impl RegistryServiceClient {
    #[tracing::instrument(skip(self, token))]
    pub async fn get_agencies(&self, token: &SessionToken) -> Result<Vec<Agency>, ClientError> {
        let response = self
            .client
            .get(format!("{}/agencies", self.url))
            .bearer_auth(token.expose())
            .send()
            .await
            .map_client_error()
            .await?;

        parse_response(response, "get_agencies").await
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn get_agency(
        &self,
        token: &SessionToken,
        agency_id: i32,
    ) -> Result<Agency, ClientError> {
        let response = self
            .client
            .get(format!("{}/agencies/{}", self.url, agency_id))
            .bearer_auth(token.expose())
            .send()
            .await
            .map_client_error()
            .await?;

        parse_response(response, "get_agency").await
    }

    #[tracing::instrument(skip(self, token, body))]
    pub async fn create_agency(
        &self,
        token: &SessionToken,
        body: &serde_json::Value,
    ) -> Result<Agency, ClientError> {
        let response = self
            .client
            .post(format!("{}/agencies", self.url))
            .bearer_auth(token.expose())
            .json(body)
            .send()
            .await
            .map_client_error()
            .await?;

        parse_response(response, "create_agency").await
    }

    #[tracing::instrument(skip(self, token, body))]
    pub async fn update_agency(
        &self,
        token: &SessionToken,
        agency_id: i32,
        body: &serde_json::Value,
    ) -> Result<Agency, ClientError> {
        let response = self
            .client
            .put(format!("{}/agencies/{}", self.url, agency_id))
            .bearer_auth(token.expose())
            .json(body)
            .send()
            .await
            .map_client_error()
            .await?;

        parse_response(response, "update_agency").await
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn delete_agency(
        &self,
        token: &SessionToken,
        agency_id: i32,
    ) -> Result<(), ClientError> {
        self.client
            .delete(format!("{}/agencies/{}", self.url, agency_id))
            .bearer_auth(token.expose())
            .send()
            .await
            .map_client_error()
            .await?;

        Ok(())
    }
}
