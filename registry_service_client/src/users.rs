use super::RegistryServiceClient;
use crate::error::{ClientError, ResponseExt, parse_response};
use docflow_auth::SessionToken;
use model::User;

impl RegistryServiceClient {
    #[tracing::instrument(skip(self, token))]
    pub async fn get_users(&self, token: &SessionToken) -> Result<Vec<User>, ClientError> {
        let response = self
            .client
            .get(format!("{}/users", self.url))
            .bearer_auth(token.expose())
            .send()
            .await
            .map_client_error()
            .await?;

        parse_response(response, "get_users").await
    }

    #[tracing::instrument(skip(self, token, body))]
    pub async fn create_user(
        &self,
        token: &SessionToken,
        body: &serde_json::Value,
    ) -> Result<User, ClientError> {
        let response = self
            .client
            .post(format!("{}/users", self.url))
            .bearer_auth(token.expose())
            .json(body)
            .send()
            .await
            .map_client_error()
            .await?;

        parse_response(response, "create_user").await
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn delete_user(&self, token: &SessionToken, user_id: i64) -> Result<(), ClientError> {
        self.client
            .delete(format!("{}/users/{}", self.url, user_id))
            .bearer_auth(token.expose())
            .send()
            .await
            .map_client_error()
            .await?;

        Ok(())
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn deactivate_user(
        &self,
        token: &SessionToken,
        user_id: i64,
    ) -> Result<User, ClientError> {
        let response = self
            .client
            .post(format!("{}/users/{}/deactivate", self.url, user_id))
            .bearer_auth(token.expose())
            .send()
            .await
            .map_client_error()
            .await?;

        parse_response(response, "deactivate_user").await
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn reactivate_user(
        &self,
        token: &SessionToken,
        user_id: i64,
    ) -> Result<User, ClientError> {
        let response = self
            .client
            .post(format!("{}/users/{}/reactivate", self.url, user_id))
            .bearer_auth(token.expose())
            .send()
            .await
            .map_client_error()
            .await?;

        parse_response(response, "reactivate_user").await
    }
}
