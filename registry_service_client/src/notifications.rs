use super::RegistryServiceClient;
use crate::error::{ClientError, ResponseExt, parse_response};
use docflow_auth::SessionToken;
use model::Notification;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body for `POST /notifications`: mark a batch of notifications as seen
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MarkSeenRequest {
    pub notification_ids: Vec<i64>,
}

impl RegistryServiceClient {
    #[tracing::instrument(skip(self, token))]
    pub async fn get_notifications(
        &self,
        token: &SessionToken,
    ) -> Result<Vec<Notification>, ClientError> {
        let response = self
            .client
            .get(format!("{}/notifications", self.url))
            .bearer_auth(token.expose())
            .send()
            .await
            .map_client_error()
            .await?;

        parse_response(response, "get_notifications").await
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn mark_notifications_seen(
        &self,
        token: &SessionToken,
        request: &MarkSeenRequest,
    ) -> Result<Vec<Notification>, ClientError> {
        let response = self
            .client
            .post(format!("{}/notifications", self.url))
            .bearer_auth(token.expose())
            .json(request)
            .send()
            .await
            .map_client_error()
            .await?;

        parse_response(response, "mark_notifications_seen").await
    }
}
