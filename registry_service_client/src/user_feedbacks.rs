use super::RegistryServiceClient;
use crate::error::{ClientError, ResponseExt, parse_response};
use docflow_auth::SessionToken;
use model::UserFeedback;

impl RegistryServiceClient {
    #[tracing::instrument(skip(self, token))]
    pub async fn get_user_feedbacks(
        &self,
        token: &SessionToken,
    ) -> Result<Vec<UserFeedback>, ClientError> {
        let response = self
            .client
            .get(format!("{}/user-feedbacks", self.url))
            .bearer_auth(token.expose())
            .send()
            .await
            .map_client_error()
            .await?;

        parse_response(response, "get_user_feedbacks").await
    }

    #[tracing::instrument(skip(self, token, feedback))]
    pub async fn create_user_feedback(
        &self,
        token: &SessionToken,
        feedback: &UserFeedback,
    ) -> Result<UserFeedback, ClientError> {
        let response = self
            .client
            .post(format!("{}/user-feedbacks", self.url))
            .bearer_auth(token.expose())
            .json(feedback)
            .send()
            .await
            .map_client_error()
            .await?;

        parse_response(response, "create_user_feedback").await
    }
}
