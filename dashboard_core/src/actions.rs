use crate::session::Session;
use model::Document;
use registry_service_client::{
    RegistryServiceClient,
    documents::{CompletePayload, ReceivePayload, ReleasePayload},
    error::ClientError,
};

/// An error which can occur while submitting a document action
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ActionError {
    /// rejected locally; no network call was made
    #[error("{0} is required")]
    Validation(&'static str),
    /// no network call was made
    #[error("no authenticated session")]
    NoSession,
    /// the registry rejected the action; the message is its own when it sent
    /// one. Never auto-retried: the user resubmits.
    #[error("{0}")]
    Submit(String),
}

impl From<ClientError> for ActionError {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::Upstream {
                message: Some(message),
                ..
            } => ActionError::Submit(message),
            _ => ActionError::Submit("could not submit action".to_string()),
        }
    }
}

/// What the release dialog collects; everything optional until validated
#[derive(Debug, Clone, Default)]
pub struct ReleaseForm {
    pub to_agency_id: Option<i32>,
    pub action_id: Option<i32>,
    pub remarks: Option<String>,
}

impl ReleaseForm {
    /// A release needs a destination and an action tag; remarks are optional
    pub fn validate(self) -> Result<ReleasePayload, ActionError> {
        let to_agency_id = self
            .to_agency_id
            .ok_or(ActionError::Validation("destination agency"))?;
        let action_id = self.action_id.ok_or(ActionError::Validation("action"))?;
        Ok(ReleasePayload {
            to_agency_id,
            action_id,
            remarks: self.remarks,
        })
    }
}

/// What the receive dialog collects
#[derive(Debug, Clone, Default)]
pub struct ReceiveForm {
    pub action_id: Option<i32>,
    pub remarks: Option<String>,
}

impl ReceiveForm {
    pub fn validate(self) -> Result<ReceivePayload, ActionError> {
        let action_id = self.action_id.ok_or(ActionError::Validation("action"))?;
        Ok(ReceivePayload {
            action_id,
            remarks: self.remarks,
        })
    }
}

/// What the complete dialog collects
#[derive(Debug, Clone, Default)]
pub struct CompleteForm {
    pub remarks: Option<String>,
}

impl CompleteForm {
    /// Completion remarks must be present and not just whitespace
    pub fn validate(self) -> Result<CompletePayload, ActionError> {
        let remarks = self
            .remarks
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .ok_or(ActionError::Validation("remarks"))?;
        Ok(CompletePayload {
            remarks: remarks.to_string(),
        })
    }
}

/// Translates a user action into one authenticated POST against the registry.
///
/// Transition legality is the registry's call; this layer only refuses
/// submissions that are incomplete before any network traffic happens.
#[derive(Clone)]
pub struct DocumentActions {
    client: RegistryServiceClient,
}

impl DocumentActions {
    pub fn new(client: RegistryServiceClient) -> Self {
        Self { client }
    }

    #[tracing::instrument(skip(self, session, form))]
    pub async fn release(
        &self,
        session: &Session,
        document_id: i64,
        form: ReleaseForm,
    ) -> Result<Document, ActionError> {
        let payload = form.validate()?;
        let token = session.token().ok_or(ActionError::NoSession)?;
        Ok(self
            .client
            .release_document(token, document_id, &payload)
            .await?)
    }

    #[tracing::instrument(skip(self, session, form))]
    pub async fn receive(
        &self,
        session: &Session,
        document_id: i64,
        form: ReceiveForm,
    ) -> Result<Document, ActionError> {
        let payload = form.validate()?;
        let token = session.token().ok_or(ActionError::NoSession)?;
        Ok(self
            .client
            .receive_document(token, document_id, &payload)
            .await?)
    }

    #[tracing::instrument(skip(self, session, form))]
    pub async fn complete(
        &self,
        session: &Session,
        document_id: i64,
        form: CompleteForm,
    ) -> Result<Document, ActionError> {
        let payload = form.validate()?;
        let token = session.token().ok_or(ActionError::NoSession)?;
        Ok(self
            .client
            .complete_document(token, document_id, &payload)
            .await?)
    }

    /// Cancel takes no form; the identifier is the whole request
    #[tracing::instrument(skip(self, session))]
    pub async fn cancel(
        &self,
        session: &Session,
        document_id: i64,
    ) -> Result<Document, ActionError> {
        let token = session.token().ok_or(ActionError::NoSession)?;
        Ok(self.client.cancel_document(token, document_id).await?)
    }
}
