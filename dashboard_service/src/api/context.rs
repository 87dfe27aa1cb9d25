use crate::api::error::ApiError;
use registry_service_client::RegistryServiceClient;

/// Shared state behind every `/api` handler
#[derive(Clone)]
pub struct AppState {
    registry: Option<RegistryServiceClient>,
}

impl AppState {
    /// `api_base_url` may be absent; the failure is reported per request
    pub fn new(api_base_url: Option<String>) -> Self {
        Self {
            registry: api_base_url.map(RegistryServiceClient::new),
        }
    }

    /// The registry client, or the configuration error every handler maps to
    /// a 500
    pub fn registry(&self) -> Result<&RegistryServiceClient, ApiError> {
        self.registry.as_ref().ok_or(ApiError::Configuration)
    }
}
