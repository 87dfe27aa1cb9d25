/*!
Dashboard Service

The backend-for-frontend gateway of the docflow dashboard. Every `/api`
route attaches the caller's bearer token and forwards to the registry;
business rules about document lifecycle live upstream, not here.
*/

#![warn(
    unreachable_pub,
    redundant_lifetimes,
    unsafe_code,
    clippy::needless_pass_by_value,
    clippy::needless_pass_by_ref_mut
)]

pub mod api;
pub mod config;

use crate::api::context::AppState;
use crate::config::Config;
use anyhow::Context;
use tokio::net::TcpListener;

pub async fn setup_and_serve(config: Config) -> anyhow::Result<()> {
    if config.api_base_url.is_none() {
        // per-request failure contract: the gateway still starts, serves
        // health, and answers /api calls with a configuration error
        tracing::warn!("API_BASE_URL is not set; /api routes will answer 500");
    }

    let state = AppState::new(config.api_base_url.clone());

    let listener = TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .context("failed to bind to port")?;

    tracing::info!(
        "dashboard service is up and running with environment {} on port {}",
        &config.environment,
        &config.port
    );

    axum::serve(listener, api::service(state))
        .await
        .context("error starting service")
}
