use anyhow::Context;
use dashboard_service::config::Config;
use docflow_env::Entrypoint;

#[tokio::main]
#[tracing::instrument(err)]
async fn main() -> anyhow::Result<()> {
    Entrypoint::default().init();

    // Parse our configuration from the environment.
    let config = Config::from_env().context("expected to be able to generate config")?;

    tracing::trace!("initialized config");

    dashboard_service::setup_and_serve(config).await
}
