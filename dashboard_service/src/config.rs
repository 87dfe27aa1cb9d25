use anyhow::Context;
pub use docflow_env::Environment;

/// The configuration parameters for the application.
///
/// These are pulled from environment variables, the recommended way to
/// populate the container.
pub struct Config {
    /// The port to listen for HTTP requests on.
    pub port: usize,
    /// The environment we are in
    pub environment: Environment,
    /// Base url of the registry REST service.
    ///
    /// Deliberately optional at startup: the gateway boots without it and
    /// reports the missing configuration per request, so health checks and
    /// the OpenAPI document stay reachable while the deployment is fixed.
    pub api_base_url: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let port: usize = std::env::var("PORT")
            .unwrap_or("8080".to_string())
            .parse::<usize>()
            .context("PORT must be a number")?;
        let environment = Environment::new_or_prod();
        let api_base_url = std::env::var("API_BASE_URL").ok();

        Ok(Config {
            port,
            environment,
            api_base_url,
        })
    }
}
