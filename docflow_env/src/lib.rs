#![deny(missing_docs)]
//! Typed runtime-environment detection plus the standardized initialization
//! process shared by every docflow entrypoint crate. Using one init path keeps
//! tracing configuration consistent across binaries.

use std::{fmt::Display, str::FromStr};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// The current environment the application is running in
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Production environment
    Production,
    /// Dev and or staging environment
    Develop,
    /// The server is running on localhost
    Local,
}

/// An error which can occur when constructing an [Environment]
#[derive(Debug, Error)]
pub enum DocflowEnvErr {
    /// the ENVIRONMENT variable was absent or unreadable
    #[error("ENVIRONMENT must be provided: {0}")]
    VarErr(#[from] std::env::VarError),
    /// the input string value was not recognized as a valid env
    #[error("{0}")]
    InvalidValue(#[from] UnknownValue),
}

impl Environment {
    /// Attempt to construct a new [Environment] from the `ENVIRONMENT` variable
    #[tracing::instrument(err, level = tracing::Level::TRACE)]
    pub fn new_from_env() -> Result<Self, DocflowEnvErr> {
        let v = std::env::var("ENVIRONMENT")?;
        Ok(Self::from_str(&v)?)
    }

    /// attempt to create a new [Environment] falling back to production if we fail to construct
    pub fn new_or_prod() -> Self {
        Self::new_from_env().unwrap_or(Environment::Production)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "prod"),
            Environment::Develop => write!(f, "dev"),
            Environment::Local => write!(f, "local"),
        }
    }
}

/// Represents a value which cannot be converted into an [Environment]
#[derive(Debug, Error)]
#[error("Could not convert {0} into an environment value")]
pub struct UnknownValue(String);

impl FromStr for Environment {
    type Err = UnknownValue;

    fn from_str(environment: &str) -> Result<Self, UnknownValue> {
        match environment {
            "prod" => Ok(Environment::Production),
            "dev" => Ok(Environment::Develop),
            "local" => Ok(Environment::Local),
            s => Err(UnknownValue(s.to_string())),
        }
    }
}

/// unit struct which defines the behaviour for binary initialization
#[derive(Debug)]
pub struct Entrypoint {
    env: Environment,
}

/// sentinel struct which guarantees that we called [Entrypoint::init]
#[derive(Debug)]
pub struct InitializedEntrypoint(());

impl Default for Entrypoint {
    fn default() -> Self {
        Entrypoint {
            env: Environment::new_or_prod(),
        }
    }
}

impl Entrypoint {
    /// create a new instance of [Self] from an input [Environment]
    pub fn new(env: Environment) -> Self {
        Self { env }
    }

    /// consume self, initialize this binary, and return proof that it was initialized
    pub fn init(self) -> InitializedEntrypoint {
        dotenv::dotenv().ok();
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));

        match self.env {
            Environment::Local => {
                tracing_subscriber::fmt()
                    .with_ansi(true)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .pretty()
                    .init();
            }
            Environment::Production | Environment::Develop => {
                tracing_subscriber::fmt()
                    .with_ansi(false)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .flatten_event(true)
                    .init();
            }
        }

        InitializedEntrypoint(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_environments() {
        assert_eq!(Environment::from_str("prod").unwrap(), Environment::Production);
        assert_eq!(Environment::from_str("dev").unwrap(), Environment::Develop);
        assert_eq!(Environment::from_str("local").unwrap(), Environment::Local);
    }

    #[test]
    fn rejects_unknown_environment() {
        assert!(Environment::from_str("staging").is_err());
    }

    #[test]
    fn round_trips_through_display() {
        for env in [
            Environment::Production,
            Environment::Develop,
            Environment::Local,
        ] {
            assert_eq!(Environment::from_str(&env.to_string()).unwrap(), env);
        }
    }
}
