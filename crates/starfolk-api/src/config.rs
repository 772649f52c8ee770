//! Service configuration.
//!
//! The listening address is read from the environment with the `API`
//! prefix, falling back to `127.0.0.1:4000`:
//!
//! - `API_HOST` -- bind host
//! - `API_PORT` -- bind port

use serde::Deserialize;

/// Prefix of the environment variables read by [`ServiceConfig::from_env`].
pub const ENV_PREFIX: &str = "API";

/// Default bind host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default TCP port.
pub const DEFAULT_PORT: u16 = 4000;

/// Errors that can occur when building the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A source could not be read or a value had the wrong type.
    #[error("invalid configuration: {source}")]
    Invalid {
        /// The underlying error from the `config` crate.
        #[from]
        source: ::config::ConfigError,
    },
}

/// Where the HTTP server listens.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceConfig {
    /// Host name or address to bind to.
    pub host: String,
    /// TCP port to listen on.
    pub port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
        }
    }
}

impl ServiceConfig {
    /// Build the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `API_PORT` is not a valid port.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_environment(::config::Environment::with_prefix(ENV_PREFIX))
    }

    /// Build the configuration from an explicit environment source.
    pub fn from_environment(env: ::config::Environment) -> Result<Self, ConfigError> {
        let settings = ::config::Config::builder()
            .set_default("host", DEFAULT_HOST)?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .add_source(env.try_parsing(true))
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}
