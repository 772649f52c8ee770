//! Error types for the server binary.

/// Top-level error for the server binary.
///
/// Each variant wraps a startup or serving failure so `main` can
/// propagate with `?`. A bad data file is not one of them: the store
/// serves an empty collection instead.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration could not be read from the environment.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: starfolk_api::ConfigError,
    },

    /// The HTTP server failed to bind or serve.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: starfolk_api::ServerError,
    },
}
