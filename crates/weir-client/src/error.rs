//! Error types for management API calls.

use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors surfaced by the management API client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network-level failure: connect, TLS, timeout, or body read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("api error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, verbatim.
        message: String,
    },

    /// User-supplied YAML failed to parse; raised before any network call.
    #[error("invalid yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid cluster definition or configuration file.
    #[error("configuration error: {0}")]
    Config(String),

    /// Configuration file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
