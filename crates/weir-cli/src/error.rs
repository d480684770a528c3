//! Console error types.

use std::fmt;

/// Console-specific errors.
#[derive(Debug)]
pub enum CliError {
    /// A management API call failed.
    Client(weir_client::ClientError),
    /// Invalid console configuration.
    Config(String),
    /// Output formatting error.
    Format(String),
    /// The referenced object does not exist on the cluster.
    NotFound(String),
    /// Invalid argument, e.g. a spec that renames its object.
    InvalidArgument(String),
    /// IO error.
    Io(std::io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Client(e) => write!(f, "{e}"),
            Self::Config(msg) => write!(f, "configuration error: {msg}"),
            Self::Format(msg) => write!(f, "format error: {msg}"),
            Self::NotFound(name) => write!(f, "object not found: {name}"),
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            Self::Io(e) => write!(f, "IO error: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Client(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<weir_client::ClientError> for CliError {
    fn from(err: weir_client::ClientError) -> Self {
        Self::Client(err)
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
