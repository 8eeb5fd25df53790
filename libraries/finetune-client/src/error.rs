//! Error types for the catalog client.

use finetune_core::CoreError;
use thiserror::Error;

/// Errors that can occur when talking to a Finetune catalog server.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    Unreachable(String),
}

impl ClientError {
    /// Classify a transport error
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            ClientError::Unreachable(err.to_string())
        } else {
            ClientError::Request(err)
        }
    }
}

impl From<ClientError> for CoreError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Request(_) | ClientError::Unreachable(_) => {
                CoreError::network(err.to_string())
            }
            ClientError::Server { .. } => CoreError::unavailable(err.to_string()),
            ClientError::InvalidUrl(_) | ClientError::ParseError(_) => {
                CoreError::Other(err.to_string())
            }
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
