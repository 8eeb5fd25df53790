/// Core error types for Finetune
use thiserror::Error;

use crate::types::TrackId;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Finetune
#[derive(Error, Debug)]
pub enum CoreError {
    /// Two catalog entries share an id
    #[error("Duplicate track id: {0}")]
    DuplicateTrackId(TrackId),

    /// Declared duration is not in `M:SS` form
    #[error("Invalid duration: {0:?}")]
    InvalidDuration(String),

    /// Catalog backend could not answer
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),

    /// Network error (remote catalog implementations)
    #[error("Network error: {0}")]
    Network(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl CoreError {
    /// Create an unavailable error
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }
}
