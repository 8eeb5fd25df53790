//! Error types for playback management

use thiserror::Error;

/// Failures reported by the underlying media element
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaError {
    /// The audio resource could not be found or fetched
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    /// The environment refused to start playback (e.g. autoplay policy)
    #[error("Playback blocked: {0}")]
    Blocked(String),
}

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// No track is currently loaded
    #[error("No track loaded")]
    NoTrackLoaded,

    /// Navigation requested without a current track
    #[error("No active track")]
    NoActiveTrack,

    /// Navigation requested over an empty list
    #[error("Track list is empty")]
    EmptyTrackList,

    /// The media element refused to start
    #[error("Playback failed to start: {0}")]
    StartFailed(#[from] MediaError),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
