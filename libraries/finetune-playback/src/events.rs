//! Playback Events
//!
//! Event-based communication for UI synchronization. Events are emitted at
//! key points:
//! - State changes (loading/play/pause)
//! - Track changes
//! - Duration and position updates
//! - Volume changes
//! - End of track and reported failures

use finetune_core::TrackId;
use serde::{Deserialize, Serialize};

use crate::types::PlaybackState;

/// Events emitted by the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Playback state changed
    StateChanged {
        /// The new playback state
        state: PlaybackState,
    },

    /// A different track was assigned
    TrackChanged {
        /// ID of the new (current) track
        track_id: TrackId,
        /// ID of the previous track (if any)
        previous_track_id: Option<TrackId>,
    },

    /// Source reported its duration
    DurationKnown {
        /// Duration in seconds
        duration: f64,
    },

    /// Position moved (source tick or seek)
    PositionUpdate {
        /// Position in seconds
        position: f64,
        /// Progress 0-100
        progress_percent: f64,
    },

    /// Volume or mute changed
    VolumeChanged {
        /// Volume level (0-100)
        level: u8,
        /// Whether audio is muted
        is_muted: bool,
    },

    /// Track reached its end
    TrackFinished {
        /// ID of the finished track
        track_id: TrackId,
        /// Whether it was restarted because repeat is on
        restarted: bool,
    },

    /// Non-fatal failure (e.g. playback refused to start)
    Error {
        /// Error message
        message: String,
    },
}
