//! Core types for playback management

use finetune_core::Track;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// No track assigned
    Idle,

    /// Track assigned, waiting for the source to report metadata
    Loading,

    /// Track ready, not playing
    Paused,

    /// Currently playing
    Playing,
}

/// Generation tag for a source assignment
///
/// Every track switch hands the media element a fresh `LoadId`. Notifications
/// carrying an older id belong to a superseded load and are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct LoadId(u64);

impl LoadId {
    /// The id following this one
    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for LoadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "load#{}", self.0)
    }
}

/// Configuration for the playback controller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Initial volume (0-100, default: 75)
    pub volume: u8,

    /// Initial shuffle flag (default: off)
    pub shuffle: bool,

    /// Initial repeat flag (default: off)
    pub repeat: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            volume: 75,
            shuffle: false,
            repeat: false,
        }
    }
}

/// Read-only snapshot of the playback session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackSession {
    pub current_track: Option<Track>,
    pub state: PlaybackState,
    pub is_playing: bool,
    /// Seconds from the start of the track
    pub current_time: f64,
    /// Seconds, 0 until the source reports metadata
    pub duration: f64,
    pub progress_percent: f64,
    pub volume: u8,
    pub muted: bool,
    pub shuffle: bool,
    pub repeat: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlaybackConfig::default();
        assert_eq!(config.volume, 75);
        assert!(!config.shuffle);
        assert!(!config.repeat);
    }

    #[test]
    fn load_ids_increase() {
        let first = LoadId::default();
        let second = first.next();
        assert!(second > first);
        assert_eq!(second.get(), 1);
        assert_eq!(second.to_string(), "load#1");
    }
}
