//! Play notification wire types

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::types::TrackId;

/// Action reported alongside a track id
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayAction {
    /// Track was selected for playback
    Play,

    /// Any other action; accepted and ignored
    Other(String),
}

impl PlayAction {
    /// Wire name
    pub fn as_str(&self) -> &str {
        match self {
            PlayAction::Play => "play",
            PlayAction::Other(action) => action,
        }
    }
}

impl Serialize for PlayAction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PlayAction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(if raw == "play" {
            PlayAction::Play
        } else {
            PlayAction::Other(raw)
        })
    }
}

/// Body of the advisory play endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayNotification {
    pub track_id: TrackId,
    pub action: PlayAction,
}

impl PlayNotification {
    /// Notification that `track_id` started playing
    pub fn play(track_id: TrackId) -> Self {
        Self {
            track_id,
            action: PlayAction::Play,
        }
    }
}

/// Body received by the advisory play endpoint
///
/// Loosely typed: any JSON value is accepted so the endpoint can acknowledge
/// whatever a player sends. Use [`PlayReport::played_track`] to extract a
/// usable play.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayReport {
    #[serde(default)]
    pub track_id: Value,

    #[serde(default)]
    pub action: Value,
}

impl PlayReport {
    /// Read a report out of an arbitrary JSON body
    ///
    /// Non-object bodies carry no fields and yield an empty report.
    pub fn from_body(body: Value) -> Self {
        match body {
            Value::Object(_) => serde_json::from_value(body).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    /// Track id when this reports a play of a well-formed id
    ///
    /// The action must be exactly `"play"`. The id may be an integer or a
    /// decimal string within the `TrackId` range.
    pub fn played_track(&self) -> Option<TrackId> {
        if self.action.as_str() != Some(PlayAction::Play.as_str()) {
            return None;
        }
        match &self.track_id {
            Value::Number(number) => number
                .as_u64()
                .and_then(|id| u32::try_from(id).ok())
                .map(TrackId::new),
            Value::String(raw) => raw.parse().ok(),
            _ => None,
        }
    }
}

/// Acknowledgement returned for a play notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub success: bool,
}

impl Acknowledgement {
    pub const OK: Acknowledgement = Acknowledgement { success: true };
}
