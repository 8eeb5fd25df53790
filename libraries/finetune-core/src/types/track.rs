/// Track domain type
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{CoreError, Result};
use crate::types::{Genre, TrackId};

/// Catalog track
///
/// Immutable once created by the catalog. Filtering selects tracks, it never
/// changes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Work title
    pub title: String,

    /// Composer name
    pub composer: String,

    /// Declared length as `M:SS` (display only)
    pub duration: String,

    /// Theme token for the presentation layer
    pub color: String,

    /// Genre used for filtering
    pub genre: Genre,

    /// Composition / release year
    pub year: u16,

    /// Popularity score (0-100)
    pub popularity: u8,

    /// Locator of the playable audio resource
    pub audio_url: String,

    /// Album name
    pub album: String,

    /// Short description
    pub description: String,
}

impl Track {
    /// Parse the declared `M:SS` duration
    ///
    /// The value is informational; the playback controller takes the
    /// authoritative duration from the audio source.
    pub fn declared_duration(&self) -> Result<Duration> {
        parse_duration(&self.duration)
    }

    /// Case-insensitive substring match against title or composer
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn matches_search(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.title.to_lowercase().contains(needle)
            || self.composer.to_lowercase().contains(needle)
    }
}

fn parse_duration(raw: &str) -> Result<Duration> {
    let invalid = || CoreError::InvalidDuration(raw.to_string());

    let (minutes, seconds) = raw.trim().split_once(':').ok_or_else(invalid)?;
    if seconds.len() != 2 {
        return Err(invalid());
    }

    let minutes: u64 = minutes.parse().map_err(|_| invalid())?;
    let seconds: u64 = seconds.parse().map_err(|_| invalid())?;
    if seconds >= 60 {
        return Err(invalid());
    }

    Ok(Duration::from_secs(minutes * 60 + seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track_with_duration(duration: &str) -> Track {
        Track {
            id: TrackId::new(1),
            title: "Test".to_string(),
            composer: "Composer".to_string(),
            duration: duration.to_string(),
            color: String::new(),
            genre: Genre::Sonata,
            year: 1800,
            popularity: 50,
            audio_url: "https://example.com/a.wav".to_string(),
            album: String::new(),
            description: String::new(),
        }
    }

    #[test]
    fn declared_duration_parses() {
        let track = track_with_duration("4:32");
        assert_eq!(track.declared_duration().unwrap(), Duration::from_secs(272));

        let long = track_with_duration("72:05");
        assert_eq!(long.declared_duration().unwrap(), Duration::from_secs(4325));
    }

    #[test]
    fn declared_duration_rejects_malformed() {
        for raw in ["", "4", "4:3", "4:60", "a:10", "4:xx"] {
            let err = track_with_duration(raw).declared_duration().unwrap_err();
            assert!(matches!(err, CoreError::InvalidDuration(_)), "{raw}");
        }
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let json = serde_json::to_value(track_with_duration("3:30")).unwrap();
        assert_eq!(json["audioUrl"], "https://example.com/a.wav");
        assert_eq!(json["genre"], "Sonata");
        assert_eq!(json["id"], 1);
        assert!(json.get("audio_url").is_none());
    }
}
