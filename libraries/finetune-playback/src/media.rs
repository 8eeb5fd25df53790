//! Platform-agnostic media element trait
//!
//! Abstracts the native playable-media primitive (an HTML audio element, a
//! desktop sink, ...). The controller never decodes audio itself.

use crate::error::MediaError;
use crate::types::LoadId;

/// Out-of-band notification raised by a media element
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    /// Source metadata is available
    MetadataLoaded {
        /// Authoritative duration in seconds
        duration: f64,
    },

    /// Playback position moved (natural tick granularity of the source)
    TimeUpdate {
        /// Position in seconds
        position: f64,
    },

    /// Source reached its end
    Ended,
}

/// Playable media primitive driven by the playback controller
///
/// Implementors deliver notifications back through
/// `PlaybackController::handle_media_event`, tagged with the `LoadId` they
/// were handed in `load`.
pub trait MediaElement: Send {
    /// Assign a new source
    ///
    /// Any previous source is abandoned. Notifications for this source must
    /// carry `load_id`.
    fn load(&mut self, load_id: LoadId, url: &str);

    /// Start or resume playback
    ///
    /// # Returns
    /// * `Ok(())` - Playback started
    /// * `Err(_)` - Source unavailable or start refused by the environment
    fn play(&mut self) -> Result<(), MediaError>;

    /// Pause playback
    fn pause(&mut self);

    /// Move the playback position (seconds)
    fn set_current_time(&mut self, seconds: f64);

    /// Set output volume, normalized to 0.0-1.0
    fn set_volume(&mut self, volume: f64);
}

/// Media element that accepts every command and never raises notifications
///
/// Placeholder until the host attaches a real element.
#[derive(Debug, Default)]
pub struct NullMedia;

impl MediaElement for NullMedia {
    fn load(&mut self, _load_id: LoadId, _url: &str) {}

    fn play(&mut self) -> Result<(), MediaError> {
        Ok(())
    }

    fn pause(&mut self) {}

    fn set_current_time(&mut self, _seconds: f64) {}

    fn set_volume(&mut self, _volume: f64) {}
}
