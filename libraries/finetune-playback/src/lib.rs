//! Finetune - Playback Session Control
//!
//! Platform-agnostic control of the single "now playing" session.
//!
//! This crate provides:
//! - Transport control (play, pause, toggle, seek)
//! - Volume control (0-100%, mute/unmute), persisted across tracks
//! - Sequential and shuffled next/previous over a supplied track list
//! - Repeat (restart the finished track)
//! - Cancellation of superseded source loads
//! - Fire-and-forget play notifications to the catalog
//! - Event queue for UI synchronization
//!
//! # Architecture
//!
//! `finetune-playback` never touches audio samples. Playback is delegated to a
//! native media primitive behind the [`MediaElement`] trait; its notifications
//! (metadata, time updates, end of track) are fed back through
//! [`PlaybackController::handle_media_event`].
//!
//! # Example
//!
//! ```rust
//! use finetune_core::InMemoryCatalog;
//! use finetune_playback::{MediaEvent, NullMedia, PlaybackConfig, PlaybackController, PlaybackState};
//!
//! let catalog = InMemoryCatalog::classical();
//! let symphony = &catalog.tracks()[0];
//!
//! let mut controller = PlaybackController::new(PlaybackConfig::default(), Box::new(NullMedia));
//! controller.play(Some(symphony)).unwrap();
//! assert_eq!(controller.state(), PlaybackState::Loading);
//!
//! // The media element reports metadata for the current load
//! let load_id = controller.load_id();
//! controller.handle_media_event(load_id, MediaEvent::MetadataLoaded { duration: 272.0 });
//! assert!(controller.is_playing());
//!
//! assert!(controller.seek(50.0));
//! assert_eq!(controller.formatted_time().0, "2:16");
//! ```

mod controller;
mod error;
mod events;
mod media;
pub mod navigation;
pub mod time;
pub mod types;
mod volume;

// Public exports
pub use controller::PlaybackController;
pub use error::{MediaError, PlaybackError, Result};
pub use events::PlaybackEvent;
pub use media::{MediaElement, MediaEvent, NullMedia};
pub use time::format_time;
pub use types::{LoadId, PlaybackConfig, PlaybackSession, PlaybackState};
pub use volume::Volume;
