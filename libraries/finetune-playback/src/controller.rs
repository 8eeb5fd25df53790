//! Playback controller - core orchestration
//!
//! Owns the single playback session and the media element. User calls issue
//! transport commands; position and duration change only through media
//! notifications (and `seek`).

use finetune_core::{CatalogService, Track, TrackId};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

use crate::{
    error::{PlaybackError, Result},
    events::PlaybackEvent,
    media::{MediaElement, MediaEvent, NullMedia},
    navigation::{next_index, previous_index, random_index},
    time::{format_time, progress_percent},
    types::{LoadId, PlaybackConfig, PlaybackSession, PlaybackState},
    volume::Volume,
};

/// Central playback control
///
/// State machine over the playback session:
/// - `Idle` until a track is assigned
/// - `Loading` until the source reports metadata
/// - `Paused` / `Playing` afterwards
///
/// Navigation (next/previous) works over a caller-supplied track list,
/// normally the current filtered catalog view.
pub struct PlaybackController {
    // State
    state: PlaybackState,
    current_track: Option<Track>,
    current_time: f64,
    duration: f64,

    // Start requested while the source was still loading
    start_pending: bool,

    // Generation of the current source assignment
    load_id: LoadId,

    // Settings
    volume: Volume,
    shuffle: bool,
    repeat: bool,

    // Collaborators
    media: Box<dyn MediaElement>,
    catalog: Option<Arc<dyn CatalogService>>,
    rng: StdRng,

    // Event queue for UI synchronization
    pending_events: Vec<PlaybackEvent>,
}

impl PlaybackController {
    /// Create new playback controller driving `media`
    pub fn new(config: PlaybackConfig, media: Box<dyn MediaElement>) -> Self {
        let mut controller = Self {
            state: PlaybackState::Idle,
            current_track: None,
            current_time: 0.0,
            duration: 0.0,
            start_pending: false,
            load_id: LoadId::default(),
            volume: Volume::new(config.volume),
            shuffle: config.shuffle,
            repeat: config.repeat,
            media,
            catalog: None,
            rng: StdRng::from_entropy(),
            pending_events: Vec::new(),
        };
        controller.apply_volume();
        controller
    }

    /// Attach the catalog that receives play notifications
    pub fn with_catalog(mut self, catalog: Arc<dyn CatalogService>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Use a deterministic shuffle sequence
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    // ===== Playback Control =====

    /// Start or resume playback, optionally switching track first
    ///
    /// A track with a different id replaces the current one and resets the
    /// position; the same id is a no-op re-assignment. While the new source
    /// is loading, the start is deferred until metadata arrives.
    ///
    /// # Returns
    /// * `Ok(())` - Playing, or start deferred until the source is ready
    /// * `Err(NoTrackLoaded)` - No track given and none assigned
    /// * `Err(StartFailed)` - Media refused to start; session stays paused
    pub fn play(&mut self, track: Option<&Track>) -> Result<()> {
        if let Some(track) = track {
            if self.current_track_id() != Some(track.id) {
                self.assign_track(track.clone());
            }
        }

        match self.state {
            PlaybackState::Idle => {
                tracing::debug!("play() with no track assigned");
                Err(PlaybackError::NoTrackLoaded)
            }
            PlaybackState::Loading => {
                // Started once metadata arrives
                self.start_pending = true;
                Ok(())
            }
            PlaybackState::Paused => self.start_playback(),
            PlaybackState::Playing => Ok(()),
        }
    }

    /// Pause playback
    ///
    /// Only meaningful while playing. During loading it cancels a deferred
    /// start; otherwise it is a no-op.
    pub fn pause(&mut self) {
        match self.state {
            PlaybackState::Playing => {
                self.media.pause();
                self.set_state(PlaybackState::Paused);
            }
            PlaybackState::Loading if self.start_pending => {
                self.start_pending = false;
            }
            _ => tracing::debug!(state = ?self.state, "pause() ignored"),
        }
    }

    /// Pause when playing, play otherwise
    pub fn toggle(&mut self) -> Result<()> {
        match self.state {
            PlaybackState::Playing => {
                self.pause();
                Ok(())
            }
            PlaybackState::Loading if self.start_pending => {
                self.pause();
                Ok(())
            }
            PlaybackState::Loading | PlaybackState::Paused => self.play(None),
            PlaybackState::Idle => {
                tracing::debug!("toggle() ignored, no track assigned");
                Ok(())
            }
        }
    }

    /// Jump to `percent` (0-100) of the track
    ///
    /// Rejected while the duration is unknown. Does not change play/pause
    /// state.
    ///
    /// # Returns
    /// `true` if the position was moved
    pub fn seek(&mut self, percent: f64) -> bool {
        if self.duration <= 0.0 || !percent.is_finite() {
            tracing::debug!(percent, duration = self.duration, "seek() rejected");
            return false;
        }

        let position =
            (percent.clamp(0.0, 100.0) / 100.0 * self.duration).clamp(0.0, self.duration);
        self.media.set_current_time(position);
        self.current_time = position;
        self.emit_position_update();
        true
    }

    /// Advance in `tracks`
    ///
    /// Sequential order wraps to the first track after the last; shuffle
    /// picks any track, possibly the current one. The selected track is
    /// played; a refused start is reported through the event queue.
    ///
    /// # Returns
    /// The selected track
    pub fn next(&mut self, tracks: &[Track]) -> Result<Track> {
        self.navigate(tracks, next_index)
    }

    /// Go back in `tracks`
    ///
    /// Sequential order wraps to the last track before the first.
    pub fn previous(&mut self, tracks: &[Track]) -> Result<Track> {
        self.navigate(tracks, previous_index)
    }

    fn navigate(
        &mut self,
        tracks: &[Track],
        step: fn(usize, Option<usize>) -> Option<usize>,
    ) -> Result<Track> {
        if tracks.is_empty() {
            return Err(PlaybackError::EmptyTrackList);
        }
        let current_id = self.current_track_id().ok_or(PlaybackError::NoActiveTrack)?;
        let position = tracks.iter().position(|track| track.id == current_id);

        let index = if self.shuffle {
            random_index(tracks.len(), &mut self.rng)
        } else {
            step(tracks.len(), position)
        }
        .ok_or(PlaybackError::EmptyTrackList)?;

        let target = tracks[index].clone();
        if let Err(err) = self.play(Some(&target)) {
            tracing::debug!(track_id = %target.id, %err, "Selected track did not start");
        }
        Ok(target)
    }

    // ===== Volume =====

    /// Set volume (clamped to 0-100)
    pub fn set_volume(&mut self, level: i32) {
        self.volume.set_level(level);
        self.apply_volume();
        self.emit_volume_changed();
    }

    /// Get current volume level (0-100)
    pub fn volume(&self) -> u8 {
        self.volume.level()
    }

    /// Mute audio
    pub fn mute(&mut self) {
        self.volume.mute();
        self.apply_volume();
        self.emit_volume_changed();
    }

    /// Unmute audio
    pub fn unmute(&mut self) {
        self.volume.unmute();
        self.apply_volume();
        self.emit_volume_changed();
    }

    /// Toggle mute state
    pub fn toggle_mute(&mut self) {
        self.volume.toggle_mute();
        self.apply_volume();
        self.emit_volume_changed();
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    // ===== Shuffle & Repeat =====

    pub fn set_shuffle(&mut self, enabled: bool) {
        self.shuffle = enabled;
    }

    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    /// Restart the track when it ends instead of stopping
    pub fn set_repeat(&mut self, enabled: bool) {
        self.repeat = enabled;
    }

    pub fn repeat(&self) -> bool {
        self.repeat
    }

    // ===== Media Notifications =====

    /// Apply a notification from the media element
    ///
    /// Notifications tagged with a superseded `LoadId` are ignored.
    pub fn handle_media_event(&mut self, load_id: LoadId, event: MediaEvent) {
        if load_id != self.load_id || self.current_track.is_none() {
            tracing::debug!(%load_id, current = %self.load_id, ?event, "Dropping stale media event");
            return;
        }

        match event {
            MediaEvent::MetadataLoaded { duration } => self.handle_metadata(duration),
            MediaEvent::TimeUpdate { position } => {
                self.current_time = self.clamp_position(position);
                self.emit_position_update();
            }
            MediaEvent::Ended => self.handle_track_finished(),
        }
    }

    fn handle_metadata(&mut self, duration: f64) {
        self.duration = if duration.is_finite() && duration > 0.0 {
            duration
        } else {
            0.0
        };
        self.current_time = self.clamp_position(self.current_time);
        self.pending_events
            .push(PlaybackEvent::DurationKnown { duration: self.duration });

        if self.state == PlaybackState::Loading {
            self.set_state(PlaybackState::Paused);
            if std::mem::take(&mut self.start_pending) {
                // Failure already reported as an event
                let _ = self.start_playback();
            }
        }
    }

    fn handle_track_finished(&mut self) {
        let Some(track_id) = self.current_track_id() else {
            return;
        };
        if self.state == PlaybackState::Loading {
            tracing::debug!(%track_id, "Track ended before metadata, ignored");
            return;
        }

        // Repeat only restarts a track that was audibly playing
        let restart = self.repeat && self.state == PlaybackState::Playing;

        self.current_time = 0.0;
        self.pending_events.push(PlaybackEvent::TrackFinished {
            track_id,
            restarted: restart,
        });

        if restart {
            self.media.set_current_time(0.0);
            self.emit_position_update();
            // Left paused at 0 if the restart is refused
            let _ = self.start_playback();
        } else {
            self.emit_position_update();
            self.set_state(PlaybackState::Paused);
        }
    }

    // ===== State Queries =====

    /// Get current playback state
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Whether audio is playing
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Get currently assigned track
    pub fn current_track(&self) -> Option<&Track> {
        self.current_track.as_ref()
    }

    /// Position in seconds
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Duration in seconds, 0 until the source reports metadata
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Id handed to the media element with the current source
    pub fn load_id(&self) -> LoadId {
        self.load_id
    }

    /// Progress 0-100, 0 while the duration is unknown
    pub fn progress_percent(&self) -> f64 {
        progress_percent(self.current_time, self.duration)
    }

    /// `(position, duration)` formatted as `M:SS`
    pub fn formatted_time(&self) -> (String, String) {
        (format_time(self.current_time), format_time(self.duration))
    }

    /// Snapshot of the whole session
    pub fn session(&self) -> PlaybackSession {
        PlaybackSession {
            current_track: self.current_track.clone(),
            state: self.state,
            is_playing: self.is_playing(),
            current_time: self.current_time,
            duration: self.duration,
            progress_percent: self.progress_percent(),
            volume: self.volume.level(),
            muted: self.volume.is_muted(),
            shuffle: self.shuffle,
            repeat: self.repeat,
        }
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// The UI should call this after each transport call or notification to
    /// synchronize with playback state.
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internals =====

    fn current_track_id(&self) -> Option<TrackId> {
        self.current_track.as_ref().map(|track| track.id)
    }

    fn assign_track(&mut self, track: Track) {
        let previous_track_id = self.current_track_id();
        let track_id = track.id;

        self.load_id = self.load_id.next();
        self.current_time = 0.0;
        self.duration = 0.0;
        self.start_pending = false;

        self.media.load(self.load_id, &track.audio_url);
        self.apply_volume();
        self.current_track = Some(track);

        self.pending_events.push(PlaybackEvent::TrackChanged {
            track_id,
            previous_track_id,
        });
        self.set_state(PlaybackState::Loading);
        self.spawn_play_notification(track_id);
    }

    fn start_playback(&mut self) -> Result<()> {
        match self.media.play() {
            Ok(()) => {
                self.set_state(PlaybackState::Playing);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(track_id = ?self.current_track_id(), %err, "Playback failed to start");
                self.set_state(PlaybackState::Paused);
                self.pending_events.push(PlaybackEvent::Error {
                    message: err.to_string(),
                });
                Err(PlaybackError::StartFailed(err))
            }
        }
    }

    /// Fire-and-forget notification; never gates the transition
    fn spawn_play_notification(&self, track_id: TrackId) {
        let Some(catalog) = self.catalog.as_ref().map(Arc::clone) else {
            return;
        };

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    if let Err(err) = catalog.notify_play(track_id).await {
                        tracing::debug!(%track_id, %err, "Play notification failed");
                    }
                });
            }
            Err(_) => {
                tracing::debug!(%track_id, "No async runtime, play notification skipped");
            }
        }
    }

    fn clamp_position(&self, position: f64) -> f64 {
        if !position.is_finite() {
            return 0.0;
        }
        if self.duration > 0.0 {
            position.clamp(0.0, self.duration)
        } else {
            position.max(0.0)
        }
    }

    fn apply_volume(&mut self) {
        self.media.set_volume(self.volume.gain());
    }

    fn set_state(&mut self, state: PlaybackState) {
        if self.state != state {
            self.state = state;
            self.pending_events.push(PlaybackEvent::StateChanged { state });
        }
    }

    fn emit_position_update(&mut self) {
        self.pending_events.push(PlaybackEvent::PositionUpdate {
            position: self.current_time,
            progress_percent: self.progress_percent(),
        });
    }

    fn emit_volume_changed(&mut self) {
        self.pending_events.push(PlaybackEvent::VolumeChanged {
            level: self.volume.level(),
            is_muted: self.volume.is_muted(),
        });
    }
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new(PlaybackConfig::default(), Box::new(NullMedia))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MediaError;
    use crate::media::fake::{FakeMedia, MediaLog};
    use finetune_core::InMemoryCatalog;
    use std::sync::Mutex;

    fn tracks() -> Vec<Track> {
        InMemoryCatalog::classical().tracks()[..3].to_vec()
    }

    fn controller() -> (PlaybackController, Arc<Mutex<MediaLog>>) {
        let (media, log) = FakeMedia::new();
        (
            PlaybackController::new(PlaybackConfig::default(), Box::new(media)),
            log,
        )
    }

    #[test]
    fn create_controller() {
        let controller = PlaybackController::default();
        assert_eq!(controller.state(), PlaybackState::Idle);
        assert_eq!(controller.volume(), 75);
        assert!(controller.current_track().is_none());
        assert!(!controller.is_playing());
    }

    #[test]
    fn initial_volume_reaches_media() {
        let (_controller, log) = controller();
        assert_eq!(log.lock().unwrap().volume, Some(0.75));
    }

    #[test]
    fn play_without_track_is_reported() {
        let (mut controller, _) = controller();
        assert!(matches!(
            controller.play(None),
            Err(PlaybackError::NoTrackLoaded)
        ));
        assert_eq!(controller.state(), PlaybackState::Idle);
    }

    #[test]
    fn play_new_track_enters_loading_then_plays_on_metadata() {
        let (mut controller, log) = controller();
        let tracks = tracks();

        controller.play(Some(&tracks[0])).unwrap();
        assert_eq!(controller.state(), PlaybackState::Loading);
        assert_eq!(log.lock().unwrap().play_calls, 0);

        let load_id = controller.load_id();
        controller.handle_media_event(load_id, MediaEvent::MetadataLoaded { duration: 272.0 });

        assert_eq!(controller.state(), PlaybackState::Playing);
        assert_eq!(controller.duration(), 272.0);
        assert_eq!(log.lock().unwrap().play_calls, 1);
    }

    #[test]
    fn pause_during_loading_cancels_deferred_start() {
        let (mut controller, log) = controller();
        let tracks = tracks();

        controller.play(Some(&tracks[0])).unwrap();
        controller.pause();
        controller.handle_media_event(controller.load_id(), MediaEvent::MetadataLoaded { duration: 10.0 });

        assert_eq!(controller.state(), PlaybackState::Paused);
        assert_eq!(log.lock().unwrap().play_calls, 0);
    }

    #[test]
    fn failed_start_leaves_session_paused() {
        let (mut controller, log) = controller();
        let tracks = tracks();

        controller.play(Some(&tracks[0])).unwrap();
        log.lock().unwrap().fail_next_play = Some(MediaError::Blocked("autoplay".into()));
        controller.handle_media_event(controller.load_id(), MediaEvent::MetadataLoaded { duration: 10.0 });

        assert_eq!(controller.state(), PlaybackState::Paused);
        let events = controller.drain_events();
        assert!(events
            .iter()
            .any(|e| matches!(e, PlaybackEvent::Error { message } if message.contains("autoplay"))));

        // A later explicit play succeeds
        controller.play(None).unwrap();
        assert!(controller.is_playing());
    }

    #[test]
    fn volume_persists_across_track_changes() {
        let (mut controller, log) = controller();
        let tracks = tracks();

        controller.set_volume(40);
        controller.play(Some(&tracks[0])).unwrap();
        controller.play(Some(&tracks[1])).unwrap();

        assert_eq!(controller.volume(), 40);
        assert_eq!(log.lock().unwrap().volume, Some(0.4));
    }

    #[test]
    fn mute_sends_zero_gain() {
        let (mut controller, log) = controller();

        controller.mute();
        assert!(controller.is_muted());
        assert_eq!(log.lock().unwrap().volume, Some(0.0));

        controller.unmute();
        assert_eq!(log.lock().unwrap().volume, Some(0.75));
    }

    #[test]
    fn stale_events_are_ignored() {
        let (mut controller, _) = controller();
        let tracks = tracks();

        controller.play(Some(&tracks[0])).unwrap();
        let first_load = controller.load_id();
        controller.play(Some(&tracks[1])).unwrap();

        controller.handle_media_event(first_load, MediaEvent::MetadataLoaded { duration: 99.0 });
        assert_eq!(controller.state(), PlaybackState::Loading);
        assert_eq!(controller.duration(), 0.0);

        controller.handle_media_event(first_load, MediaEvent::Ended);
        assert_eq!(controller.state(), PlaybackState::Loading);
    }

    #[test]
    fn events_are_drained() {
        let (mut controller, _) = controller();
        let tracks = tracks();

        controller.play(Some(&tracks[0])).unwrap();
        assert!(controller.has_pending_events());

        let events = controller.drain_events();
        assert!(matches!(
            events[0],
            PlaybackEvent::TrackChanged { previous_track_id: None, .. }
        ));
        assert!(events.contains(&PlaybackEvent::StateChanged {
            state: PlaybackState::Loading
        }));
        assert!(!controller.has_pending_events());
    }
}
