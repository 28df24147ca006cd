//! Player controller - core orchestration
//!
//! Owns the authoritative "now playing" track and transport state, and
//! mediates all queue navigation. Audio I/O goes through the
//! [`AudioRenderer`] boundary; renderer callbacks come back in through
//! [`PlayerController::handle_renderer_event`].

use crate::{
    error::{PlaybackError, Result},
    events::PlayerEvent,
    queue::Queue,
    renderer::{AudioRenderer, RendererEvent},
    types::{PlayerConfig, PlayerState, RepeatMode},
    volume::Volume,
};
use drift_core::types::{RadioStation, Track};
use std::time::Duration;
use tracing::{debug, warn};

/// Central playback control
///
/// Single logical owner, no internal locking: all methods and renderer
/// events are expected to run on one UI-coordination thread. Network and
/// renderer work never block a transition; their results arrive as
/// [`RendererEvent`]s.
pub struct PlayerController {
    // State
    state: PlayerState,
    current: Option<Track>,

    // Queue
    queue: Queue,

    // Settings
    volume: Volume,
    repeat: RepeatMode,
    config: PlayerConfig,

    // Transport position as last reported by the renderer
    position: Duration,
    duration: Duration,

    // Renderer session exists once a load has been dispatched
    renderer: Box<dyn AudioRenderer>,
    has_session: bool,

    // Loads dispatched but not yet acknowledged by Ready/Failed. Only the
    // most recent load's outcome is applied; earlier outcomes are stale.
    pending_loads: u32,

    // Event queue for UI synchronization
    pending_events: Vec<PlayerEvent>,
}

impl PlayerController {
    /// Create a new controller over the given renderer
    pub fn new(renderer: Box<dyn AudioRenderer>, config: PlayerConfig) -> Self {
        let mut renderer = renderer;
        let volume = Volume::new(config.volume);
        renderer.set_volume(volume.gain());

        Self {
            state: PlayerState::Idle,
            current: None,
            queue: Queue::new(),
            volume,
            repeat: RepeatMode::Off,
            config,
            position: Duration::ZERO,
            duration: Duration::ZERO,
            renderer,
            has_session: false,
            pending_loads: 0,
            pending_events: Vec::new(),
        }
    }

    // ===== Loading =====

    /// Load a track and start playing it once the renderer is ready
    ///
    /// If the track is present in the queue, the queue pointer follows it.
    /// On a renderer load failure the track stays set so the UI can show the
    /// failed track with an error affordance.
    pub fn load_and_play(&mut self, track: Track) -> Result<()> {
        if let Some(index) = self.queue.tracks().iter().position(|t| t.id == track.id) {
            self.queue.jump_to(index);
        }
        self.load_track(track)
    }

    /// Load and play the queue track at `index`
    ///
    /// Out-of-range indices are rejected without touching any state.
    pub fn play_at(&mut self, index: usize) -> Result<()> {
        let track = self
            .queue
            .jump_to(index)
            .cloned()
            .ok_or(PlaybackError::IndexOutOfBounds(index))?;
        self.load_track(track)
    }

    /// Load and play a live radio station
    ///
    /// The station is converted to a live track outside the queue; the queue
    /// pointer is untouched.
    pub fn play_station(&mut self, station: &RadioStation) -> Result<()> {
        self.load_track(station.to_track())
    }

    fn load_track(&mut self, track: Track) -> Result<()> {
        let previous_id = self.current.as_ref().map(|t| t.id.clone());

        if !track.stream_url.starts_with("http://") && !track.stream_url.starts_with("https://") {
            // Keep the track set so the UI can surface what failed
            let url = track.stream_url.clone();
            self.current = Some(track);
            self.set_state(PlayerState::Errored(format!("invalid stream URL: {url}")));
            self.emit(PlayerEvent::Error {
                message: format!("invalid stream URL: {url}"),
            });
            return Err(PlaybackError::InvalidStreamUrl(url));
        }

        debug!(track = %track.id, title = %track.title, "loading track");

        self.position = Duration::ZERO;
        self.duration = track.duration;
        self.pending_loads += 1;

        if let Err(e) = self.renderer.load(&track.stream_url) {
            self.pending_loads -= 1;
            self.current = Some(track);
            self.set_state(PlayerState::Errored(e.to_string()));
            self.emit(PlayerEvent::Error {
                message: e.to_string(),
            });
            return Err(e);
        }

        self.has_session = true;
        self.emit(PlayerEvent::TrackChanged {
            track_id: track.id.clone(),
            previous_track_id: previous_id,
        });
        self.current = Some(track);
        self.set_state(PlayerState::Loading);
        Ok(())
    }

    // ===== Transport =====

    /// Start or resume playback
    ///
    /// No-op without a renderer session, while loading, or in the errored
    /// state (errored is recoverable only via a fresh load).
    pub fn play(&mut self) {
        if !self.has_session {
            return;
        }
        match self.state {
            PlayerState::Paused | PlayerState::Stopped => {
                self.renderer.play();
                self.set_state(PlayerState::Playing);
            }
            _ => {}
        }
    }

    /// Pause playback
    pub fn pause(&mut self) {
        if self.has_session && self.state == PlayerState::Playing {
            self.renderer.pause();
            self.set_state(PlayerState::Paused);
        }
    }

    /// Toggle between play and pause
    pub fn toggle(&mut self) {
        if self.state == PlayerState::Playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Stop playback, clearing the transport position
    ///
    /// The current track and queue position are retained.
    pub fn stop(&mut self) {
        if !self.has_session {
            return;
        }
        self.renderer.stop();
        self.position = Duration::ZERO;
        if self.state != PlayerState::Stopped {
            self.set_state(PlayerState::Stopped);
        }
    }

    /// Seek to a position in the current track
    ///
    /// The target is clamped to `[0, duration]`; play/pause state is
    /// unchanged.
    pub fn seek(&mut self, position: Duration) -> Result<()> {
        if !self.has_session {
            return Err(PlaybackError::NoTrackLoaded);
        }

        let clamped = position.min(self.duration);
        self.renderer.seek(clamped)?;
        self.position = clamped;
        self.emit_position();
        Ok(())
    }

    /// Seek forward by the configured skip interval
    pub fn skip_forward(&mut self) -> Result<()> {
        let target = self.position + Duration::from_secs(self.config.skip_seconds);
        self.seek(target)
    }

    /// Seek backward by the configured skip interval
    pub fn skip_backward(&mut self) -> Result<()> {
        let target = self
            .position
            .saturating_sub(Duration::from_secs(self.config.skip_seconds));
        self.seek(target)
    }

    // ===== Queue navigation =====

    /// Install a new playlist
    ///
    /// Resets the queue pointer and shuffle state; the currently loaded
    /// track keeps playing.
    pub fn set_playlist(&mut self, tracks: Vec<Track>) {
        self.queue.set_tracks(tracks);
        self.emit(PlayerEvent::QueueChanged {
            length: self.queue.len(),
        });
    }

    /// Skip to the next track according to the repeat mode
    ///
    /// - `One`: replays the current track from zero
    /// - `All`: advances, wrapping to index 0 at the end
    /// - `Off`: advances if a next track exists, otherwise stops (queue
    ///   pointer unchanged)
    pub fn next(&mut self) -> Result<()> {
        match self.repeat {
            RepeatMode::One => self.replay_current(),
            RepeatMode::All => {
                let track = self
                    .queue
                    .advance_wrapping()
                    .cloned()
                    .ok_or(PlaybackError::QueueEmpty)?;
                self.load_track(track)
            }
            RepeatMode::Off => {
                if let Some(track) = self.queue.advance().cloned() {
                    self.load_track(track)
                } else {
                    self.stop();
                    Ok(())
                }
            }
        }
    }

    /// Go to the previous track
    ///
    /// More than the restart threshold (default 3 s) into the current track
    /// restarts it; otherwise moves to the prior queue index if one exists;
    /// otherwise a no-op.
    pub fn previous(&mut self) -> Result<()> {
        if self.has_session && self.position > self.config.restart_threshold {
            return self.seek(Duration::ZERO);
        }

        if let Some(track) = self.queue.retreat().cloned() {
            self.load_track(track)
        } else {
            Ok(())
        }
    }

    fn replay_current(&mut self) -> Result<()> {
        if !self.has_session {
            return Err(PlaybackError::NoTrackLoaded);
        }
        self.seek(Duration::ZERO)?;
        self.renderer.play();
        if self.state != PlayerState::Playing {
            self.set_state(PlayerState::Playing);
        }
        Ok(())
    }

    // ===== Shuffle & repeat =====

    /// Toggle shuffle
    ///
    /// Enabling pins the current track to position 0 and permutes the rest;
    /// disabling restores the original order and relocates the pointer.
    pub fn toggle_shuffle(&mut self) {
        if self.queue.is_shuffled() {
            self.queue.unshuffle();
        } else {
            let mut rng = rand::thread_rng();
            self.queue.shuffle(&mut rng);
        }
        self.emit(PlayerEvent::ShuffleChanged {
            enabled: self.queue.is_shuffled(),
        });
        self.emit(PlayerEvent::QueueChanged {
            length: self.queue.len(),
        });
    }

    /// Cycle the repeat mode: Off -> All -> One -> Off
    pub fn toggle_repeat(&mut self) {
        self.set_repeat(self.repeat.cycle());
    }

    /// Set the repeat mode directly
    pub fn set_repeat(&mut self, mode: RepeatMode) {
        self.repeat = mode;
        self.emit(PlayerEvent::RepeatChanged { mode });
    }

    // ===== Volume =====

    /// Set the volume, clamped to `[0.0, 1.0]`
    pub fn set_volume(&mut self, level: f32) {
        self.volume.set_level(level);
        self.renderer.set_volume(self.volume.gain());
        self.emit_volume();
    }

    /// Toggle mute, preserving the volume level
    pub fn toggle_mute(&mut self) {
        self.volume.toggle_mute();
        self.renderer.set_volume(self.volume.gain());
        self.emit_volume();
    }

    // ===== Renderer callbacks =====

    /// Apply an asynchronous renderer callback
    ///
    /// `Ready`/`Failed` outcomes of superseded loads (a newer load was
    /// dispatched before the outcome arrived) are discarded: only the latest
    /// request's result is applied.
    pub fn handle_renderer_event(&mut self, event: RendererEvent) {
        match event {
            RendererEvent::Ready { duration } => {
                if self.consume_stale_load() {
                    return;
                }
                if !duration.is_zero() {
                    self.duration = duration;
                }
                self.renderer.play();
                self.set_state(PlayerState::Playing);
            }
            RendererEvent::Failed { reason } => {
                if self.consume_stale_load() {
                    return;
                }
                warn!(reason = %reason, "renderer failure");
                self.set_state(PlayerState::Errored(reason.clone()));
                self.emit(PlayerEvent::Error { message: reason });
            }
            RendererEvent::TimeUpdate { position } => {
                self.position = position;
                self.emit_position();
            }
            RendererEvent::Finished => {
                debug!("track finished, auto-advancing");
                // Same advancement rules as a manual skip; failures degrade
                // to state, never propagate out of the callback.
                let _ = self.next();
            }
            RendererEvent::Interrupted => self.pause(),
            RendererEvent::Resumed => self.play(),
        }
    }

    /// Settle one pending load acknowledgment
    ///
    /// Returns true when the acknowledged load has been superseded by a
    /// newer one and its outcome must be dropped.
    fn consume_stale_load(&mut self) -> bool {
        if self.pending_loads > 0 {
            self.pending_loads -= 1;
        }
        if self.pending_loads > 0 {
            debug!("discarding stale renderer outcome");
            return true;
        }
        false
    }

    // ===== State queries =====

    /// Current transport state
    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    /// Currently loaded track
    pub fn current_track(&self) -> Option<&Track> {
        self.current.as_ref()
    }

    /// Last reported playback position
    pub fn position(&self) -> Duration {
        self.position
    }

    /// Duration of the current track (zero for live streams)
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Playback progress in `[0.0, 1.0]` (0 when duration is unknown)
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 0.0;
        }
        (self.position.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Whether the transport is in the playing state
    pub fn is_playing(&self) -> bool {
        self.state == PlayerState::Playing
    }

    /// Current repeat mode
    pub fn repeat(&self) -> RepeatMode {
        self.repeat
    }

    /// Whether the queue is shuffled
    pub fn is_shuffled(&self) -> bool {
        self.queue.is_shuffled()
    }

    /// Queue contents in play order
    pub fn playlist(&self) -> &[Track] {
        self.queue.tracks()
    }

    /// Queue length
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Current queue index
    pub fn current_index(&self) -> usize {
        self.queue.current_index()
    }

    /// Whether a next queue track exists
    pub fn has_next(&self) -> bool {
        self.queue.has_next()
    }

    /// Whether a prior queue track exists
    pub fn has_previous(&self) -> bool {
        self.queue.has_previous()
    }

    /// Current volume level (0.0-1.0)
    pub fn volume(&self) -> f32 {
        self.volume.level()
    }

    /// Whether audio is muted
    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    /// Drain accumulated events for the UI
    pub fn take_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    // ===== Internal =====

    fn set_state(&mut self, state: PlayerState) {
        if self.state == state {
            return;
        }
        debug!(from = ?self.state, to = ?state, "transport state change");
        self.state = state.clone();
        self.emit(PlayerEvent::StateChanged { state });
    }

    fn emit(&mut self, event: PlayerEvent) {
        self.pending_events.push(event);
    }

    fn emit_position(&mut self) {
        self.emit(PlayerEvent::PositionUpdate {
            position_ms: self.position.as_millis() as u64,
            duration_ms: self.duration.as_millis() as u64,
        });
    }

    fn emit_volume(&mut self) {
        self.emit(PlayerEvent::VolumeChanged {
            level: self.volume.level(),
            muted: self.volume.is_muted(),
        });
    }
}
