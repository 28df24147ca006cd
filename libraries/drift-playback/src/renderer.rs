//! Platform-agnostic audio renderer boundary
//!
//! The controller never touches audio I/O directly. The host platform
//! implements [`AudioRenderer`] (AVPlayer, GStreamer, a web audio element,
//! ...) and delivers the renderer's asynchronous callbacks back into the
//! controller as [`RendererEvent`]s on the controller's thread.

use crate::error::Result;
use std::time::Duration;

/// External audio output engine
///
/// Commands are fire-and-forget from the controller's perspective: the
/// audible effect is asynchronous, and outcomes arrive as [`RendererEvent`]s.
pub trait AudioRenderer: Send {
    /// Begin loading a stream
    ///
    /// A later [`RendererEvent::Ready`] or [`RendererEvent::Failed`] reports
    /// the outcome. Loading a new stream supersedes any load in flight.
    fn load(&mut self, stream_url: &str) -> Result<()>;

    /// Start or resume audio output
    fn play(&mut self);

    /// Pause audio output
    fn pause(&mut self);

    /// Stop output and discard the renderer's position
    fn stop(&mut self);

    /// Seek to a position in the loaded stream
    fn seek(&mut self, position: Duration) -> Result<()>;

    /// Set output gain (0.0-1.0)
    fn set_volume(&mut self, gain: f32);
}

/// Asynchronous callbacks from the renderer
///
/// The host forwards these into [`crate::PlayerController::handle_renderer_event`].
#[derive(Debug, Clone, PartialEq)]
pub enum RendererEvent {
    /// The loaded stream is ready to play
    Ready {
        /// Stream duration (zero for live streams)
        duration: Duration,
    },

    /// The load or playback failed
    Failed {
        /// Human-readable failure reason
        reason: String,
    },

    /// Periodic playback position report
    TimeUpdate {
        /// Position from the start of the stream
        position: Duration,
    },

    /// Playback reached the end of the stream
    Finished,

    /// A competing audio session interrupted playback
    Interrupted,

    /// The interruption ended and playback may resume
    Resumed,
}
