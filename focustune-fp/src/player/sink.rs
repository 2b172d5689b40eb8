//! Playable-media collaborator
//!
//! The transport drives an abstract sink with the surface of a media
//! element: load a source, play, pause, jump to a position, release held
//! resources. Position, duration, ended, and error feedback travel the
//! other way through the transport's `on_*` callbacks.
//!
//! Sink commands are fire-and-forget; a sink that fails to play reports it
//! back through the error callback rather than a return value, matching
//! the event-driven media model.

use tracing::debug;

use crate::player::track::Track;

/// Abstract playable-media collaborator
pub trait MediaSink: Send {
    /// Load a track, replacing whatever was loaded before
    fn load(&mut self, track: &Track);

    /// Begin or resume playback of the loaded track
    fn play(&mut self);

    /// Pause playback, retaining position
    fn pause(&mut self);

    /// Jump to an absolute position in seconds
    fn set_position(&mut self, seconds: f64);

    /// Release the held media source (decode/streaming resources)
    fn release(&mut self);
}

/// Sink that discards all commands
///
/// Default for headless deployments; also the natural base for tests.
pub struct NullSink;

impl MediaSink for NullSink {
    fn load(&mut self, track: &Track) {
        debug!("NullSink: load {}", track.display_name);
    }

    fn play(&mut self) {}
    fn pause(&mut self) {}

    fn set_position(&mut self, seconds: f64) {
        debug!("NullSink: set_position {:.1}s", seconds);
    }

    fn release(&mut self) {}
}
