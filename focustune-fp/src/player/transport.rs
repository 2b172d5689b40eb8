//! Playlist transport state machine
//!
//! States are {Empty, Loaded} x {playing, paused}. `Empty` holds exactly
//! while the track list is empty; every operation except `load_tracks` is a
//! no-op or an error there. All operations complete synchronously within a
//! single callback turn; failure leaves the state unchanged.

use focustune_common::{AdvanceMode, EventBus, FocusEvent};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::player::shuffle::IndexPicker;
use crate::player::sink::MediaSink;
use crate::player::track::{Track, TrackSource};

/// Read-only playlist entry view for API responses
#[derive(Debug, Clone, Serialize)]
pub struct TrackInfo {
    pub id: Uuid,
    pub display_name: String,
}

/// Read-only view of the transport state
#[derive(Debug, Clone, Serialize)]
pub struct PlayerSnapshot {
    pub tracks: Vec<TrackInfo>,
    pub current_index: Option<usize>,
    pub position_seconds: f64,
    pub duration_seconds: f64,
    pub playing: bool,
    pub advance_mode: AdvanceMode,
}

/// Playlist transport
///
/// Exclusively owns the active media source; nothing else may mutate
/// playback position except through `seek`.
pub struct PlaylistTransport {
    tracks: Vec<Track>,
    current_index: Option<usize>,
    position_seconds: f64,
    duration_seconds: f64,
    playing: bool,
    advance_mode: AdvanceMode,
    sink: Box<dyn MediaSink>,
    picker: Box<dyn IndexPicker>,
    events: EventBus,
}

impl PlaylistTransport {
    pub fn new(
        sink: Box<dyn MediaSink>,
        picker: Box<dyn IndexPicker>,
        events: EventBus,
    ) -> Self {
        Self {
            tracks: Vec::new(),
            current_index: None,
            position_seconds: 0.0,
            duration_seconds: 0.0,
            playing: false,
            advance_mode: AdvanceMode::Normal,
            sink,
            picker,
            events,
        }
    }

    /// Replace the playlist with a new selection
    ///
    /// Prior media sources are released. Fails with `EmptySelection` when
    /// the input is empty, leaving any existing playlist untouched.
    pub fn load_tracks(&mut self, sources: Vec<TrackSource>) -> Result<()> {
        if sources.is_empty() {
            return Err(Error::EmptySelection);
        }

        self.sink.release();
        self.tracks = sources.into_iter().map(Track::from_source).collect();
        self.current_index = Some(0);
        self.position_seconds = 0.0;
        self.duration_seconds = 0.0;
        self.playing = false;

        info!("Playlist replaced: {} tracks", self.tracks.len());
        self.events.emit_lossy(FocusEvent::PlaylistReplaced {
            track_count: self.tracks.len(),
            timestamp: chrono::Utc::now(),
        });

        self.sink.load(&self.tracks[0]);
        self.emit_track_changed(0);
        Ok(())
    }

    /// Begin playback. No-op when the playlist is empty or already playing.
    pub fn play(&mut self) {
        if self.tracks.is_empty() || self.playing {
            return;
        }
        self.playing = true;
        self.sink.play();
        self.emit_playback_state();
    }

    /// Pause playback, retaining position. No-op when not playing.
    pub fn pause(&mut self) {
        if self.tracks.is_empty() || !self.playing {
            return;
        }
        self.playing = false;
        self.sink.pause();
        self.emit_playback_state();
    }

    /// Halt playback and rewind to the start of the current track
    pub fn stop(&mut self) {
        if self.tracks.is_empty() {
            return;
        }
        let was_playing = self.playing;
        self.playing = false;
        self.position_seconds = 0.0;
        self.sink.pause();
        self.sink.set_position(0.0);
        if was_playing {
            self.emit_playback_state();
        }
        self.emit_progress();
    }

    /// Jump to a specific track
    ///
    /// Fails with `IndexOutOfRange` for an invalid index. Playback
    /// continues on the new track if it was active.
    pub fn select_track(&mut self, index: usize) -> Result<()> {
        if index >= self.tracks.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.tracks.len(),
            });
        }
        self.jump_to(index);
        Ok(())
    }

    /// Advance to the following track (circular under Normal, random under
    /// Shuffle). No-op when the playlist is empty.
    pub fn next(&mut self) {
        let Some(current) = self.current_index else {
            return;
        };
        let n = self.tracks.len();
        let target = match self.advance_mode {
            AdvanceMode::Shuffle => self.picker.pick(n, current),
            // Repeat governs end-of-track handling only, not navigation
            AdvanceMode::Normal | AdvanceMode::Repeat => (current + 1) % n,
        };
        self.jump_to(target);
    }

    /// Retreat to the preceding track. No-op when the playlist is empty.
    pub fn previous(&mut self) {
        let Some(current) = self.current_index else {
            return;
        };
        let n = self.tracks.len();
        let target = match self.advance_mode {
            AdvanceMode::Shuffle => self.picker.pick(n, current),
            AdvanceMode::Normal | AdvanceMode::Repeat => (current + n - 1) % n,
        };
        self.jump_to(target);
    }

    /// Change the advance mode. Pure state change, no playback side effect.
    pub fn set_advance_mode(&mut self, mode: AdvanceMode) {
        if self.advance_mode == mode {
            return;
        }
        self.advance_mode = mode;
        self.events.emit_lossy(FocusEvent::AdvanceModeChanged {
            mode,
            timestamp: chrono::Utc::now(),
        });
    }

    /// Position callback from the media sink
    pub fn on_position_update(&mut self, seconds: f64) {
        if self.current_index.is_none() {
            return;
        }
        let mut position = seconds.max(0.0);
        if self.duration_seconds > 0.0 {
            position = position.min(self.duration_seconds);
        }
        self.position_seconds = position;
        self.emit_progress();
    }

    /// Duration callback from the media sink
    pub fn on_duration_known(&mut self, seconds: f64) {
        if self.current_index.is_none() {
            return;
        }
        self.duration_seconds = seconds.max(0.0);
        if self.position_seconds > self.duration_seconds && self.duration_seconds > 0.0 {
            self.position_seconds = self.duration_seconds;
        }
    }

    /// End-of-track callback from the media sink
    ///
    /// Repeat restarts the same track; Shuffle picks a different one;
    /// Normal advances without wrapping and stops at the playlist end.
    pub fn on_track_ended(&mut self) {
        let Some(current) = self.current_index else {
            return;
        };

        match self.advance_mode {
            AdvanceMode::Repeat => {
                self.position_seconds = 0.0;
                self.playing = true;
                self.sink.set_position(0.0);
                self.sink.play();
                self.emit_progress();
            }
            AdvanceMode::Shuffle => {
                let target = self.picker.pick(self.tracks.len(), current);
                self.playing = true;
                self.jump_to(target);
            }
            AdvanceMode::Normal => {
                if current + 1 < self.tracks.len() {
                    self.playing = true;
                    self.jump_to(current + 1);
                } else {
                    self.playing = false;
                    self.position_seconds = self.duration_seconds;
                    info!("Playlist finished");
                    self.emit_playback_state();
                    self.emit_progress();
                }
            }
        }
    }

    /// Jump to a fraction of the known duration
    ///
    /// Fails with `NoActiveDuration` before the sink has reported one.
    pub fn seek(&mut self, fraction: f64) -> Result<()> {
        if self.duration_seconds == 0.0 {
            return Err(Error::NoActiveDuration);
        }
        let fraction = fraction.clamp(0.0, 1.0);
        self.position_seconds = fraction * self.duration_seconds;
        self.sink.set_position(self.position_seconds);
        self.emit_progress();
        Ok(())
    }

    /// Error callback from the media sink (unsupported format, decode
    /// failure). Non-fatal: the transport stays loaded and paused.
    pub fn on_sink_error(&mut self, message: String) {
        warn!("Media sink error: {}", message);
        self.playing = false;
        self.events.emit_lossy(FocusEvent::PlaybackError {
            track_id: self.current_track().map(|t| t.id),
            message,
            timestamp: chrono::Utc::now(),
        });
    }

    /// Current state snapshot
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            tracks: self
                .tracks
                .iter()
                .map(|t| TrackInfo {
                    id: t.id,
                    display_name: t.display_name.clone(),
                })
                .collect(),
            current_index: self.current_index,
            position_seconds: self.position_seconds,
            duration_seconds: self.duration_seconds,
            playing: self.playing,
            advance_mode: self.advance_mode,
        }
    }

    fn current_track(&self) -> Option<&Track> {
        self.current_index.and_then(|i| self.tracks.get(i))
    }

    /// Switch to a known-valid index, resetting position and duration
    fn jump_to(&mut self, index: usize) {
        self.current_index = Some(index);
        self.position_seconds = 0.0;
        self.duration_seconds = 0.0;
        self.sink.load(&self.tracks[index]);
        if self.playing {
            // Resumes once the new source has loaded
            self.sink.play();
        }
        self.emit_track_changed(index);
    }

    fn emit_track_changed(&self, index: usize) {
        let track = &self.tracks[index];
        self.events.emit_lossy(FocusEvent::TrackChanged {
            track_id: track.id,
            display_name: track.display_name.clone(),
            index,
            timestamp: chrono::Utc::now(),
        });
    }

    fn emit_playback_state(&self) {
        self.events.emit_lossy(FocusEvent::PlaybackStateChanged {
            playing: self.playing,
            timestamp: chrono::Utc::now(),
        });
    }

    fn emit_progress(&self) {
        if let Some(track) = self.current_track() {
            self.events.emit_lossy(FocusEvent::PlaybackProgress {
                track_id: track.id,
                position_seconds: self.position_seconds,
                duration_seconds: self.duration_seconds,
                playing: self.playing,
                timestamp: chrono::Utc::now(),
            });
        }
    }
}
