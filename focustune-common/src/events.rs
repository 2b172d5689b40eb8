//! Event types for the FocusTune event system
//!
//! Provides the shared event definitions and the EventBus used by the
//! timer engine, the playlist transport, and the SSE layer.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

/// The three timer session kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionKind {
    Focus,
    Break,
    LongBreak,
}

impl std::fmt::Display for SessionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionKind::Focus => write!(f, "focus"),
            SessionKind::Break => write!(f, "break"),
            SessionKind::LongBreak => write!(f, "long_break"),
        }
    }
}

/// Playlist behavior governing track order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvanceMode {
    /// Sequential order; `next`/`previous` wrap circularly
    Normal,
    /// Restart the same track when it ends
    Repeat,
    /// Random track different from the current one
    Shuffle,
}

/// FocusTune event types
///
/// Events are broadcast via the EventBus and serialized for SSE
/// transmission. All events carry a UTC timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FocusEvent {
    /// A timer session began (either by user start or auto-advance)
    ///
    /// Triggers:
    /// - SSE: Update session display
    SessionStarted {
        /// Kind of the session that started
        kind: SessionKind,
        /// Configured duration of the session in seconds
        duration_seconds: u32,
        /// When the session started
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// A timer session ran to completion
    ///
    /// Emitted before the transition to the next session.
    ///
    /// Triggers:
    /// - SSE: Flash completion state
    /// - Notifier: Desktop notification and haptic request
    SessionCompleted {
        /// Kind of the session that completed
        kind: SessionKind,
        /// Total focus sessions completed so far
        completed_focus_sessions: u32,
        /// When the session completed
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// Countdown progress update (sent once per tick while running)
    ///
    /// NOTE: Emitted lossy - it is fine if no client is listening.
    TimerProgress {
        /// Current session kind
        kind: SessionKind,
        /// Seconds remaining in the current session
        seconds_remaining: u32,
        /// Whether the countdown is running
        running: bool,
        /// When progress was captured
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// Timer reconfigured with new durations
    TimerConfigured {
        focus_seconds: u32,
        break_seconds: u32,
        long_break_seconds: u32,
        cycles_before_long_break: u32,
        /// When configuration was applied
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// Playback toggled between playing and paused/stopped
    ///
    /// Triggers:
    /// - SSE: Update transport controls
    PlaybackStateChanged {
        /// Whether the transport is now playing
        playing: bool,
        /// When state changed
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// Current track changed (selection, next/previous, or auto-advance)
    TrackChanged {
        /// Track UUID now current
        track_id: Uuid,
        /// Display name of the track
        display_name: String,
        /// Index of the track in the playlist
        index: usize,
        /// When the track changed
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// Playback position update
    ///
    /// NOTE: Emitted lossy on every position callback.
    PlaybackProgress {
        /// Track UUID currently loaded
        track_id: Uuid,
        /// Current position in seconds
        position_seconds: f64,
        /// Known duration in seconds (0.0 until reported by the sink)
        duration_seconds: f64,
        /// Whether currently playing
        playing: bool,
        /// Progress update timestamp
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// Playlist replaced with a new selection
    ///
    /// Triggers:
    /// - SSE: Rebuild playlist display
    PlaylistReplaced {
        /// Number of tracks in the new playlist
        track_count: usize,
        /// When the playlist was replaced
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// Advance mode changed (normal / repeat / shuffle)
    AdvanceModeChanged {
        /// New advance mode
        mode: AdvanceMode,
        /// When the mode changed
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// The media sink failed to play the current track
    ///
    /// Non-fatal: the transport stays loaded and paused.
    PlaybackError {
        /// Track UUID that failed (if a track was loaded)
        track_id: Option<Uuid>,
        /// Error message details
        message: String,
        /// When the error occurred
        timestamp: chrono::DateTime<chrono::Utc>,
    },
}

impl FocusEvent {
    /// Get event type as string for filtering
    pub fn event_type(&self) -> &str {
        match self {
            FocusEvent::SessionStarted { .. } => "SessionStarted",
            FocusEvent::SessionCompleted { .. } => "SessionCompleted",
            FocusEvent::TimerProgress { .. } => "TimerProgress",
            FocusEvent::TimerConfigured { .. } => "TimerConfigured",
            FocusEvent::PlaybackStateChanged { .. } => "PlaybackStateChanged",
            FocusEvent::TrackChanged { .. } => "TrackChanged",
            FocusEvent::PlaybackProgress { .. } => "PlaybackProgress",
            FocusEvent::PlaylistReplaced { .. } => "PlaylistReplaced",
            FocusEvent::AdvanceModeChanged { .. } => "AdvanceModeChanged",
            FocusEvent::PlaybackError { .. } => "PlaybackError",
        }
    }
}

// ========================================
// EventBus Implementation
// ========================================

/// Central event distribution bus for application-wide events
///
/// Uses tokio::broadcast internally, providing:
/// - Non-blocking publish (slow subscribers don't block producers)
/// - Multiple concurrent subscribers
/// - Automatic cleanup when subscribers drop
///
/// # Capacity Recommendations
///
/// - Desktop: 1000
/// - Testing: 10-100
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<FocusEvent>,
    capacity: usize,
}

impl EventBus {
    /// Creates a new EventBus with the given channel capacity
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx, capacity }
    }

    /// Subscribe to all future events
    ///
    /// Events emitted before subscription are not received.
    pub fn subscribe(&self) -> broadcast::Receiver<FocusEvent> {
        self.tx.subscribe()
    }

    /// Emit an event to all subscribers
    ///
    /// Returns `Ok(subscriber_count)` if at least one subscriber exists,
    /// `Err` if no subscribers are listening.
    #[allow(clippy::result_large_err)]
    pub fn emit(
        &self,
        event: FocusEvent,
    ) -> std::result::Result<usize, broadcast::error::SendError<FocusEvent>> {
        self.tx.send(event)
    }

    /// Emit an event, ignoring if no subscribers are listening
    ///
    /// Used for progress updates where it is acceptable if no component
    /// is currently listening.
    pub fn emit_lossy(&self, event: FocusEvent) {
        let _ = self.tx.send(event);
    }

    /// Current number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Configured channel capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_eventbus_new() {
        let bus = EventBus::new(100);
        assert_eq!(bus.capacity(), 100);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_eventbus_subscribe() {
        let bus = EventBus::new(10);
        let _rx = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 1);

        let _rx2 = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 2);
    }

    #[test]
    fn test_eventbus_emit_no_subscribers() {
        let bus = EventBus::new(10);
        let event = FocusEvent::PlaybackStateChanged {
            playing: true,
            timestamp: chrono::Utc::now(),
        };

        // Should return error when no subscribers
        assert!(bus.emit(event).is_err());
    }

    #[test]
    fn test_eventbus_emit_with_subscriber() {
        let bus = Arc::new(EventBus::new(10));
        let mut rx = bus.subscribe();

        let event = FocusEvent::SessionStarted {
            kind: SessionKind::Focus,
            duration_seconds: 1500,
            timestamp: chrono::Utc::now(),
        };

        bus.emit(event).expect("emit should succeed");

        let received = rx.try_recv().expect("should receive event");
        assert_eq!(received.event_type(), "SessionStarted");
    }

    #[test]
    fn test_eventbus_emit_lossy() {
        let bus = Arc::new(EventBus::new(2)); // Small capacity
        let mut _rx = bus.subscribe(); // Subscribe but don't receive

        // Fill the channel past capacity; should not panic
        for i in 0..10 {
            bus.emit_lossy(FocusEvent::TimerProgress {
                kind: SessionKind::Focus,
                seconds_remaining: 1500 - i,
                running: true,
                timestamp: chrono::Utc::now(),
            });
        }

        assert_eq!(bus.capacity(), 2);
    }

    #[test]
    fn test_eventbus_multiple_subscribers() {
        let bus = Arc::new(EventBus::new(10));
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        assert_eq!(bus.subscriber_count(), 2);

        let event = FocusEvent::PlaylistReplaced {
            track_count: 3,
            timestamp: chrono::Utc::now(),
        };

        bus.emit(event).expect("emit should succeed");

        assert_eq!(rx1.try_recv().unwrap().event_type(), "PlaylistReplaced");
        assert_eq!(rx2.try_recv().unwrap().event_type(), "PlaylistReplaced");
    }

    #[test]
    fn test_event_serialization_tag() {
        let event = FocusEvent::SessionCompleted {
            kind: SessionKind::LongBreak,
            completed_focus_sessions: 4,
            timestamp: chrono::Utc::now(),
        };

        let json = serde_json::to_string(&event).expect("serialization should succeed");
        assert!(json.contains("\"type\":\"SessionCompleted\""));
        assert!(json.contains("\"kind\":\"LongBreak\""));

        let deserialized: FocusEvent =
            serde_json::from_str(&json).expect("deserialization should succeed");
        match deserialized {
            FocusEvent::SessionCompleted {
                kind,
                completed_focus_sessions,
                ..
            } => {
                assert_eq!(kind, SessionKind::LongBreak);
                assert_eq!(completed_focus_sessions, 4);
            }
            _ => panic!("Wrong event type deserialized"),
        }
    }

    #[test]
    fn test_advance_mode_serialization() {
        assert_eq!(
            serde_json::to_string(&AdvanceMode::Shuffle).unwrap(),
            "\"shuffle\""
        );
        let mode: AdvanceMode = serde_json::from_str("\"repeat\"").unwrap();
        assert_eq!(mode, AdvanceMode::Repeat);
    }

    #[test]
    fn test_event_type_method() {
        let events = vec![
            (
                FocusEvent::TimerProgress {
                    kind: SessionKind::Break,
                    seconds_remaining: 300,
                    running: true,
                    timestamp: chrono::Utc::now(),
                },
                "TimerProgress",
            ),
            (
                FocusEvent::TrackChanged {
                    track_id: Uuid::new_v4(),
                    display_name: "lofi.mp3".to_string(),
                    index: 0,
                    timestamp: chrono::Utc::now(),
                },
                "TrackChanged",
            ),
            (
                FocusEvent::PlaybackError {
                    track_id: None,
                    message: "decode failed".to_string(),
                    timestamp: chrono::Utc::now(),
                },
                "PlaybackError",
            ),
        ];

        for (event, expected_type) in events {
            assert_eq!(event.event_type(), expected_type);
        }
    }
}
