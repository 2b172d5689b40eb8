//! Timer engine state machine
//!
//! States are {Focus, Break, LongBreak} x {running, paused}. The initial
//! state is Focus, paused, with the full configured focus duration on the
//! clock. There is no terminal state; completed sessions auto-advance into
//! the next one and keep running.
//!
//! Mode transitions happen only when the countdown reaches zero or on an
//! explicit `reset`/`configure`. All operations complete synchronously.

use std::sync::Arc;

use focustune_common::{EventBus, FocusEvent, SessionKind, TimerConfig};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::timer::notifier::{completion_message, Notifier};

/// Read-only view of the engine state for API responses
#[derive(Debug, Clone, Serialize)]
pub struct TimerSnapshot {
    pub mode: SessionKind,
    pub seconds_remaining: u32,
    pub running: bool,
    pub completed_focus_sessions: u32,
    pub cycles_since_long_break: u32,
    pub config: TimerConfig,
}

/// Pomodoro countdown engine
///
/// Owns its state exclusively; the presentation layer reads snapshots and
/// dispatches intents. Driven by `advance()` calls from a tick source.
pub struct TimerEngine {
    config: TimerConfig,
    mode: SessionKind,
    seconds_remaining: u32,
    running: bool,
    completed_focus_sessions: u32,
    cycles_since_long_break: u32,
    events: EventBus,
    notifier: Arc<dyn Notifier>,
}

impl TimerEngine {
    /// Create a new engine in the initial state (Focus, paused)
    pub fn new(
        config: TimerConfig,
        events: EventBus,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            seconds_remaining: config.focus_seconds,
            config,
            mode: SessionKind::Focus,
            running: false,
            completed_focus_sessions: 0,
            cycles_since_long_break: 0,
            events,
            notifier,
        })
    }

    /// Replace the timer configuration
    ///
    /// Fails with `InvalidConfig` if any duration or the cycle count is
    /// non-positive; state is untouched on failure. Ignored while the
    /// countdown is running (pause first). When applied, the remaining
    /// time resets to the current mode's new duration.
    pub fn configure(&mut self, config: TimerConfig) -> Result<()> {
        config.validate()?;

        if self.running {
            warn!("Timer configure ignored while running; pause first");
            return Ok(());
        }

        self.config = config;
        self.seconds_remaining = self.duration_for(self.mode);
        info!(
            "Timer configured: focus={}s break={}s long_break={}s cycles={}",
            config.focus_seconds,
            config.break_seconds,
            config.long_break_seconds,
            config.cycles_before_long_break
        );
        self.events.emit_lossy(FocusEvent::TimerConfigured {
            focus_seconds: config.focus_seconds,
            break_seconds: config.break_seconds,
            long_break_seconds: config.long_break_seconds,
            cycles_before_long_break: config.cycles_before_long_break,
            timestamp: chrono::Utc::now(),
        });
        Ok(())
    }

    /// Begin (or resume) the countdown. No-op if already running.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        info!("Timer started: {} with {}s remaining", self.mode, self.seconds_remaining);
        self.emit_progress();
    }

    /// Halt the countdown, retaining the remaining time. No-op if paused.
    pub fn pause(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        info!("Timer paused: {} with {}s remaining", self.mode, self.seconds_remaining);
        self.emit_progress();
    }

    /// Return to the initial Focus state
    ///
    /// Clears the cycle counter but keeps the lifetime count of completed
    /// focus sessions.
    pub fn reset(&mut self) {
        self.running = false;
        self.mode = SessionKind::Focus;
        self.seconds_remaining = self.config.focus_seconds;
        self.cycles_since_long_break = 0;
        info!("Timer reset");
        self.emit_progress();
    }

    /// Advance the countdown by the given number of elapsed whole seconds
    ///
    /// Called by the tick source roughly once per second while running.
    /// The tick source reports real elapsed time, so a single call may
    /// consume several seconds (e.g. after scheduler delay); leftover
    /// seconds carry across an auto-advanced session boundary.
    pub fn advance(&mut self, elapsed_seconds: u32) {
        if !self.running || elapsed_seconds == 0 {
            return;
        }

        let mut remaining = elapsed_seconds;
        while remaining > 0 {
            let step = remaining.min(self.seconds_remaining);
            self.seconds_remaining -= step;
            remaining -= step;

            if self.seconds_remaining == 0 {
                self.complete_session();
                // Validated durations are positive, so the new session
                // always has time on the clock
                debug_assert!(self.seconds_remaining > 0);
            }
        }

        self.emit_progress();
    }

    /// Current state snapshot
    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            mode: self.mode,
            seconds_remaining: self.seconds_remaining,
            running: self.running,
            completed_focus_sessions: self.completed_focus_sessions,
            cycles_since_long_break: self.cycles_since_long_break,
            config: self.config,
        }
    }

    /// Whether the countdown is currently running
    pub fn is_running(&self) -> bool {
        self.running
    }

    fn duration_for(&self, mode: SessionKind) -> u32 {
        match mode {
            SessionKind::Focus => self.config.focus_seconds,
            SessionKind::Break => self.config.break_seconds,
            SessionKind::LongBreak => self.config.long_break_seconds,
        }
    }

    /// Session countdown hit zero: record, notify, and auto-advance
    fn complete_session(&mut self) {
        let finished = self.mode;

        if finished == SessionKind::Focus {
            self.completed_focus_sessions += 1;
            self.cycles_since_long_break += 1;
        }

        self.events.emit_lossy(FocusEvent::SessionCompleted {
            kind: finished,
            completed_focus_sessions: self.completed_focus_sessions,
            timestamp: chrono::Utc::now(),
        });

        let next = match finished {
            SessionKind::Focus => {
                if self.cycles_since_long_break >= self.config.cycles_before_long_break {
                    self.cycles_since_long_break = 0;
                    SessionKind::LongBreak
                } else {
                    SessionKind::Break
                }
            }
            SessionKind::Break | SessionKind::LongBreak => SessionKind::Focus,
        };

        self.mode = next;
        self.seconds_remaining = self.duration_for(next);
        // Auto-advance policy: the next session starts immediately,
        // running stays true

        info!("Session complete: {} -> {}", finished, next);

        self.notifier.notify(
            "FocusTune",
            &completion_message(finished, self.seconds_remaining),
        );
        self.notifier.haptic();

        self.events.emit_lossy(FocusEvent::SessionStarted {
            kind: next,
            duration_seconds: self.seconds_remaining,
            timestamp: chrono::Utc::now(),
        });
    }

    fn emit_progress(&self) {
        self.events.emit_lossy(FocusEvent::TimerProgress {
            kind: self.mode,
            seconds_remaining: self.seconds_remaining,
            running: self.running,
            timestamp: chrono::Utc::now(),
        });
    }
}
