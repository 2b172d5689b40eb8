//! Notifier capability for session-completion side effects
//!
//! Notifications and haptic feedback are optional external capabilities.
//! They are modeled as a trait the engine calls through, with a no-op
//! implementation for environments lacking the capability. Failures are
//! silent and non-fatal: permission may be denied at any time and the
//! countdown must not care.

use focustune_common::SessionKind;
use tracing::{debug, warn};

/// External notification capability
///
/// Implementations must not block for long and must not fail loudly;
/// a refused permission degrades to a log line.
pub trait Notifier: Send + Sync {
    /// Request a user-visible notification
    fn notify(&self, summary: &str, body: &str);

    /// Request haptic feedback where the platform supports it
    fn haptic(&self);
}

/// Desktop notifier backed by the platform notification daemon
///
/// `notify_rust` talks to the daemon over synchronous D-Bus I/O, so the
/// call is dispatched to the blocking pool. The engine invokes `notify`
/// under its state lock and must return immediately.
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn notify(&self, summary: &str, body: &str) {
        let summary = summary.to_string();
        let body = body.to_string();
        tokio::task::spawn_blocking(move || {
            let result = notify_rust::Notification::new()
                .summary(&summary)
                .body(&body)
                .show();
            if let Err(e) = result {
                warn!("Failed to send notification: {}", e);
            }
        });
    }

    fn haptic(&self) {
        // Desktops have no vibration motor; the request degrades silently
        debug!("Haptic feedback requested (unsupported on this platform)");
    }
}

/// No-op notifier for tests and headless environments
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _summary: &str, _body: &str) {}
    fn haptic(&self) {}
}

/// Compose the completion message for a finished session
pub fn completion_message(finished: SessionKind, next_duration_seconds: u32) -> String {
    let minutes = next_duration_seconds / 60;
    match finished {
        SessionKind::Focus => {
            format!("Focus session complete! Time for a {}-minute break.", minutes)
        }
        SessionKind::Break | SessionKind::LongBreak => {
            format!("Break is over! Starting {}-minute focus session.", minutes)
        }
    }
}
