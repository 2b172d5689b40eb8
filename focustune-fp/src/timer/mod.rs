//! Pomodoro timer engine
//!
//! The engine owns countdown state, session mode, and cycle counting. It is
//! driven by an injectable tick source and calls out through the notifier
//! capability on session completion.

pub mod engine;
pub mod notifier;
pub mod ticker;

pub use engine::{TimerEngine, TimerSnapshot};
pub use notifier::{DesktopNotifier, Notifier, NullNotifier};
pub use ticker::run_ticker;
