//! Tick source driving the timer engine
//!
//! A single logical timer fires at 1 Hz. The engine itself is tick-driven
//! and deterministic; this module is the only place that touches the wall
//! clock. Elapsed time is measured with `Instant` so that scheduler delay
//! (or a suspended machine) decrements by the actual elapsed whole seconds
//! instead of assuming exactly one second per callback.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{interval, Instant, MissedTickBehavior};
use tracing::debug;

use crate::timer::engine::TimerEngine;

/// Run the 1 Hz tick loop until the task is aborted
///
/// The engine ignores ticks while paused, so the loop runs unconditionally;
/// there is no start/stop coordination with the engine beyond its own
/// `running` flag.
pub async fn run_ticker(engine: Arc<Mutex<TimerEngine>>) {
    let mut ticker = interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    // First tick completes immediately; consume it so `last` is accurate
    ticker.tick().await;
    let mut last = Instant::now();

    loop {
        ticker.tick().await;

        let now = Instant::now();
        let elapsed = now.duration_since(last).as_secs() as u32;
        if elapsed == 0 {
            continue;
        }
        // Keep sub-second remainder for the next round
        last += Duration::from_secs(u64::from(elapsed));

        if elapsed > 1 {
            debug!("Tick source drift: {} seconds elapsed since last tick", elapsed);
        }

        engine.lock().await.advance(elapsed);
    }
}
