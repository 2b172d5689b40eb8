//! Shared application state

use std::sync::Arc;

use focustune_common::EventBus;
use tokio::sync::Mutex;

use crate::player::PlaylistTransport;
use crate::timer::TimerEngine;

/// State shared across API handlers and background tasks
///
/// Each engine owns its state exclusively behind a mutex; handlers take
/// the lock, perform the synchronous operation, and release it within a
/// single callback turn. The two engines never depend on each other.
#[derive(Clone)]
pub struct SharedState {
    pub timer: Arc<Mutex<TimerEngine>>,
    pub player: Arc<Mutex<PlaylistTransport>>,
    pub events: EventBus,
    pub port: u16,
}
