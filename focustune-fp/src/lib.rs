//! # FocusTune Focus Player (focustune-fp)
//!
//! Pomodoro timer engine and playlist transport with an HTTP/SSE control
//! interface.
//!
//! **Purpose:** Own the two interactive state machines - the focus/break
//! countdown and the playlist transport - and expose them to presentation
//! clients over REST + SSE.
//!
//! **Architecture:** Single service; each engine lives behind an
//! `Arc<Mutex<_>>` and advances only in response to tick callbacks, media
//! sink callbacks, or user intents.

pub mod api;
pub mod error;
pub mod player;
pub mod state;
pub mod timer;

pub use error::{Error, Result};
pub use state::SharedState;
