//! # FocusTune Common Library
//!
//! Shared code for the FocusTune service:
//! - Event types (FocusEvent enum) and the EventBus
//! - Error types
//! - Configuration loading
//! - Session preset definitions

pub mod config;
pub mod error;
pub mod events;
pub mod presets;

pub use config::TimerConfig;
pub use error::{Error, Result};
pub use events::{AdvanceMode, EventBus, FocusEvent, SessionKind};
