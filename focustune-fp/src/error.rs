//! Error types for focustune-fp
//!
//! Defines service-specific error types using thiserror for clear error
//! propagation.

use thiserror::Error;

/// Main error type for the focus player service
#[derive(Error, Debug)]
pub enum Error {
    /// Timer configuration with a non-positive duration or cycle count
    #[error("Invalid timer configuration: {0}")]
    InvalidConfig(String),

    /// Playlist load called with no media sources
    #[error("Empty selection: at least one media source is required")]
    EmptySelection,

    /// Track index outside the current playlist
    #[error("Index {index} out of range for playlist of {len} tracks")]
    IndexOutOfRange { index: usize, len: usize },

    /// Seek requested before the track duration is known
    #[error("No active duration: cannot seek before duration is known")]
    NoActiveDuration,

    /// Configuration file loading errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<focustune_common::Error> for Error {
    fn from(err: focustune_common::Error) -> Self {
        match err {
            focustune_common::Error::InvalidInput(msg) => Error::InvalidConfig(msg),
            focustune_common::Error::Config(msg) => Error::Config(msg),
            focustune_common::Error::Io(e) => Error::Io(e),
            focustune_common::Error::Internal(msg) => Error::Internal(msg),
        }
    }
}

/// Convenience Result type using focustune-fp Error
pub type Result<T> = std::result::Result<T, Error>;
