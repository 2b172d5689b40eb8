//! Playlist transport
//!
//! Owns the ordered track list, current index, playback position, and
//! advance mode. Driven by media sink callbacks (position, duration, ended,
//! error) and user intents; never touches the wall clock itself.

pub mod shuffle;
pub mod sink;
pub mod track;
pub mod transport;

pub use shuffle::{IndexPicker, RandomIndexPicker};
pub use sink::{MediaSink, NullSink};
pub use track::{Track, TrackSource};
pub use transport::{PlayerSnapshot, PlaylistTransport};
