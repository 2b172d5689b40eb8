//! Track identity and media source handles

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A raw media source selected by the user (file picker output)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackSource {
    /// Name shown in the playlist
    pub display_name: String,
    /// Opaque locator the media sink understands (path, URL, object handle)
    pub locator: String,
}

/// A playlist entry with stable identity
///
/// Created when the user loads a selection; the underlying media source is
/// released when the playlist is replaced.
#[derive(Debug, Clone, Serialize)]
pub struct Track {
    pub id: Uuid,
    pub display_name: String,
    pub locator: String,
}

impl Track {
    pub fn from_source(source: TrackSource) -> Self {
        Self {
            id: Uuid::new_v4(),
            display_name: source.display_name,
            locator: source.locator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracks_get_distinct_ids() {
        let source = TrackSource {
            display_name: "rain.mp3".to_string(),
            locator: "/music/rain.mp3".to_string(),
        };
        let a = Track::from_source(source.clone());
        let b = Track::from_source(source);
        assert_ne!(a.id, b.id);
        assert_eq!(a.display_name, b.display_name);
    }
}
