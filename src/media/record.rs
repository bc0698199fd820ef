//! Image record representation.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::fs::naming::sanitize_component;

/// A downloadable Unsplash image.
///
/// Built once from an API result and never mutated. Serialized field names
/// match the manifest format (`color`, `username`, `url`, `website`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRecord {
    /// Unsplash photo ID.
    pub id: String,

    /// Width in pixels.
    pub width: u32,

    /// Height in pixels.
    pub height: u32,

    /// Dominant color as a hex string, e.g. `#262626`.
    #[serde(rename = "color")]
    pub dominant_color: String,

    /// Photographer's username.
    #[serde(rename = "username")]
    pub author_username: String,

    /// Direct download URL (raw rendition).
    #[serde(rename = "url")]
    pub source_url: String,

    /// Photo page on unsplash.com, used for attribution.
    #[serde(rename = "website")]
    pub referrer_url: String,
}

impl ImageRecord {
    /// Generate the filename for this image.
    ///
    /// Format: `{id}_{username}_{width}x{height}.jpg`. Also serves as the
    /// dedup key within and across runs.
    pub fn filename(&self) -> String {
        format!(
            "{}_{}_{}x{}.jpg",
            sanitize_component(&self.id),
            sanitize_component(&self.author_username),
            self.width,
            self.height
        )
    }

    /// Whether both dimensions are usable.
    pub fn is_valid(&self) -> bool {
        self.width > 1 && self.height > 1
    }

    /// Fail with [`Error::InvalidRecord`] if the dimensions are unusable.
    pub fn validate(&self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(Error::InvalidRecord(format!(
                "'{}' has invalid size {}x{}",
                self.id, self.width, self.height
            )))
        }
    }
}
