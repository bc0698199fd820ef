//! API response type definitions.

use serde::Deserialize;

/// Response of `GET search/photos`.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    /// Total number of matching photos.
    pub total: u64,
    #[serde(default)]
    pub results: Vec<Photo>,
}

/// Response of `GET collections/{id}`.
#[derive(Debug, Deserialize)]
pub struct CollectionInfo {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    pub total_photos: u64,
}

/// A photo as returned by search and collection listings.
#[derive(Debug, Clone, Deserialize)]
pub struct Photo {
    pub id: String,
    pub width: u32,
    pub height: u32,
    /// Dominant color; null for some photos.
    #[serde(default)]
    pub color: Option<String>,
    pub user: PhotoUser,
    pub urls: PhotoUrls,
    pub links: PhotoLinks,
}

/// Photographer details.
#[derive(Debug, Clone, Deserialize)]
pub struct PhotoUser {
    pub username: String,
}

/// Rendition URLs.
#[derive(Debug, Clone, Deserialize)]
pub struct PhotoUrls {
    pub raw: String,
}

/// Related links.
#[derive(Debug, Clone, Deserialize)]
pub struct PhotoLinks {
    pub html: String,
}
