//! Conversion of API photos into image records.

use crate::api::types::Photo;
use crate::media::record::ImageRecord;

/// Map one API photo onto an [`ImageRecord`], picking the raw rendition.
pub fn parse_photo(photo: Photo) -> ImageRecord {
    ImageRecord {
        id: photo.id,
        width: photo.width,
        height: photo.height,
        dominant_color: photo.color.unwrap_or_default(),
        author_username: photo.user.username,
        source_url: photo.urls.raw,
        referrer_url: photo.links.html,
    }
}

/// Map a page of photos, keeping API order.
pub fn parse_photos(photos: Vec<Photo>) -> Vec<ImageRecord> {
    photos.into_iter().map(parse_photo).collect()
}
