//! Media module for image records and API result parsing.

pub mod parser;
pub mod record;

pub use parser::{parse_photo, parse_photos};
pub use record::ImageRecord;
