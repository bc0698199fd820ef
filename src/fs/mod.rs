//! Filesystem module.
//!
//! Provides:
//! - Directory creation and clearing
//! - Filename sanitization

pub mod naming;
pub mod paths;

pub use naming::sanitize_component;
pub use paths::{clear_directory, ensure_dir};
