//! Download module for queued images.
//!
//! This module provides:
//! - The download coordinator (queue, manifest, worker pool)
//! - Single image downloading
//! - Run manifest writing
//! - Run statistics

pub mod coordinator;
pub mod image;
pub mod manifest;
pub mod state;

pub use coordinator::DownloadCoordinator;
pub use image::{download_record, Outcome};
pub use manifest::{manifest_filename, write_manifest};
pub use state::RunSummary;
