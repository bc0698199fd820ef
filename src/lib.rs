//! Unsplash Downloader - random wallpapers from Unsplash searches and collections.
//!
//! This library queues images from the Unsplash API and downloads them
//! concurrently.
//!
//! # Features
//!
//! - Search queries and curated collections
//! - Random page sampling to reach a desired image count
//! - JSON manifest of every queued image
//! - Bounded-concurrency streaming downloads
//! - Filename-based skipping of images already on disk
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use unsplash_downloader::{run_pipeline, validate_config, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(Path::new("config.toml"))?;
//!     validate_config(&config)?;
//!
//!     let summary = run_pipeline(&config).await?;
//!     println!("downloaded {} images", summary.downloaded);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod media;
pub mod output;
pub mod pipeline;
pub mod query;

// Re-exports for convenience
pub use api::UnsplashApi;
pub use config::{validate_config, Config, QuerySpec};
pub use download::{DownloadCoordinator, Outcome, RunSummary};
pub use error::{Error, Result};
pub use media::ImageRecord;
pub use pipeline::run_pipeline;
pub use query::{PageSource, QueryPlanner};
