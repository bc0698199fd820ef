//! Configuration module for the unsplash-downloader.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Query definitions
//! - Configuration validation

pub mod loader;
pub mod query;
pub mod validation;

pub use loader::{Config, DownloaderConfig, DEFAULT_API_BASE, DEFAULT_WORKERS, MAX_PAGE_SIZE};
pub use query::QuerySpec;
pub use validation::validate_config;
