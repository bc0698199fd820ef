//! Configuration structures and loading logic.

use crate::config::query::QuerySpec;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Unsplash API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.unsplash.com/";

/// Number of concurrent download workers.
pub const DEFAULT_WORKERS: usize = 8;

/// Largest page size the Unsplash API accepts.
pub const MAX_PAGE_SIZE: u32 = 30;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub downloader: DownloaderConfig,

    /// Queries to run, in order.
    #[serde(default)]
    pub querys: Vec<QuerySpec>,
}

/// Downloader and API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloaderConfig {
    /// Unsplash application access key (sent as `Client-ID`).
    pub unsplash_app_access_key: String,

    /// Search result ordering (`relevant` or `latest`).
    #[serde(default = "default_order_by")]
    pub order_by: String,

    /// Search content safety filter (`low` or `high`).
    #[serde(default = "default_content_filter")]
    pub content_filter: String,

    /// Photo orientation filter (`landscape`, `portrait`, `squarish`).
    #[serde(default = "default_orientation")]
    pub orientation: String,

    /// Page size used for every paginated request.
    #[serde(default = "default_max_per_page")]
    pub max_per_page: u32,

    /// Directory images are downloaded into.
    pub wallpaper_directory: PathBuf,

    /// Directory run manifests are written to.
    pub log_directory: PathBuf,

    /// Number of concurrent downloads.
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Per-request timeout in seconds. No timeout when unset.
    #[serde(default)]
    pub request_timeout_seconds: Option<u64>,

    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Whether to empty the wallpaper directory before downloading.
    #[serde(default = "default_true")]
    pub clear_destination: bool,

    /// Whether to show a progress bar while downloading.
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

fn default_order_by() -> String {
    "relevant".to_string()
}

fn default_content_filter() -> String {
    "low".to_string()
}

fn default_orientation() -> String {
    "landscape".to_string()
}

fn default_max_per_page() -> u32 {
    MAX_PAGE_SIZE
}

fn default_workers() -> usize {
    DEFAULT_WORKERS
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}. Create one from config.example.toml",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

impl DownloaderConfig {
    /// Per-request timeout, if configured.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds.map(Duration::from_secs)
    }
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        Self {
            unsplash_app_access_key: String::new(),
            order_by: default_order_by(),
            content_filter: default_content_filter(),
            orientation: default_orientation(),
            max_per_page: default_max_per_page(),
            wallpaper_directory: PathBuf::from("wallpapers"),
            log_directory: PathBuf::from("logs"),
            workers: default_workers(),
            request_timeout_seconds: None,
            api_base_url: default_api_base_url(),
            clear_destination: true,
            show_progress: true,
        }
    }
}
