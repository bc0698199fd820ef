//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Unsplash wallpaper downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "unsplash-downloader",
    version,
    about = "Download random wallpapers from Unsplash",
    long_about = "Queues random pages of Unsplash search results and collections, \
                  logs the queue to a manifest and downloads the images concurrently."
)]
pub struct Args {
    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Number of concurrent downloads.
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Keep existing wallpapers instead of clearing the directory first.
    #[arg(long)]
    pub no_clear: bool,

    /// Hide the download progress bar.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(workers) = self.workers {
            config.downloader.workers = workers;
        }

        // Boolean flags (only override if set to non-default)
        if self.no_clear {
            config.downloader.clear_destination = false;
        }

        if self.quiet {
            config.downloader.show_progress = false;
        }
    }
}
