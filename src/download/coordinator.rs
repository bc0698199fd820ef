//! Queue ownership and concurrent downloading.

use std::collections::HashSet;
use std::path::PathBuf;

use chrono::Local;
use futures::stream::{self, StreamExt};

use crate::api::UnsplashApi;
use crate::config::DownloaderConfig;
use crate::download::image::{download_record, Outcome};
use crate::download::manifest::write_manifest;
use crate::download::state::RunSummary;
use crate::error::Result;
use crate::fs::clear_directory;
use crate::media::ImageRecord;
use crate::output::create_item_bar;

/// Owns the download queue and runs it through a bounded worker pool.
pub struct DownloadCoordinator {
    api: UnsplashApi,
    destination: PathBuf,
    log_directory: PathBuf,
    workers: usize,
    show_progress: bool,
    queue: Vec<ImageRecord>,
}

impl DownloadCoordinator {
    pub fn new(api: UnsplashApi, config: &DownloaderConfig) -> Self {
        Self {
            api,
            destination: config.wallpaper_directory.clone(),
            log_directory: config.log_directory.clone(),
            workers: config.workers.max(1),
            show_progress: config.show_progress,
            queue: Vec::new(),
        }
    }

    /// Append records to the end of the queue.
    pub fn enqueue(&mut self, records: impl IntoIterator<Item = ImageRecord>) {
        self.queue.extend(records);
    }

    /// Records queued so far, in insertion order.
    pub fn queue(&self) -> &[ImageRecord] {
        &self.queue
    }

    /// Delete every file in the destination directory.
    pub async fn clear_destination(&self) -> Result<usize> {
        tracing::info!("clearing download directory {}", self.destination.display());
        let removed = clear_directory(&self.destination).await?;
        tracing::debug!("Removed {} files", removed);
        Ok(removed)
    }

    /// Write the full queue to a timestamped manifest in the log directory.
    pub async fn write_manifest(&self) -> Result<PathBuf> {
        write_manifest(&self.log_directory, &self.queue, &Local::now()).await
    }

    /// Download every queued record with at most `workers` in flight.
    ///
    /// Records sharing a filename are dispatched once. Per-item failures are
    /// reported and counted, never returned.
    pub async fn run(&self) -> Result<RunSummary> {
        tokio::fs::create_dir_all(&self.destination).await?;

        let mut summary = RunSummary {
            queued: self.queue.len() as u64,
            ..Default::default()
        };

        let mut seen = HashSet::new();
        let unique: Vec<&ImageRecord> = self
            .queue
            .iter()
            .filter(|record| seen.insert(record.filename()))
            .collect();
        summary.duplicates = summary.queued - unique.len() as u64;

        tracing::info!("downloading a total of {} images", unique.len());
        if summary.duplicates > 0 {
            tracing::info!(
                "{} duplicate records dropped from the queue",
                summary.duplicates
            );
        }

        let progress = self
            .show_progress
            .then(|| create_item_bar(unique.len() as u64, "Downloading"));

        let api = &self.api;
        let destination = self.destination.as_path();
        let mut results = stream::iter(unique)
            .map(|record| async move { download_record(api, record, destination).await })
            .buffer_unordered(self.workers);

        while let Some(outcome) = results.next().await {
            if let Outcome::Downloaded(path) = &outcome {
                tracing::debug!("Downloaded: {}", path.display());
            }
            summary.record(&outcome);

            if let Some(ref pb) = progress {
                pb.inc(1);
            }
        }

        if let Some(pb) = progress {
            pb.finish_and_clear();
        }

        Ok(summary)
    }
}
