//! End-to-end run: plan every query, then download the combined queue.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::api::UnsplashApi;
use crate::config::{Config, QuerySpec};
use crate::download::{DownloadCoordinator, RunSummary};
use crate::error::Result;
use crate::query::{PageSource, QueryPlanner};

/// Run every configured query in order and append the results to `coordinator`.
///
/// Stops at the first planning error.
pub async fn queue_queries<S, R>(
    source: &S,
    queries: &[QuerySpec],
    page_size: u32,
    coordinator: &mut DownloadCoordinator,
    rng: &mut R,
) -> Result<()>
where
    S: PageSource + ?Sized,
    R: Rng + Send,
{
    let planner = QueryPlanner::new(source, page_size);

    for query in queries {
        tracing::info!("queueing {}", query);
        let records = planner.plan(query, rng).await?;
        tracing::debug!("{} queued {} records", query.kind(), records.len());
        coordinator.enqueue(records);
    }

    Ok(())
}

/// Execute a full run.
///
/// The destination is cleared once, after all queries are queued and before
/// anything is downloaded, so a planning failure leaves it untouched.
pub async fn run_pipeline(config: &Config) -> Result<RunSummary> {
    let settings = &config.downloader;
    let api = UnsplashApi::new(settings)?;
    let mut coordinator = DownloadCoordinator::new(api.clone(), settings);
    let mut rng = StdRng::from_entropy();

    queue_queries(
        &api,
        &config.querys,
        settings.max_per_page,
        &mut coordinator,
        &mut rng,
    )
    .await?;

    if settings.clear_destination {
        coordinator.clear_destination().await?;
    }

    let manifest = coordinator.write_manifest().await?;
    tracing::info!(
        "Logged {} queued images to {}",
        coordinator.queue().len(),
        manifest.display()
    );

    coordinator.run().await
}
