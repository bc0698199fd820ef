//! Random page sampling for a single query.

use rand::Rng;

use crate::config::QuerySpec;
use crate::error::Result;
use crate::media::ImageRecord;
use crate::query::source::PageSource;

/// Number of page fetches needed to collect `desired_total` images.
pub fn batch_count(desired_total: u32, page_size: u32) -> u32 {
    desired_total.div_ceil(page_size.max(1))
}

/// Plans and executes the page fetches for configured queries.
pub struct QueryPlanner<'a, S: PageSource + ?Sized> {
    source: &'a S,
    page_size: u32,
}

impl<'a, S: PageSource + ?Sized> QueryPlanner<'a, S> {
    pub fn new(source: &'a S, page_size: u32) -> Self {
        Self { source, page_size }
    }

    /// Collect images for `query`.
    ///
    /// Fetches `ceil(desired / page_size)` pages, each chosen uniformly from
    /// `[1, total_pages]` with replacement. The last page is not trimmed, so
    /// the result may hold more than the desired number of images, and
    /// repeated pages yield repeated images.
    pub async fn plan<R: Rng + Send>(
        &self,
        query: &QuerySpec,
        rng: &mut R,
    ) -> Result<Vec<ImageRecord>> {
        let total_pages = self.source.total_pages(query, self.page_size).await?;

        if total_pages == 0 {
            tracing::warn!("No photos found for {}", query);
            return Ok(Vec::new());
        }

        let batches = batch_count(query.desired_total(), self.page_size);
        let mut records = Vec::new();

        for _ in 0..batches {
            let page = rng.gen_range(1..=total_pages);
            tracing::info!("getting page #{}", page);

            let batch = self.source.fetch_page(query, page, self.page_size).await?;
            records.extend(batch);
        }

        Ok(records)
    }
}
