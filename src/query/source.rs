//! Paginated photo sources.

use async_trait::async_trait;

use crate::api::UnsplashApi;
use crate::config::QuerySpec;
use crate::error::Result;
use crate::media::ImageRecord;

/// Something that can report page counts and serve pages for a query.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Number of pages available for `query` at `page_size` per page.
    async fn total_pages(&self, query: &QuerySpec, page_size: u32) -> Result<u32>;

    /// Fetch page `page` (1-based) of `query`.
    async fn fetch_page(
        &self,
        query: &QuerySpec,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<ImageRecord>>;
}

#[async_trait]
impl PageSource for UnsplashApi {
    async fn total_pages(&self, query: &QuerySpec, page_size: u32) -> Result<u32> {
        match query {
            QuerySpec::Search { query, .. } => self.search_total_pages(query, page_size).await,
            QuerySpec::Collection { collection_id, .. } => {
                self.collection_total_pages(collection_id, page_size).await
            }
        }
    }

    async fn fetch_page(
        &self,
        query: &QuerySpec,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<ImageRecord>> {
        match query {
            QuerySpec::Search { query, .. } => self.search_page(query, page, page_size).await,
            QuerySpec::Collection { collection_id, .. } => {
                self.collection_page(collection_id, page, page_size).await
            }
        }
    }
}
