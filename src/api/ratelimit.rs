//! Rate-limit tracking from response headers.

use std::sync::Arc;

use reqwest::header::HeaderMap;
use tokio::sync::RwLock;

const LIMIT_HEADER: &str = "x-ratelimit-limit";
const REMAINING_HEADER: &str = "x-ratelimit-remaining";

/// Hourly request allowance reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
}

impl RateLimit {
    /// Read both rate-limit headers. Returns `None` unless both are present
    /// and numeric.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let read = |name: &str| -> Option<u64> {
            headers.get(name)?.to_str().ok()?.trim().parse().ok()
        };

        Some(Self {
            limit: read(LIMIT_HEADER)?,
            remaining: read(REMAINING_HEADER)?,
        })
    }
}

/// Last rate limit seen, shared between clones of the API client.
///
/// Purely observational: nothing waits on it.
#[derive(Debug, Clone, Default)]
pub struct RateLimitState {
    inner: Arc<RwLock<Option<RateLimit>>>,
}

impl RateLimitState {
    /// Record the latest rate limit.
    pub async fn update(&self, rate_limit: RateLimit) {
        *self.inner.write().await = Some(rate_limit);
    }

    /// Update from response headers, if present. Returns what was recorded.
    pub async fn update_from_headers(&self, headers: &HeaderMap) -> Option<RateLimit> {
        let rate_limit = RateLimit::from_headers(headers)?;
        self.update(rate_limit).await;
        Some(rate_limit)
    }

    /// The most recent rate limit, if any response carried one.
    pub async fn current(&self) -> Option<RateLimit> {
        *self.inner.read().await
    }
}
