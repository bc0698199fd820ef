//! Unsplash API HTTP client.

use reqwest::{header, Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::ratelimit::{RateLimit, RateLimitState};
use crate::api::types::*;
use crate::config::DownloaderConfig;
use crate::error::{Error, Result};
use crate::media::{parse_photos, ImageRecord};

/// API version requested on every call.
const API_VERSION: &str = "v1";

/// User agent sent with API and image requests.
const USER_AGENT: &str = concat!("unsplash-downloader/", env!("CARGO_PKG_VERSION"));

/// Number of pages needed to hold `total` items at `page_size` per page.
pub fn total_pages(total: u64, page_size: u32) -> u32 {
    let page_size = u64::from(page_size.max(1));
    let pages = total.div_ceil(page_size);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Unsplash API client with credential headers and rate-limit tracking.
#[derive(Debug, Clone)]
pub struct UnsplashApi {
    client: Client,
    base_url: Url,
    access_key: String,
    order_by: String,
    content_filter: String,
    orientation: String,
    rate_limit: RateLimitState,
}

impl UnsplashApi {
    /// Create a new API client from the downloader settings.
    pub fn new(config: &DownloaderConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        // Url::join drops the last path segment unless the base ends in '/'
        let mut base = config.api_base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }

        Ok(Self {
            client,
            base_url: Url::parse(&base)?,
            access_key: config.unsplash_app_access_key.clone(),
            order_by: config.order_by.clone(),
            content_filter: config.content_filter.clone(),
            orientation: config.orientation.clone(),
            rate_limit: RateLimitState::default(),
        })
    }

    /// The most recent rate limit reported by the API.
    pub async fn rate_limit(&self) -> Option<RateLimit> {
        self.rate_limit.current().await
    }

    /// Build credential headers for API requests.
    fn build_headers(&self) -> Result<header::HeaderMap> {
        let mut headers = header::HeaderMap::new();

        let auth = header::HeaderValue::from_str(&format!("Client-ID {}", self.access_key))
            .map_err(|_| Error::ConfigValidation {
                field: "unsplash_app_access_key".to_string(),
                message: "Access key contains characters not allowed in a header".to_string(),
            })?;

        headers.insert(header::AUTHORIZATION, auth);
        headers.insert("accept-version", header::HeaderValue::from_static(API_VERSION));

        Ok(headers)
    }

    /// Make an authenticated GET request.
    async fn get(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Response> {
        let url = self.base_url.join(endpoint)?;
        tracing::debug!("GET {} {:?}", url, params);

        let response = self
            .client
            .get(url.clone())
            .query(params)
            .headers(self.build_headers()?)
            .send()
            .await?;

        if let Some(rate_limit) = self.rate_limit.update_from_headers(response.headers()).await {
            tracing::info!(
                "{}/{} requests to the Unsplash API left",
                rate_limit.remaining,
                rate_limit.limit
            );
        }

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response)
    }

    /// GET an endpoint and decode its JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let response = self.get(endpoint, params).await?;
        let text = response.text().await?;

        serde_json::from_str(&text).map_err(|e| {
            let snippet: String = text.chars().take(500).collect();
            Error::Decode {
                endpoint: endpoint.to_string(),
                message: format!("{} - Response: {}", e, snippet),
            }
        })
    }

    /// Shared parameters for search requests.
    fn search_params(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> Vec<(&'static str, String)> {
        vec![
            ("query", query.to_string()),
            ("page", page.to_string()),
            ("per_page", per_page.to_string()),
            ("order_by", self.order_by.clone()),
            ("content_filter", self.content_filter.clone()),
            ("orientation", self.orientation.clone()),
        ]
    }

    /// Number of result pages for a search at the given page size.
    pub async fn search_total_pages(&self, query: &str, page_size: u32) -> Result<u32> {
        // One-result probe; only `total` is needed
        let response: SearchResponse = self
            .get_json("search/photos", &self.search_params(query, 1, 1))
            .await?;

        tracing::debug!("Search '{}' matches {} photos", query, response.total);
        Ok(total_pages(response.total, page_size))
    }

    /// Fetch one page of search results.
    pub async fn search_page(
        &self,
        query: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<ImageRecord>> {
        let response: SearchResponse = self
            .get_json("search/photos", &self.search_params(query, page, page_size))
            .await?;

        Ok(parse_photos(response.results))
    }

    /// Number of photo pages in a collection at the given page size.
    pub async fn collection_total_pages(
        &self,
        collection_id: &str,
        page_size: u32,
    ) -> Result<u32> {
        let endpoint = format!("collections/{}", collection_id);
        let info: CollectionInfo = self.get_json(&endpoint, &[]).await?;

        tracing::debug!(
            "Collection {} ({}) holds {} photos",
            info.id,
            info.title.as_deref().unwrap_or("untitled"),
            info.total_photos
        );
        Ok(total_pages(info.total_photos, page_size))
    }

    /// Fetch one page of a collection's photos.
    pub async fn collection_page(
        &self,
        collection_id: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<ImageRecord>> {
        let endpoint = format!("collections/{}/photos", collection_id);
        let params = [
            ("page", page.to_string()),
            ("per_page", page_size.to_string()),
            ("orientation", self.orientation.clone()),
        ];

        let photos: Vec<Photo> = self.get_json(&endpoint, &params).await?;
        Ok(parse_photos(photos))
    }

    /// Start a streamed image download.
    ///
    /// Image hosts are not the API, so no credentials are sent. Anything other
    /// than `200 OK` fails with [`Error::Download`].
    pub async fn download_file(&self, url: &str) -> Result<Response> {
        let response = self.client.get(url).send().await?;

        if response.status() != StatusCode::OK {
            return Err(Error::Download(format!(
                "response code {}",
                response.status().as_u16()
            )));
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn photo_json(id: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "width": 4000,
            "height": 3000,
            "color": "#a6a6a6",
            "user": { "username": "photographer" },
            "urls": { "raw": format!("https://images.example.com/{}", id) },
            "links": { "html": format!("https://unsplash.com/photos/{}", id) }
        })
    }

    fn api_for(server: &MockServer) -> UnsplashApi {
        let config = DownloaderConfig {
            unsplash_app_access_key: "test-access-key".to_string(),
            api_base_url: server.uri(),
            ..Default::default()
        };
        UnsplashApi::new(&config).unwrap()
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(10, 30), 1);
        assert_eq!(total_pages(30, 30), 1);
        assert_eq!(total_pages(31, 30), 2);
        assert_eq!(total_pages(60, 30), 2);
        assert_eq!(total_pages(0, 30), 0);
    }

    #[tokio::test]
    async fn test_search_total_pages_sends_credentials_and_probe() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/photos"))
            .and(header("authorization", "Client-ID test-access-key"))
            .and(header("accept-version", "v1"))
            .and(query_param("query", "mountains"))
            .and(query_param("per_page", "1"))
            .and(query_param("order_by", "relevant"))
            .and(query_param("content_filter", "low"))
            .and(query_param("orientation", "landscape"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("X-Ratelimit-Limit", "50")
                    .insert_header("X-Ratelimit-Remaining", "49")
                    .set_body_json(serde_json::json!({ "total": 61, "results": [] })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let api = api_for(&server);
        assert_eq!(api.search_total_pages("mountains", 30).await.unwrap(), 3);
        assert_eq!(
            api.rate_limit().await,
            Some(RateLimit {
                limit: 50,
                remaining: 49
            })
        );
    }

    #[tokio::test]
    async fn test_search_page_maps_results() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/photos"))
            .and(query_param("page", "4"))
            .and(query_param("per_page", "30"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "total": 200,
                "results": [photo_json("a1"), photo_json("b2")]
            })))
            .mount(&server)
            .await;

        let api = api_for(&server);
        let records = api.search_page("mountains", 4, 30).await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "a1");
        assert_eq!(records[1].source_url, "https://images.example.com/b2");
        // No rate-limit headers: tolerated silently
        assert_eq!(api.rate_limit().await, None);
    }

    #[tokio::test]
    async fn test_collection_endpoints() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/collections/1065976"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "1065976",
                "title": "Wallpapers",
                "total_photos": 90
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/collections/1065976/photos"))
            .and(query_param("page", "2"))
            .and(query_param("orientation", "landscape"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!([photo_json("c3")])),
            )
            .mount(&server)
            .await;

        let api = api_for(&server);
        assert_eq!(api.collection_total_pages("1065976", 30).await.unwrap(), 3);

        let records = api.collection_page("1065976", 2, 30).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].filename(), "c3_photographer_4000x3000.jpg");
    }

    #[tokio::test]
    async fn test_error_status_propagates() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/collections/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let api = api_for(&server);
        let err = api.collection_total_pages("missing", 30).await.unwrap_err();
        assert!(matches!(err, Error::HttpStatus { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_malformed_response_is_decode_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/photos"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "results": [] })),
            )
            .mount(&server)
            .await;

        let api = api_for(&server);
        let err = api.search_total_pages("anything", 30).await.unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[tokio::test]
    async fn test_download_file_rejects_non_200() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/gone.jpg"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let api = api_for(&server);
        let err = api
            .download_file(&format!("{}/gone.jpg", server.uri()))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Download failed: response code 404");
    }
}
