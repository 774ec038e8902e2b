//! Search API client.
//!
//! Issues the one request the app makes: the default (empty-query) search
//! against the Hacker News Algolia API.

use std::sync::Arc;

use crate::adapters::ReqwestHttpClient;
use crate::error::{FetchError, FetchResult};
use crate::models::{SearchResponse, Story};
use crate::traits::{Headers, HttpClient};

/// Default search endpoint. The empty query returns the front-page results.
pub const SEARCH_API_URL: &str = "https://hn.algolia.com/api/v1/search?query=";

/// Client for the search endpoint.
///
/// Cheap to clone; the HTTP client is shared.
#[derive(Clone)]
pub struct SearchClient {
    /// Full request URL, query string included
    pub url: String,
    http: Arc<dyn HttpClient>,
}

impl SearchClient {
    /// Create a client for the default endpoint using reqwest.
    pub fn new() -> Self {
        Self::with_url(SEARCH_API_URL)
    }

    /// Create a reqwest-backed client for a custom URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self::with_http_client(url, Arc::new(ReqwestHttpClient::new()))
    }

    /// Create a client over any [`HttpClient`] implementation.
    pub fn with_http_client(url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        Self {
            url: url.into(),
            http,
        }
    }

    /// Fetch the result list.
    ///
    /// Transport errors, non-2xx statuses and undecodable bodies all come
    /// back as [`FetchError`].
    pub async fn fetch_stories(&self) -> FetchResult<Vec<Story>> {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        let response = self.http.get(&self.url, &headers).await?;

        if !response.is_success() {
            return Err(FetchError::Status {
                status: response.status,
            });
        }

        let body: SearchResponse = response.json()?;
        Ok(body.hits)
    }
}

impl Default for SearchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SearchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchClient").field("url", &self.url).finish()
    }
}
