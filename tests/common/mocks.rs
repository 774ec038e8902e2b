//! Mock HTTP configuration for integration tests.

pub use storylist::adapters::mock::{MockHttpClient, MockResponse};
pub use storylist::traits::{HttpError, Response};

use bytes::Bytes;
use storylist::models::Story;

/// A 200 response whose body is `{"hits": [...]}`.
pub fn hits_response(stories: &[Story]) -> Response {
    Response::json_body(&serde_json::json!({ "hits": stories }))
}

/// Builder for a [`MockHttpClient`].
pub struct MockHttpConfig {
    client: MockHttpClient,
}

impl MockHttpConfig {
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    /// Answer `url` with the given status and raw body.
    pub fn with_raw_response(self, url: &str, status: u16, body: &str) -> Self {
        self.client.set_response(
            url,
            MockResponse::Success(Response::new(status, Bytes::from(body.to_string()))),
        );
        self
    }

    /// Answer every unmatched URL with `response`.
    pub fn with_default(self, response: MockResponse) -> Self {
        self.client.set_default_response(response);
        self
    }

    pub fn build(self) -> MockHttpClient {
        self.client
    }
}

impl Default for MockHttpConfig {
    fn default() -> Self {
        Self::new()
    }
}
