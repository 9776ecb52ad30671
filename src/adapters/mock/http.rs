//! Mock HTTP client for testing.
//!
//! Provides a configurable mock HTTP client that can return predefined
//! responses or errors. Also backs the `--offline` flag, where every route is
//! configured to fail so the failure paths can be exercised by hand.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;

use crate::traits::{HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Request URL
    pub url: String,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a successful response
    Success(Response),
    /// Return an error
    Error(HttpError),
}

/// Mock HTTP client for testing.
///
/// Responses are matched by URL suffix, so tests can configure `/posts`
/// without caring about the base URL.
///
/// # Example
///
/// ```ignore
/// use postboard::adapters::mock::{MockHttpClient, MockResponse};
/// use postboard::traits::{HttpClient, Response};
/// use bytes::Bytes;
///
/// let client = MockHttpClient::new();
/// client.set_response("/posts", MockResponse::Success(Response::new(200, Bytes::from("[]"))));
///
/// let response = client.get("https://example.com/posts").await?;
/// assert_eq!(response.status, 200);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    /// Configured responses by URL suffix
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    /// Default response when no suffix matches
    default_response: Arc<Mutex<Option<MockResponse>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    /// Create a new mock client with no configured responses.
    ///
    /// Unconfigured requests fail with [`HttpError::Other`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock client where every request fails with a 500.
    ///
    /// Stands in for a dead backend.
    pub fn failing() -> Self {
        let client = Self::new();
        client.set_default_response(MockResponse::Success(Response::new(
            500,
            Bytes::from_static(b"Internal Server Error"),
        )));
        client
    }

    /// Configure the response for requests whose URL ends with `url_suffix`.
    pub fn set_response(&self, url_suffix: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(url_suffix.to_string(), response);
    }

    /// Configure the fallback response for unmatched URLs.
    pub fn set_default_response(&self, response: MockResponse) {
        let mut default = self.default_response.lock().unwrap();
        *default = Some(response);
    }

    /// Get all recorded requests.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Get the number of recorded requests.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn lookup(&self, url: &str) -> Option<MockResponse> {
        let responses = self.responses.lock().unwrap();
        responses
            .iter()
            .find(|(suffix, _)| url.ends_with(suffix.as_str()))
            .map(|(_, response)| response.clone())
            .or_else(|| self.default_response.lock().unwrap().clone())
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str) -> Result<Response, HttpError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
        });

        match self.lookup(url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("no mock response for {}", url))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_returns_configured_response() {
        let client = MockHttpClient::new();
        client.set_response(
            "/posts",
            MockResponse::Success(Response::new(200, Bytes::from("[]"))),
        );

        let response = client
            .get("https://example.com/posts")
            .await
            .expect("configured response");
        assert_eq!(response.status, 200);
        assert_eq!(response.body, Bytes::from("[]"));
    }

    #[tokio::test]
    async fn test_returns_configured_error() {
        let client = MockHttpClient::new();
        client.set_response(
            "/users",
            MockResponse::Error(HttpError::Timeout("3s".to_string())),
        );

        let result = client.get("https://example.com/users").await;
        assert!(matches!(result, Err(HttpError::Timeout(_))));
    }

    #[tokio::test]
    async fn test_unconfigured_url_fails() {
        let client = MockHttpClient::new();
        let result = client.get("https://example.com/unknown").await;
        assert!(matches!(result, Err(HttpError::Other(_))));
    }

    #[tokio::test]
    async fn test_records_requests() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Success(Response::new(200, Bytes::new())));

        let _ = client.get("https://example.com/a").await;
        let _ = client.get("https://example.com/b").await;

        let requests = client.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].url, "https://example.com/a");
        assert_eq!(requests[1].url, "https://example.com/b");
    }

    #[tokio::test]
    async fn test_failing_client_returns_500_everywhere() {
        let client = MockHttpClient::failing();

        let response = client.get("https://example.com/posts").await.unwrap();
        assert_eq!(response.status, 500);
        let response = client.get("https://example.com/users").await.unwrap();
        assert_eq!(response.status, 500);
    }
}
