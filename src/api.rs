//! Typed fetch client for the posts service.
//!
//! Thin pass-through layer: each operation performs one GET against a
//! JSONPlaceholder-style endpoint and decodes the JSON array. The state
//! machines upstream only distinguish success from failure; the cause is
//! logged here and then carried opaquely.

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{Comment, Post, User};
use crate::traits::{HttpClient, HttpError};

/// Default base URL for the backing REST service.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Errors from a single fetch operation.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (connection, timeout, TLS).
    #[error("transport error: {0}")]
    Transport(#[from] HttpError),

    /// The server answered with a non-2xx status.
    #[error("bad HTTP status: {0}")]
    BadStatus(u16),

    /// The response body did not decode as the expected JSON shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result of one fetch operation.
pub type FetchResult<T> = Result<T, FetchError>;

/// Typed client over the three list endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient<C> {
    http: C,
    base_url: String,
}

impl<C: HttpClient> ApiClient<C> {
    /// Create a client against the default base URL.
    pub fn new(http: C) -> Self {
        Self::with_base_url(http, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom base URL (used by tests).
    pub fn with_base_url(http: C, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch /posts.
    pub async fn get_posts(&self) -> FetchResult<Vec<Post>> {
        self.get_decoded("/posts").await
    }

    /// Fetch /users.
    pub async fn get_users(&self) -> FetchResult<Vec<User>> {
        self.get_decoded("/users").await
    }

    /// Fetch /comments.
    pub async fn get_comments(&self) -> FetchResult<Vec<Comment>> {
        self.get_decoded("/comments").await
    }

    /// Generic JSON fetching / decoding.
    async fn get_decoded<T: DeserializeOwned>(&self, path: &str) -> FetchResult<T> {
        let url = format!("{}{}", self.base_url, path);

        let response = self.http.get(&url).await.map_err(|e| {
            tracing::warn!(%url, error = %e, "request failed");
            FetchError::from(e)
        })?;

        if !response.is_success() {
            tracing::warn!(%url, status = response.status, "bad HTTP status");
            return Err(FetchError::BadStatus(response.status));
        }

        response.json::<T>().map_err(|e| {
            tracing::warn!(%url, error = %e, "JSON decoding failed");
            FetchError::from(e)
        })
    }
}
