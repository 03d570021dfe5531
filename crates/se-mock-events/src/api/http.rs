//! HTTP client abstraction for the StreamElements API
//!
//! This module provides a trait-based HTTP client that can be easily mocked for testing.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use serde::de::DeserializeOwned;

/// Trait for making HTTP requests
///
/// Implementations hand back the raw status, content type and body; callers
/// decide what counts as an error.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Makes a GET request and returns the raw response
    async fn get_response(&self, url: &str, headers: &HeaderMap) -> Result<HttpResponse>;

    /// Makes a POST request with the given body and returns the raw response
    async fn post_response(
        &self,
        url: &str,
        headers: &HeaderMap,
        body: String,
    ) -> Result<HttpResponse>;
}

/// Response from an HTTP request
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl HttpResponse {
    /// Returns true if status is in 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns true if the declared content type is JSON
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.contains("application/json"))
    }

    /// Deserializes the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).context("Failed to parse JSON response")
    }
}

/// Production HTTP client using reqwest
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a new reqwest-based HTTP client
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    async fn read_response(response: reqwest::Response) -> HttpResponse {
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);
        let body = response.text().await.unwrap_or_default();

        HttpResponse {
            status,
            content_type,
            body,
        }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get_response(&self, url: &str, headers: &HeaderMap) -> Result<HttpResponse> {
        let response = self
            .inner
            .get(url)
            .headers(headers.clone())
            .send()
            .await
            .context("Failed to send request")?;

        Ok(Self::read_response(response).await)
    }

    async fn post_response(
        &self,
        url: &str,
        headers: &HeaderMap,
        body: String,
    ) -> Result<HttpResponse> {
        let response = self
            .inner
            .post(url)
            .headers(headers.clone())
            .body(body)
            .send()
            .await
            .context("Failed to send request")?;

        Ok(Self::read_response(response).await)
    }
}
