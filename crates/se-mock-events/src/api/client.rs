use anyhow::Context;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;

use super::http::{HttpClient, HttpResponse, ReqwestClient};
use super::types::{ChannelInfo, MockEventResponse};
use super::ApiError;

/// Base URL of the StreamElements v2 API
pub const DEFAULT_BASE_URL: &str = "https://api.streamelements.com/kappa/v2";

const APPLICATION_JSON: &str = "application/json";

/// StreamElements API client
///
/// Holds no credentials; every call takes the bearer token explicitly.
/// Generic over the HTTP client implementation for testability.
#[derive(Debug, Clone)]
pub struct StreamElementsClient<H: HttpClient = ReqwestClient> {
    http: H,
    base_url: String,
}

impl StreamElementsClient<ReqwestClient> {
    /// Creates a client for the public API with the default HTTP implementation
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client for a different API root
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_http_client(base_url, ReqwestClient::new())
    }
}

impl Default for StreamElementsClient<ReqwestClient> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: HttpClient> StreamElementsClient<H> {
    /// Creates a client with a custom HTTP implementation
    pub fn with_http_client(base_url: impl Into<String>, http: H) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the headers for an authenticated request
    fn build_headers(token: &str, with_body: bool) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}"))
                .context("Token contains characters not allowed in a header")?,
        );
        if with_body {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        }

        Ok(headers)
    }

    /// Fetches the channel that owns `token`
    ///
    /// Fails with `ApiError::RequestFailed` for non-2xx responses and
    /// `ApiError::UnexpectedContentType` if a successful response is not JSON.
    pub async fn fetch_channel_info(&self, token: &str) -> Result<ChannelInfo, ApiError> {
        let headers = Self::build_headers(token, false)?;
        let url = format!("{}/channels/me", self.base_url);

        tracing::debug!("GET {}", url);
        let response = self.http.get_response(&url, &headers).await?;

        if !response.is_success() {
            return Err(request_failed(&response));
        }

        if !response.is_json() {
            tracing::warn!(
                "Channel lookup returned content type {:?}",
                response.content_type
            );
            return Err(ApiError::UnexpectedContentType);
        }

        Ok(response.json()?)
    }

    /// Posts a mock event to a channel's activity feed
    ///
    /// Non-JSON success responses are returned as text rather than treated
    /// as errors.
    pub async fn send_mock_event<P: Serialize + ?Sized>(
        &self,
        channel_id: &str,
        token: &str,
        payload: &P,
    ) -> Result<MockEventResponse, ApiError> {
        let headers = Self::build_headers(token, true)?;
        let url = format!(
            "{}/activities/{}/mock",
            self.base_url,
            urlencoding::encode(channel_id)
        );
        let body = serde_json::to_string(payload).context("Failed to serialize payload")?;

        tracing::debug!("POST {} ({} bytes)", url, body.len());
        let response = self.http.post_response(&url, &headers, body).await?;

        if !response.is_success() {
            return Err(request_failed(&response));
        }

        if response.is_json() {
            Ok(MockEventResponse::Json(response.json()?))
        } else {
            Ok(MockEventResponse::Text(response.body))
        }
    }
}

/// Converts a non-2xx response into an error carrying its body
fn request_failed(response: &HttpResponse) -> ApiError {
    tracing::warn!("API error {}: {}", response.status, response.body);

    let message = if response.body.is_empty() {
        format!("HTTP error {}", response.status)
    } else {
        response.body.clone()
    };

    ApiError::RequestFailed {
        status: response.status,
        message,
    }
}
