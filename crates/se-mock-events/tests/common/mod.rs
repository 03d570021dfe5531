//! Common test utilities for integration tests

#![allow(dead_code)]

use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use se_mock_events::api::{HttpClient, HttpResponse};
use se_mock_events::events::EventFieldValues;
use std::sync::{Arc, Mutex};

/// HTTP client that answers every request with the same response
#[derive(Debug, Clone)]
pub struct CannedHttpClient {
    status: u16,
    content_type: Option<String>,
    body: String,
    last_url: Arc<Mutex<Option<String>>>,
}

impl CannedHttpClient {
    pub fn new(status: u16, content_type: Option<&str>, body: &str) -> Self {
        Self {
            status,
            content_type: content_type.map(ToString::to_string),
            body: body.to_string(),
            last_url: Arc::new(Mutex::new(None)),
        }
    }

    /// URL of the most recent request
    pub fn last_url(&self) -> Option<String> {
        self.last_url.lock().unwrap().clone()
    }

    fn answer(&self, url: &str) -> HttpResponse {
        *self.last_url.lock().unwrap() = Some(url.to_string());
        HttpResponse {
            status: self.status,
            content_type: self.content_type.clone(),
            body: self.body.clone(),
        }
    }
}

#[async_trait]
impl HttpClient for CannedHttpClient {
    async fn get_response(&self, url: &str, _headers: &HeaderMap) -> Result<HttpResponse> {
        Ok(self.answer(url))
    }

    async fn post_response(
        &self,
        url: &str,
        _headers: &HeaderMap,
        _body: String,
    ) -> Result<HttpResponse> {
        Ok(self.answer(url))
    }
}

/// Values as a user would type them into the tip form
pub fn tip_values(sender: &str, amount: i64, message: &str) -> EventFieldValues {
    EventFieldValues::new()
        .with("sender", sender)
        .with("amount", amount)
        .with("message", message)
}
