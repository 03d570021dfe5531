mod client;
pub mod http;
mod types;

pub use client::{StreamElementsClient, DEFAULT_BASE_URL};
pub use http::{HttpClient, HttpResponse, ReqwestClient};
pub use types::*;

/// Errors returned by the StreamElements API client
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The API answered with a non-2xx status
    ///
    /// Displays the response body, or `HTTP error <status>` if it was empty.
    #[error("{message}")]
    RequestFailed { status: u16, message: String },

    /// A JSON endpoint answered successfully with something else
    #[error("API returned non-JSON response for channel info")]
    UnexpectedContentType,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
