use serde::{Deserialize, Serialize};

/// The authenticated user's channel
///
/// Only `_id` is required; anything else missing from the response is left
/// empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelInfo {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub profile_pic_url: String,
}

/// Body returned after posting a mock event
///
/// The endpoint answers with JSON most of the time but may acknowledge with
/// plain text.
#[derive(Debug, Clone, PartialEq)]
pub enum MockEventResponse {
    Json(serde_json::Value),
    Text(String),
}

impl MockEventResponse {
    /// Renders the response for display
    pub fn to_pretty_string(&self) -> String {
        match self {
            MockEventResponse::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            MockEventResponse::Text(text) => text.clone(),
        }
    }
}
