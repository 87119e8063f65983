use serde::{Deserialize, Serialize};

/// Identifier of the transcript placeholder a chat request belongs to.
/// Allocated by the caller; the engine only echoes it back.
pub type MessageId = u64;

/// Body of `POST /scrape`. `max_pages` is transmitted verbatim as a
/// string, exactly as the form field holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrapeRequest {
    pub api_key: String,
    pub url: String,
    pub max_pages: String,
}

/// Success body of `POST /scrape`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ScrapeResponse {
    pub pages_scraped: u64,
}

/// Body of `POST /chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub query: String,
}

/// Success body of `POST /chat`. A missing `sources` field decodes as
/// an empty list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(default)]
    pub sources: Vec<SourceRecord>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SourceRecord {
    pub title: String,
    pub score: f64,
    pub url: String,
    pub content: String,
}

/// Error body the backend sends with non-2xx statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response. `message` is the body's `error` field when the
    /// body was decodable.
    #[error("server returned status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid response body: {0}")]
    Decode(String),
}
