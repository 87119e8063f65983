use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::types::ErrorBody;
use crate::{ApiError, ChatRequest, ChatResponse, ScrapeRequest, ScrapeResponse};

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    /// Overall per-request deadline. `None` leaves the transport's own
    /// behavior in place; a request then waits as long as the server
    /// keeps the connection alive.
    pub request_timeout: Option<Duration>,
}

impl ClientSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
        }
    }
}

/// The two remote operations the client consumes. The server side is
/// an external collaborator; this is its entire contract.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    async fn scrape(&self, request: &ScrapeRequest) -> Result<ScrapeResponse, ApiError>;
    async fn chat(&self, query: &str) -> Result<ChatResponse, ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder().connect_timeout(settings.connect_timeout);
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_owned(),
        })
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            // Best effort: the backend sends `{"error": ...}`, but a
            // proxy may answer with anything.
            let message = response.json::<ErrorBody>().await.ok().map(|body| body.error);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }
}

#[async_trait::async_trait]
impl Backend for HttpBackend {
    async fn scrape(&self, request: &ScrapeRequest) -> Result<ScrapeResponse, ApiError> {
        self.post_json("/scrape", request).await
    }

    async fn chat(&self, query: &str) -> Result<ChatResponse, ApiError> {
        let request = ChatRequest {
            query: query.to_owned(),
        };
        self.post_json("/chat", &request).await
    }
}

fn map_transport_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::Timeout;
    }
    ApiError::Network(err.to_string())
}
