//! Sitechat engine: HTTP backend client and effect execution.
mod backend;
mod engine;
mod types;

pub use backend::{Backend, ClientSettings, HttpBackend};
pub use engine::{EngineEvent, EngineHandle};
pub use types::{
    ApiError, ChatRequest, ChatResponse, MessageId, ScrapeRequest, ScrapeResponse, SourceRecord,
};
