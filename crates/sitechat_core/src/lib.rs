//! Sitechat core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{ChatAnswer, Msg, RequestFailure, ScrapeOutcome};
pub use state::{
    AppState, MessageEntry, MessageId, Role, ScrapeForm, ScrapePhase, Severity, Source, StatusLine,
};
pub use update::{
    update, CHAT_READY_MESSAGE, PENDING_PLACEHOLDER, REQUIRED_FIELDS_ERROR, SCRAPE_IN_PROGRESS,
};
pub use view_model::{AppViewModel, MessageView, SourceView, EXCERPT_MAX_CHARS};
