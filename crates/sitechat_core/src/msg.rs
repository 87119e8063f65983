/// Number of pages the backend ingested for a scrape request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrapeOutcome {
    pub pages_scraped: u64,
}

/// Answer text plus citations returned for a chat query.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatAnswer {
    pub text: String,
    pub sources: Vec<crate::Source>,
}

/// User-facing description of a failed backend request.
///
/// The text is already resolved by the IO layer (server-supplied error
/// or a generic fallback); the core only displays it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestFailure {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the API key field.
    ApiKeyInput(String),
    /// User edited the website URL field.
    SiteUrlInput(String),
    /// User edited the max-pages field (kept verbatim, never parsed).
    MaxPagesInput(String),
    /// User triggered the scrape control.
    ScrapeClicked,
    /// The scrape request finished, either way.
    ScrapeFinished(Result<ScrapeOutcome, RequestFailure>),
    /// User submitted a chat query.
    QuerySubmitted(String),
    /// The chat request for the given placeholder finished, either way.
    AnswerArrived {
        message_id: crate::MessageId,
        result: Result<ChatAnswer, RequestFailure>,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
