use crate::{AppState, MessageId, Role, ScrapePhase, Source, StatusLine};

/// Longest source excerpt carried into the view, in characters.
pub const EXCERPT_MAX_CHARS: usize = 240;

/// Render-ready snapshot of the application state. Message text is
/// carried verbatim and must be rendered as literal text, never as
/// markup.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub scrape: ScrapePhase,
    pub chat_enabled: bool,
    pub status: Option<StatusLine>,
    pub transcript: Vec<MessageView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MessageView {
    pub id: MessageId,
    pub role: Role,
    pub text: String,
    pub pending: bool,
    pub sources: Vec<SourceView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceView {
    /// 1-based rank in the order the backend returned the sources.
    pub rank: usize,
    pub title: String,
    /// Relevance score fixed to two decimal places.
    pub score_label: String,
    pub url: String,
    pub excerpt: String,
}

impl AppViewModel {
    pub(crate) fn of(state: &AppState) -> Self {
        Self {
            scrape: state.scrape_phase(),
            chat_enabled: state.chat_enabled(),
            status: state.status().cloned(),
            transcript: state
                .messages()
                .iter()
                .map(|entry| MessageView {
                    id: entry.id,
                    role: entry.role,
                    text: entry.text.clone(),
                    pending: entry.pending,
                    sources: entry
                        .sources
                        .iter()
                        .enumerate()
                        .map(|(index, source)| SourceView::of(index + 1, source))
                        .collect(),
                })
                .collect(),
            dirty: state.is_dirty(),
        }
    }
}

impl SourceView {
    fn of(rank: usize, source: &Source) -> Self {
        Self {
            rank,
            title: source.title.clone(),
            score_label: format!("{:.2}", source.score),
            url: source.url.clone(),
            excerpt: excerpt(&source.content),
        }
    }
}

fn excerpt(content: &str) -> String {
    let mut out: String = content.chars().take(EXCERPT_MAX_CHARS).collect();
    if content.chars().nth(EXCERPT_MAX_CHARS).is_some() {
        out.push_str("...");
    }
    out
}
