use crate::{AppState, Effect, Msg, Role, ScrapePhase, Severity};

/// Shown when the scrape form is submitted with a missing field.
pub const REQUIRED_FIELDS_ERROR: &str = "API Key and Website URL are required.";
/// Shown while a scrape request is in flight.
pub const SCRAPE_IN_PROGRESS: &str = "Scraping website... This may take a moment.";
/// Assistant message appended once scraping succeeds.
pub const CHAT_READY_MESSAGE: &str = "Website content is loaded. You can now ask questions!";
/// Provisional text of an assistant placeholder awaiting its answer.
pub const PENDING_PLACEHOLDER: &str = "...";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ApiKeyInput(value) => {
            state.set_api_key(value);
            Vec::new()
        }
        Msg::SiteUrlInput(value) => {
            state.set_site_url(value);
            Vec::new()
        }
        Msg::MaxPagesInput(value) => {
            state.set_max_pages(value);
            Vec::new()
        }
        Msg::ScrapeClicked => {
            // The control is disabled while a request is in flight.
            if state.scrape_phase() == ScrapePhase::Loading {
                return (state, Vec::new());
            }
            let api_key = state.form().api_key.trim().to_owned();
            let url = state.form().url.trim().to_owned();
            if api_key.is_empty() || url.is_empty() {
                state.set_status(REQUIRED_FIELDS_ERROR, Severity::Error);
                return (state, Vec::new());
            }
            let max_pages = state.form().max_pages.clone();
            state.set_status(SCRAPE_IN_PROGRESS, Severity::Loading);
            state.begin_scrape();
            vec![Effect::PostScrape {
                api_key,
                url,
                max_pages,
            }]
        }
        Msg::ScrapeFinished(result) => {
            match result {
                Ok(outcome) => {
                    state.set_status(
                        format!("Scraped {} pages successfully!", outcome.pages_scraped),
                        Severity::Success,
                    );
                    state.enable_chat();
                    state.push_message(Role::Assistant, CHAT_READY_MESSAGE.to_owned(), false);
                }
                Err(failure) => {
                    // Chat keeps whatever enablement it already had.
                    state.set_status(failure.message, Severity::Error);
                }
            }
            state.end_scrape();
            Vec::new()
        }
        Msg::QuerySubmitted(raw) => {
            let query = raw.trim();
            if query.is_empty() {
                return (state, Vec::new());
            }
            state.push_message(Role::User, query.to_owned(), false);
            let message_id =
                state.push_message(Role::Assistant, PENDING_PLACEHOLDER.to_owned(), true);
            vec![Effect::PostChat {
                message_id,
                query: query.to_owned(),
            }]
        }
        Msg::AnswerArrived { message_id, result } => {
            match result {
                Ok(answer) => {
                    state.resolve_pending(message_id, answer.text, answer.sources);
                }
                Err(failure) => {
                    state.resolve_pending(message_id, failure.message, Vec::new());
                }
            }
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
