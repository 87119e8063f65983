use crate::view_model::AppViewModel;

pub type MessageId = u64;

/// Phase of the scrape control. Loading means the control is disabled
/// and a request is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrapePhase {
    #[default]
    Idle,
    Loading,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Loading,
    Success,
    Error,
}

/// One line of status text shown next to the scrape control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub severity: Severity,
}

/// A backend-supplied citation attached to an assistant answer.
#[derive(Debug, Clone, PartialEq)]
pub struct Source {
    pub title: String,
    pub score: f64,
    pub url: String,
    pub content: String,
}

/// One transcript entry. Entries are appended in insertion order and
/// never removed during a session. A pending entry is an assistant
/// placeholder awaiting its answer, addressable by `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageEntry {
    pub id: MessageId,
    pub role: Role,
    pub text: String,
    pub sources: Vec<Source>,
    pub pending: bool,
}

/// The scrape form fields, edited individually and read at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScrapeForm {
    pub api_key: String,
    pub url: String,
    pub max_pages: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    form: ScrapeForm,
    scrape: ScrapePhase,
    chat_enabled: bool,
    status: Option<StatusLine>,
    messages: Vec<MessageEntry>,
    next_message_id: MessageId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel::of(self)
    }

    /// Returns whether a re-render is due, clearing the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn form(&self) -> &ScrapeForm {
        &self.form
    }

    pub fn scrape_phase(&self) -> ScrapePhase {
        self.scrape
    }

    pub fn chat_enabled(&self) -> bool {
        self.chat_enabled
    }

    pub fn status(&self) -> Option<&StatusLine> {
        self.status.as_ref()
    }

    pub fn messages(&self) -> &[MessageEntry] {
        &self.messages
    }

    pub(crate) fn set_api_key(&mut self, value: String) {
        self.form.api_key = value;
        self.dirty = true;
    }

    pub(crate) fn set_site_url(&mut self, value: String) {
        self.form.url = value;
        self.dirty = true;
    }

    pub(crate) fn set_max_pages(&mut self, value: String) {
        self.form.max_pages = value;
        self.dirty = true;
    }

    pub(crate) fn set_status(&mut self, text: impl Into<String>, severity: Severity) {
        self.status = Some(StatusLine {
            text: text.into(),
            severity,
        });
        self.dirty = true;
    }

    pub(crate) fn begin_scrape(&mut self) {
        self.scrape = ScrapePhase::Loading;
        self.dirty = true;
    }

    /// Unconditional cleanup once a scrape resolves: the control is
    /// re-enabled on success and failure alike.
    pub(crate) fn end_scrape(&mut self) {
        self.scrape = ScrapePhase::Idle;
        self.dirty = true;
    }

    pub(crate) fn enable_chat(&mut self) {
        self.chat_enabled = true;
        self.dirty = true;
    }

    pub(crate) fn push_message(&mut self, role: Role, text: String, pending: bool) -> MessageId {
        self.next_message_id += 1;
        let id = self.next_message_id;
        self.messages.push(MessageEntry {
            id,
            role,
            text,
            sources: Vec::new(),
            pending,
        });
        self.dirty = true;
        id
    }

    /// Replaces a pending placeholder's text and attaches sources,
    /// making it terminal. Returns false when no pending entry with
    /// this id exists; the state is left untouched in that case.
    pub(crate) fn resolve_pending(
        &mut self,
        id: MessageId,
        text: String,
        sources: Vec<Source>,
    ) -> bool {
        let Some(entry) = self
            .messages
            .iter_mut()
            .find(|entry| entry.id == id && entry.pending)
        else {
            return false;
        };
        entry.text = text;
        entry.sources = sources;
        entry.pending = false;
        self.dirty = true;
        true
    }
}
