//! Terminal rendering of the view model. Message text is printed
//! verbatim as literal text; only the structural labels around it are
//! produced here.

use sitechat_core::{AppViewModel, MessageView, Role, Severity};

/// How many transcript entries the renderer follows; the newest always
/// stays in view.
const TRANSCRIPT_TAIL: usize = 8;

pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();

    if let Some(status) = &view.status {
        let tag = match status.severity {
            Severity::Loading => "...",
            Severity::Success => "ok",
            Severity::Error => "error",
        };
        out.push('[');
        out.push_str(tag);
        out.push_str("] ");
        out.push_str(&status.text);
        out.push('\n');
    }
    if !view.chat_enabled {
        out.push_str("(chat is disabled until a website is scraped; see /help)\n");
    }

    let start = view.transcript.len().saturating_sub(TRANSCRIPT_TAIL);
    for message in &view.transcript[start..] {
        render_message(&mut out, message);
    }

    out.push_str("> ");
    out
}

fn render_message(out: &mut String, message: &MessageView) {
    let speaker = match message.role {
        Role::User => "you",
        Role::Assistant => "bot",
    };
    out.push_str(speaker);
    out.push_str("> ");
    out.push_str(&message.text);
    out.push('\n');

    if message.sources.is_empty() {
        return;
    }
    out.push_str(&format!(
        "     View {} relevant source(s)\n",
        message.sources.len()
    ));
    for source in &message.sources {
        out.push_str(&format!(
            "       {}. {} (relevance {}) {}\n",
            source.rank, source.title, source.score_label, source.url
        ));
        if !source.excerpt.is_empty() {
            out.push_str("          ");
            out.push_str(&source.excerpt);
            out.push('\n');
        }
    }
}
