use std::sync::{mpsc, Arc};
use std::thread;

use client_logging::client_info;
use sitechat_core::{ChatAnswer, Effect, Msg, RequestFailure, ScrapeOutcome, Source};
use sitechat_engine::{
    ApiError, ChatResponse, ClientSettings, EngineEvent, EngineHandle, HttpBackend, ScrapeRequest,
};

/// Fallback when the server rejects a scrape without a readable error body.
const SCRAPE_FALLBACK: &str = "An unknown error occurred.";
/// Fallback when the server rejects a chat query without a readable error body.
const CHAT_FALLBACK: &str = "Error getting response.";

/// Translates core effects into engine commands and engine events back
/// into core messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>, server_url: &str) -> Result<Self, ApiError> {
        let backend = Arc::new(HttpBackend::new(ClientSettings::new(server_url))?);
        let (event_tx, event_rx) = mpsc::channel();
        let engine = EngineHandle::spawn(backend, event_tx);
        spawn_event_loop(event_rx, msg_tx);
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::PostScrape {
                    api_key,
                    url,
                    max_pages,
                } => {
                    client_info!("PostScrape url={url}");
                    self.engine.scrape(ScrapeRequest {
                        api_key,
                        url,
                        max_pages,
                    });
                }
                Effect::PostChat { message_id, query } => {
                    client_info!("PostChat message_id={message_id} query_len={}", query.len());
                    self.engine.chat(message_id, query);
                }
            }
        }
    }
}

fn spawn_event_loop(event_rx: mpsc::Receiver<EngineEvent>, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        while let Ok(event) = event_rx.recv() {
            let msg = match event {
                EngineEvent::ScrapeCompleted { result } => Msg::ScrapeFinished(
                    result
                        .map(|response| ScrapeOutcome {
                            pages_scraped: response.pages_scraped,
                        })
                        .map_err(|err| failure(&err, SCRAPE_FALLBACK)),
                ),
                EngineEvent::ChatCompleted { message_id, result } => Msg::AnswerArrived {
                    message_id,
                    result: result
                        .map(to_chat_answer)
                        .map_err(|err| failure(&err, CHAT_FALLBACK)),
                },
            };
            if msg_tx.send(msg).is_err() {
                break;
            }
        }
    });
}

fn to_chat_answer(response: ChatResponse) -> ChatAnswer {
    ChatAnswer {
        text: response.response,
        sources: response
            .sources
            .into_iter()
            .map(|record| Source {
                title: record.title,
                score: record.score,
                url: record.url,
                content: record.content,
            })
            .collect(),
    }
}

/// Server-supplied error text wins; otherwise the per-endpoint
/// fallback for rejected requests, or the transport error's own text.
fn failure(err: &ApiError, fallback: &str) -> RequestFailure {
    let message = match err {
        ApiError::Status {
            message: Some(message),
            ..
        } => message.clone(),
        ApiError::Status { message: None, .. } => fallback.to_owned(),
        other => format!("An error occurred: {other}"),
    };
    RequestFailure { message }
}
