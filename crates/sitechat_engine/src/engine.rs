use std::sync::{mpsc, Arc};
use std::thread;

use client_logging::{client_debug, client_warn};

use crate::{ApiError, Backend, ChatResponse, MessageId, ScrapeRequest, ScrapeResponse};

enum EngineCommand {
    Scrape {
        request: ScrapeRequest,
    },
    Chat {
        message_id: MessageId,
        query: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    ScrapeCompleted {
        result: Result<ScrapeResponse, ApiError>,
    },
    ChatCompleted {
        message_id: MessageId,
        result: Result<ChatResponse, ApiError>,
    },
}

/// Bridge between the synchronous UI thread and the async backend.
///
/// Commands go over an mpsc channel to a dedicated thread owning a
/// tokio runtime; each command is spawned as its own task, so
/// overlapping requests complete independently and in any order.
/// Completion events arrive on the channel handed to [`EngineHandle::spawn`].
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn spawn(backend: Arc<dyn Backend>, event_tx: mpsc::Sender<EngineEvent>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    client_warn!("engine runtime failed to start: {err}");
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let backend = backend.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(backend.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx }
    }

    pub fn scrape(&self, request: ScrapeRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Scrape { request });
    }

    pub fn chat(&self, message_id: MessageId, query: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Chat {
            message_id,
            query: query.into(),
        });
    }
}

async fn handle_command(
    backend: &dyn Backend,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Scrape { request } => {
            client_debug!("scrape dispatched url={}", request.url);
            let result = backend.scrape(&request).await;
            if let Err(err) = &result {
                client_warn!("scrape failed: {err}");
            }
            let _ = event_tx.send(EngineEvent::ScrapeCompleted { result });
        }
        EngineCommand::Chat { message_id, query } => {
            client_debug!("chat dispatched message_id={message_id}");
            let result = backend.chat(&query).await;
            if let Err(err) = &result {
                client_warn!("chat message_id={message_id} failed: {err}");
            }
            let _ = event_tx.send(EngineEvent::ChatCompleted { message_id, result });
        }
    }
}
