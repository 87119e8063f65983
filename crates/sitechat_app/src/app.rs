use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

use client_logging::client_info;
use sitechat_core::{update, AppState, Msg};

use crate::config::Config;
use crate::effects::EffectRunner;
use crate::input::{self, InputEvent};
use crate::{logging, render};

pub fn run(config: Config) -> io::Result<()> {
    logging::initialize(config.log_destination);
    client_info!("sitechat starting, server={}", config.server_url);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(msg_tx.clone(), &config.server_url)
        .map_err(|err| io::Error::other(err.to_string()))?;

    let chat_enabled = Arc::new(AtomicBool::new(false));
    let quit = Arc::new(AtomicBool::new(false));
    spawn_input_thread(msg_tx, chat_enabled.clone(), quit.clone());

    println!("sitechat — chat with a scraped website");
    println!("{}", input::USAGE);
    print!("> ");
    io::stdout().flush()?;

    let mut state = AppState::new();
    while let Ok(msg) = msg_rx.recv() {
        if quit.load(Ordering::Relaxed) {
            break;
        }
        let (next, effects) = update(state, msg);
        state = next;
        runner.enqueue(effects);

        if state.consume_dirty() {
            let view = state.view();
            chat_enabled.store(view.chat_enabled, Ordering::Relaxed);
            print!("{}", render::render(&view));
            io::stdout().flush()?;
        }
    }

    client_info!("sitechat exiting");
    Ok(())
}

/// Reads stdin on its own thread and forwards parsed messages. Chat
/// queries are refused while chat is disabled, mirroring a disabled
/// input control. On quit it wakes the main loop with a no-op.
fn spawn_input_thread(
    msg_tx: mpsc::Sender<Msg>,
    chat_enabled: Arc<AtomicBool>,
    quit: Arc<AtomicBool>,
) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match input::parse_line(&line) {
                None => {}
                Some(InputEvent::Help) => {
                    println!("{}", input::USAGE);
                    print!("> ");
                    let _ = io::stdout().flush();
                }
                Some(InputEvent::Quit) => break,
                Some(InputEvent::Dispatch(Msg::QuerySubmitted(_)))
                    if !chat_enabled.load(Ordering::Relaxed) =>
                {
                    println!("Chat is disabled until a website is scraped; see /help.");
                    print!("> ");
                    let _ = io::stdout().flush();
                }
                Some(InputEvent::Dispatch(msg)) => {
                    if msg_tx.send(msg).is_err() {
                        break;
                    }
                }
            }
        }
        quit.store(true, Ordering::Relaxed);
        let _ = msg_tx.send(Msg::NoOp);
    });
}
