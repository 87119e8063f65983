use std::env;

use crate::logging::LogDestination;

const DEFAULT_SERVER: &str = "http://127.0.0.1:5000";

/// Runtime configuration, read from environment variables with
/// defaults for local use.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the chat backend (`SITECHAT_SERVER`).
    pub server_url: String,
    /// Where log output goes (`SITECHAT_LOG`: file/term/both).
    pub log_destination: LogDestination,
}

impl Config {
    pub fn from_env() -> Self {
        let server_url =
            env::var("SITECHAT_SERVER").unwrap_or_else(|_| DEFAULT_SERVER.to_string());
        let log_destination = match env::var("SITECHAT_LOG").ok().as_deref() {
            Some("term") => LogDestination::Terminal,
            Some("both") => LogDestination::Both,
            _ => LogDestination::File,
        };
        Self {
            server_url,
            log_destination,
        }
    }
}
