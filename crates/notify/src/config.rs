use std::env;
use std::time::Duration;

use tracing::warn;

const DEFAULT_TIMEOUT_SECONDS: u64 = 5;

/// Configuration for the Telegram relay.
///
/// The relay is optional by contract: missing credentials disable it with
/// a warning rather than failing process startup, unlike the database
/// whose credentials are checked eagerly.
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    /// Telegram bot token
    pub token: String,
    /// Destination chat id
    pub chat_id: String,
    /// Upper bound on a single delivery attempt
    pub timeout: Duration,
}

impl NotifierConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads `TELEGRAM_BOT_TOKEN` (or legacy `TELEGRAM_TOKEN`) and
    /// `TELEGRAM_CHAT_ID`; returns `None` when either is absent.
    pub fn from_env() -> Option<Self> {
        let token = env::var("TELEGRAM_BOT_TOKEN")
            .or_else(|_| env::var("TELEGRAM_TOKEN"))
            .ok();
        let chat_id = env::var("TELEGRAM_CHAT_ID").ok();

        let timeout_seconds = env::var("TELEGRAM_TIMEOUT_SECONDS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);

        match (token, chat_id) {
            (Some(token), Some(chat_id)) => Some(Self {
                token,
                chat_id,
                timeout: Duration::from_secs(timeout_seconds),
            }),
            _ => {
                warn!("Telegram credentials not set, booking notifications disabled");
                None
            }
        }
    }
}
