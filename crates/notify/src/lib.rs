//! # Slotbook Notify
//!
//! Best-effort outbound notifications over the Telegram Bot API.
//!
//! Notification delivery is strictly fire-and-forget: a booking that has
//! committed must never be failed, delayed past a bounded timeout, or
//! rolled back because the relay is down. Dispatch happens on a detached
//! task and every failure is logged, never surfaced.

pub mod config;
pub mod message;

use eyre::{eyre, Result};
use serde_json::json;
use tracing::{debug, warn};

pub use config::NotifierConfig;
pub use message::{render_booking_notice, BookingNotice};

/// Telegram relay client.
#[derive(Debug, Clone)]
pub struct Notifier {
    client: reqwest::Client,
    config: NotifierConfig,
}

impl Notifier {
    pub fn new(config: NotifierConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    /// Dispatches a booking notice on a detached task.
    ///
    /// Returns immediately; the caller's success path never awaits the
    /// send. Failures are logged at warn level and swallowed.
    pub fn spawn_booking_notice(&self, notice: BookingNotice) {
        let notifier = self.clone();
        tokio::spawn(async move {
            let text = render_booking_notice(&notice);
            if let Err(err) = notifier.send_message(&text).await {
                warn!("Booking notification failed (booking unaffected): {err}");
            }
        });
    }

    /// Sends one message through the Bot API `sendMessage` endpoint.
    async fn send_message(&self, text: &str) -> Result<()> {
        let url = format!(
            "https://api.telegram.org/bot{}/sendMessage",
            self.config.token
        );

        let response = self
            .client
            .post(&url)
            .json(&json!({
                "chat_id": self.config.chat_id,
                "text": text,
                "parse_mode": "HTML",
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(eyre!("Telegram HTTP {status} - {body}"));
        }

        debug!("Booking notification delivered");
        Ok(())
    }
}
