// src/services/telegram.rs
//! Telegram bot notifier
//!
//! Best-effort subscription notifications via the Bot API sendMessage
//! method. Callers spawn the send off the request path; a failure here
//! must never affect an HTTP response.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum TelegramError {
    #[error("Telegram bot token not configured")]
    NotConfigured,

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Telegram API error: {0}")]
    ApiError(String),
}

pub struct TelegramService {
    client: Client,
    bot_token: Option<String>,
}

#[derive(Deserialize)]
struct SendMessageResponse {
    ok: bool,
    description: Option<String>,
}

impl TelegramService {
    pub fn new(client: Client, bot_token: Option<String>) -> Self {
        let bot_token = bot_token.filter(|t| !t.is_empty());
        Self { client, bot_token }
    }

    pub fn is_configured(&self) -> bool {
        self.bot_token.is_some()
    }

    /// Send a plain-text message to a chat
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), TelegramError> {
        let token = self.bot_token.as_ref().ok_or(TelegramError::NotConfigured)?;

        let url = format!("https://api.telegram.org/bot{}/sendMessage", token);

        debug!(chat_id = %chat_id, "Sending Telegram notification");

        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({
                "chat_id": chat_id,
                "text": text,
            }))
            .send()
            .await
            .map_err(|e| TelegramError::RequestFailed(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!(status = %status, error = %error_text, "Telegram sendMessage failed");
            return Err(TelegramError::ApiError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body = response
            .json::<SendMessageResponse>()
            .await
            .map_err(|e| TelegramError::RequestFailed(e.to_string()))?;

        if !body.ok {
            let description = body.description.unwrap_or_else(|| "unknown".to_string());
            warn!(description = %description, "Telegram API rejected sendMessage");
            return Err(TelegramError::ApiError(description));
        }

        Ok(())
    }
}
