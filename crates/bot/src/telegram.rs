//! Outgoing messages through the Telegram Bot API.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

/// Production Bot API base URL.
pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

// Telegram limit is 4096 chars per message.
const MAX_MESSAGE_CHARS: usize = 4096;

#[derive(Debug, Error)]
pub enum SendError {
    #[error("sendMessage request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("sendMessage response is not JSON: {0}")]
    MalformedBody(#[source] serde_json::Error),
    #[error("sendMessage rejected: {0}")]
    Rejected(String),
}

impl From<reqwest::Error> for SendError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL embeds the bot token.
        Self::Transport(err.without_url())
    }
}

/// Result of a best-effort delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    Dropped,
}

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct TgResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Bot bound to the single destination chat.
#[derive(Clone)]
pub struct TelegramBot {
    client: Client,
    send_url: String,
    chat_id: String,
}

impl TelegramBot {
    pub fn new(client: Client, api_url: &str, token: &str, chat_id: &str) -> Self {
        Self {
            client,
            send_url: format!("{}/bot{token}/sendMessage", api_url.trim_end_matches('/')),
            chat_id: chat_id.to_string(),
        }
    }

    /// Sends `text` to the configured chat, split into as many messages as
    /// the length limit requires.
    pub async fn send_message(&self, text: &str) -> Result<(), SendError> {
        for chunk in split_message(text, MAX_MESSAGE_CHARS) {
            let resp = self
                .client
                .post(&self.send_url)
                .json(&SendMessage {
                    chat_id: &self.chat_id,
                    text: &chunk,
                })
                .send()
                .await?;
            let body = resp.bytes().await?;
            let body: TgResponse =
                serde_json::from_slice(&body).map_err(SendError::MalformedBody)?;
            if !body.ok {
                return Err(SendError::Rejected(
                    body.description
                        .unwrap_or_else(|| "sendMessage failed".to_string()),
                ));
            }
        }
        Ok(())
    }

    /// Best-effort send: failures are logged and reported as
    /// [`Delivery::Dropped`], never propagated.
    pub async fn deliver(&self, text: &str) -> Delivery {
        match self.send_message(text).await {
            Ok(()) => {
                info!("message sent: {text}");
                Delivery::Sent
            }
            Err(e) => {
                error!(error = ?e, "failed sending message: {e}");
                Delivery::Dropped
            }
        }
    }
}

fn split_message(text: &str, max_chars: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return vec![String::new()];
    }
    chars
        .chunks(max_chars)
        .map(|chunk| chunk.iter().collect())
        .collect()
}
