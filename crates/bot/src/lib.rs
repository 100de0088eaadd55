#![forbid(unsafe_code)]

//! Polls the Practicum review API and relays status changes of the latest
//! homework submission to a Telegram chat.

use std::time::Duration;

use anyhow::Context;
use homework_core::{
    config::{ConfigError, Credentials},
    now_secs, EpochSecs,
};
use reqwest::Client;
use tracing::error;

pub mod logging;
pub mod poller;
pub mod practicum;
pub mod telegram;

use crate::poller::Poller;
use crate::practicum::PracticumClient;
use crate::telegram::TelegramBot;

/// Everything the notifier needs, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub credentials: Credentials,
    pub endpoint: String,
    pub telegram_api_url: String,
    pub poll_interval: Duration,
    pub request_timeout: Duration,
    /// Initial cursor; the current time when unset.
    pub from_date: Option<EpochSecs>,
    /// Run a single cycle and return its error, if any.
    pub once: bool,
}

/// Verifies the credentials and runs the poller.
///
/// Returns a [`ConfigError`] without touching the network when a credential
/// is missing. Otherwise only returns when `once` is set, with the cycle's
/// error if it failed (after it has been logged and reported to the chat).
pub async fn run(settings: Settings) -> anyhow::Result<()> {
    let credentials = match settings.credentials.into_verified() {
        Ok(c) => c,
        Err(e) => {
            let ConfigError::Missing(names) = &e;
            for name in names {
                error!("unavailable variable {name}");
            }
            error!("configuration is invalid, stopping");
            return Err(e.into());
        }
    };

    let client = Client::builder()
        .timeout(settings.request_timeout)
        .build()
        .context("building http client")?;

    let api = PracticumClient::new(
        client.clone(),
        settings.endpoint,
        credentials.practicum_token(),
    );
    let bot = TelegramBot::new(
        client,
        &settings.telegram_api_url,
        credentials.telegram_token(),
        credentials.telegram_chat_id(),
    );

    let cursor = settings.from_date.unwrap_or_else(now_secs);
    let mut poller = Poller::new(api, bot, settings.poll_interval, cursor);

    if settings.once {
        poller.tick().await?;
        return Ok(());
    }
    poller.run().await;
    Ok(())
}
