//! The fetch → validate → notify loop.

use std::time::Duration;

use homework_core::{
    message,
    validation::{current_date, extract_latest_submission, parse_status, ResponseError, StatusError},
    EpochSecs,
};
use thiserror::Error;
use tokio::time::sleep;
use tracing::{debug, error, info};

use crate::practicum::{FetchError, PracticumClient};
use crate::telegram::TelegramBot;

/// Anything that aborts a single cycle. None of these stop the loop.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Response(#[from] ResponseError),
    #[error(transparent)]
    Status(#[from] StatusError),
}

/// What a successful cycle did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The latest submission was turned into this message and handed to the bot.
    Notified { message: String },
    /// The API reported no submissions since the cursor.
    NoNewSubmissions,
}

pub struct Poller {
    api: PracticumClient,
    bot: TelegramBot,
    interval: Duration,
    cursor: EpochSecs,
}

impl Poller {
    pub fn new(api: PracticumClient, bot: TelegramBot, interval: Duration, cursor: EpochSecs) -> Self {
        Self {
            api,
            bot,
            interval,
            cursor,
        }
    }

    /// Lower bound of the next fetch, in epoch seconds.
    pub fn cursor(&self) -> EpochSecs {
        self.cursor
    }

    /// One cycle without failure handling.
    ///
    /// The cursor moves to the server's `current_date` only when the cycle
    /// completes; a failed cycle leaves it where it was.
    pub async fn check_once(&mut self) -> Result<CycleOutcome, CycleError> {
        let response = self.api.fetch_submissions(self.cursor).await?;

        let outcome = match extract_latest_submission(&response) {
            Ok(record) => {
                let message = parse_status(&record)?;
                self.bot.deliver(&message).await;
                CycleOutcome::Notified { message }
            }
            Err(ResponseError::Empty) => {
                debug!(cursor = self.cursor, "no new submissions");
                CycleOutcome::NoNewSubmissions
            }
            Err(e) => return Err(e.into()),
        };

        if let Some(next) = current_date(&response) {
            self.cursor = next;
        }
        Ok(outcome)
    }

    /// One cycle with failure handling: a failed cycle is logged and reported
    /// to the chat before its error is returned.
    pub async fn tick(&mut self) -> Result<CycleOutcome, CycleError> {
        let res = self.check_once().await;
        if let Err(e) = &res {
            error!(error = ?e, cursor = self.cursor, "cycle failed: {e}");
            self.bot.deliver(&message::program_failure(e)).await;
        }
        res
    }

    /// Polls forever at the fixed interval, whatever each cycle's outcome.
    pub async fn run(mut self) {
        info!(
            cursor = self.cursor,
            interval_secs = self.interval.as_secs(),
            "polling started"
        );
        loop {
            let _ = self.tick().await;
            sleep(self.interval).await;
        }
    }
}
