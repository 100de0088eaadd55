//! Client for the Practicum homework statuses API.

use homework_core::EpochSecs;
use reqwest::{header::AUTHORIZATION, Client, StatusCode};
use serde_json::Value;
use thiserror::Error;
use tracing::info;

/// Production endpoint of the review API.
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("review API returned {0}")]
    UnexpectedStatus(StatusCode),
    #[error("review API body is not JSON: {0}")]
    MalformedBody(#[source] serde_json::Error),
    #[error("cannot connect to review API: {0}")]
    Connect(#[source] reqwest::Error),
    #[error("review API request timed out")]
    Timeout(#[source] reqwest::Error),
    #[error("review API request failed: {0}")]
    Transport(#[source] reqwest::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else if err.is_connect() {
            Self::Connect(err)
        } else {
            Self::Transport(err)
        }
    }
}

#[derive(Clone)]
pub struct PracticumClient {
    client: Client,
    endpoint: String,
    authorization: String,
}

impl PracticumClient {
    pub fn new(client: Client, endpoint: impl Into<String>, token: &str) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            authorization: format!("OAuth {token}"),
        }
    }

    /// Fetches submissions updated since `from_date` (epoch seconds).
    ///
    /// Only the transport and the JSON syntax are checked here; the payload
    /// shape is validated by the caller.
    pub async fn fetch_submissions(&self, from_date: EpochSecs) -> Result<Value, FetchError> {
        let resp = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, &self.authorization)
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(FetchError::UnexpectedStatus(status));
        }

        let body = resp.bytes().await?;
        let value = serde_json::from_slice(&body).map_err(FetchError::MalformedBody)?;
        info!(from_date, "got response");
        Ok(value)
    }
}
