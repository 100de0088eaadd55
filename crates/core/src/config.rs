//! Credentials the notifier cannot run without.

use std::fmt;

use thiserror::Error;

/// Environment variable holding the review API token.
pub const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
/// Environment variable holding the Telegram bot token.
pub const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
/// Environment variable holding the destination chat id.
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

/// Startup-fatal configuration problems.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Variables that are absent or blank, in declaration order.
    #[error("unavailable variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
}

/// Credentials as read from the environment; any of them may be absent.
#[derive(Clone, Default)]
pub struct Credentials {
    /// Review API OAuth token.
    pub practicum_token: Option<String>,
    /// Telegram bot token.
    pub telegram_token: Option<String>,
    /// Destination chat id or `@channel` name.
    pub telegram_chat_id: Option<String>,
}

impl Credentials {
    /// Names of the variables that are absent or blank.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (PRACTICUM_TOKEN, &self.practicum_token),
            (TELEGRAM_TOKEN, &self.telegram_token),
            (TELEGRAM_CHAT_ID, &self.telegram_chat_id),
        ]
        .into_iter()
        .filter(|(_, value)| present(value).is_none())
        .map(|(name, _)| name)
        .collect()
    }

    /// True when every credential is present.
    pub fn verify(&self) -> bool {
        self.missing().is_empty()
    }

    /// Checks presence and trims every value.
    pub fn into_verified(self) -> Result<VerifiedCredentials, ConfigError> {
        match (
            present(&self.practicum_token),
            present(&self.telegram_token),
            present(&self.telegram_chat_id),
        ) {
            (Some(practicum_token), Some(telegram_token), Some(telegram_chat_id)) => {
                Ok(VerifiedCredentials {
                    practicum_token: practicum_token.to_string(),
                    telegram_token: telegram_token.to_string(),
                    telegram_chat_id: telegram_chat_id.to_string(),
                })
            }
            _ => Err(ConfigError::Missing(self.missing())),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("practicum_token", &self.practicum_token.as_ref().map(|_| REDACTED))
            .field("telegram_token", &self.telegram_token.as_ref().map(|_| REDACTED))
            .field("telegram_chat_id", &self.telegram_chat_id)
            .finish()
    }
}

/// Credentials with every value present. Immutable once built.
#[derive(Clone)]
pub struct VerifiedCredentials {
    practicum_token: String,
    telegram_token: String,
    telegram_chat_id: String,
}

impl VerifiedCredentials {
    /// Review API OAuth token.
    pub fn practicum_token(&self) -> &str {
        &self.practicum_token
    }

    /// Telegram bot token.
    pub fn telegram_token(&self) -> &str {
        &self.telegram_token
    }

    /// Destination chat id.
    pub fn telegram_chat_id(&self) -> &str {
        &self.telegram_chat_id
    }
}

impl fmt::Debug for VerifiedCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerifiedCredentials")
            .field("practicum_token", &REDACTED)
            .field("telegram_token", &REDACTED)
            .field("telegram_chat_id", &self.telegram_chat_id)
            .finish()
    }
}

const REDACTED: &str = "<redacted>";

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> Credentials {
        Credentials {
            practicum_token: Some("p".into()),
            telegram_token: Some("t".into()),
            telegram_chat_id: Some("42".into()),
        }
    }

    #[test]
    fn complete_credentials_verify() {
        let creds = full();
        assert!(creds.verify());
        let verified = creds.into_verified().unwrap();
        assert_eq!(verified.telegram_chat_id(), "42");
        assert_eq!(verified.practicum_token(), "p");
    }

    #[test]
    fn reports_each_missing_variable() {
        let creds = Credentials {
            telegram_token: None,
            telegram_chat_id: Some("   ".into()),
            ..full()
        };
        assert!(!creds.verify());
        assert_eq!(creds.missing(), vec![TELEGRAM_TOKEN, TELEGRAM_CHAT_ID]);
        assert_eq!(
            creds.into_verified().unwrap_err(),
            ConfigError::Missing(vec![TELEGRAM_TOKEN, TELEGRAM_CHAT_ID])
        );
    }

    #[test]
    fn debug_output_hides_tokens() {
        let rendered = format!("{:?}", full().into_verified().unwrap());
        assert!(!rendered.contains("\"p\""));
        assert!(rendered.contains("<redacted>"));
        assert!(rendered.contains("42"));
    }

    #[test]
    fn error_lists_names() {
        let err = ConfigError::Missing(vec![PRACTICUM_TOKEN, TELEGRAM_CHAT_ID]);
        assert_eq!(
            err.to_string(),
            "unavailable variables: PRACTICUM_TOKEN, TELEGRAM_CHAT_ID"
        );
    }
}
