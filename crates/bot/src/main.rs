use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use homework_bot::{logging, practicum, telegram, Settings};
use homework_core::config::Credentials;

#[derive(Parser)]
#[command(name = "homework-bot", version, about = "Relays homework review status changes to Telegram")]
struct Cli {
    /// Review API OAuth token.
    #[arg(long, env = "PRACTICUM_TOKEN", hide_env_values = true)]
    practicum_token: Option<String>,

    /// Telegram bot token.
    #[arg(long, env = "TELEGRAM_TOKEN", hide_env_values = true)]
    telegram_token: Option<String>,

    /// Chat that receives the notifications.
    #[arg(long, env = "TELEGRAM_CHAT_ID")]
    telegram_chat_id: Option<String>,

    /// Review API endpoint.
    #[arg(long, default_value = practicum::DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Telegram Bot API base URL.
    #[arg(long, default_value = telegram::DEFAULT_API_URL)]
    telegram_api_url: String,

    /// Delay between cycles, after success and failure alike.
    #[arg(long, default_value_t = 600)]
    poll_interval_seconds: u64,

    /// Per-request HTTP timeout.
    #[arg(long, default_value_t = 30)]
    request_timeout_seconds: u64,

    /// Initial cursor in epoch seconds. Defaults to now; 0 replays history.
    #[arg(long)]
    from_date: Option<i64>,

    /// Run one cycle and exit, non-zero if it failed.
    #[arg(long)]
    once: bool,

    /// Log file, appended to.
    #[arg(long, default_value = "main.log")]
    log_file: PathBuf,

    /// Log level (env-filter syntax).
    #[arg(long, default_value = "info")]
    log: String,
}

impl Cli {
    fn into_settings(self) -> Settings {
        Settings {
            credentials: Credentials {
                practicum_token: self.practicum_token,
                telegram_token: self.telegram_token,
                telegram_chat_id: self.telegram_chat_id,
            },
            endpoint: self.endpoint,
            telegram_api_url: self.telegram_api_url,
            poll_interval: Duration::from_secs(self.poll_interval_seconds),
            request_timeout: Duration::from_secs(self.request_timeout_seconds),
            from_date: self.from_date,
            once: self.once,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let _guard = logging::init(&cli.log, &cli.log_file)?;
    homework_bot::run(cli.into_settings()).await
}
