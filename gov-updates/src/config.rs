use crate::event::DEFAULT_CHANNEL_CAPACITY;
use crate::messenger::TELEGRAM_API;
use crate::poller::{BILL_INTERVAL, EXECUTIVE_ORDER_INTERVAL};
use crate::sources::bills::PROPUBLICA_API;
use crate::sources::executive_orders::{DEFAULT_PRESIDENT, FEDERAL_REGISTER_API};
use crate::types::{CursorPolicy, FetchConfig, Result, UpdateError};
use clap::Parser;
use std::time::Duration;
use url::Url;

/// Longest poll interval accepted; backoff multiplies it further.
pub const MAX_POLL_INTERVAL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Posts new executive orders and bill updates to Telegram chats
#[derive(Debug, Clone, Parser)]
#[command(name = "gov-updates", version)]
pub struct Config {
    /// Telegram bot API token
    #[arg(short, long, env = "TELEGRAM_TOKEN", hide_env_values = true)]
    pub token: String,

    /// ProPublica Congress API key
    #[arg(long = "congress-key", env = "PROPUBLICA_API_KEY", hide_env_values = true)]
    pub congress_key: String,

    /// Session of Congress
    #[arg(long, env = "CONGRESS_SESSION", default_value_t = 115)]
    pub session: u32,

    /// Chats to send updates to
    #[arg(long, env = "UPDATE_CHATS", value_delimiter = ',', allow_negative_numbers = true)]
    pub chats: Vec<i64>,

    /// Federal Register slug of the president whose orders are followed
    #[arg(long, env = "PRESIDENT", default_value = DEFAULT_PRESIDENT)]
    pub president: String,

    #[arg(long, default_value_t = EXECUTIVE_ORDER_INTERVAL.as_secs())]
    pub order_interval_secs: u64,

    #[arg(long, default_value_t = BILL_INTERVAL.as_secs())]
    pub bill_interval_secs: u64,

    #[arg(long, default_value_t = DEFAULT_CHANNEL_CAPACITY)]
    pub channel_capacity: usize,

    /// Whether feed cursors move forward after each poll
    #[arg(long, value_enum, default_value = "advance")]
    pub cursor_policy: CursorPolicy,

    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    #[arg(long, default_value = TELEGRAM_API)]
    pub telegram_api: String,

    #[arg(long, default_value = FEDERAL_REGISTER_API)]
    pub federal_register_api: String,

    #[arg(long, default_value = PROPUBLICA_API)]
    pub propublica_api: String,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.token.trim().is_empty() {
            return Err(UpdateError::Config("Missing Telegram bot token".to_string()));
        }
        if self.congress_key.trim().is_empty() {
            return Err(UpdateError::Config("Missing ProPublica API key".to_string()));
        }
        if self.order_interval_secs == 0 || self.bill_interval_secs == 0 {
            return Err(UpdateError::Config("Poll intervals must be positive".to_string()));
        }
        if self.order_interval() > MAX_POLL_INTERVAL || self.bill_interval() > MAX_POLL_INTERVAL {
            return Err(UpdateError::Config(format!(
                "Poll intervals must not exceed {} seconds",
                MAX_POLL_INTERVAL.as_secs()
            )));
        }
        if self.channel_capacity == 0 {
            return Err(UpdateError::Config("Channel capacity must be positive".to_string()));
        }
        Ok(())
    }

    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            timeout_seconds: self.timeout_secs,
            ..FetchConfig::default()
        }
    }

    pub fn order_interval(&self) -> Duration {
        Duration::from_secs(self.order_interval_secs)
    }

    pub fn bill_interval(&self) -> Duration {
        Duration::from_secs(self.bill_interval_secs)
    }

    pub fn session_name(&self) -> String {
        self.session.to_string()
    }
}

/// Parses an API base URL, adding the trailing slash `Url::join` needs.
pub fn api_base(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
