use crate::traits::{Messenger, ParseMode};
use crate::types::{FetchConfig, Result, UpdateError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use url::Url;

pub const TELEGRAM_API: &str = "https://api.telegram.org/";

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: i64,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parse_mode: Option<&'static str>,
}

#[derive(Debug, Deserialize)]
struct TelegramResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Sends messages through the Telegram Bot API `sendMessage` method
pub struct TelegramMessenger {
    client: Client,
    send_url: Url,
}

impl TelegramMessenger {
    pub fn new(config: &FetchConfig, api_base: Url, token: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        let send_url = api_base.join(&format!("bot{}/sendMessage", token))?;

        Ok(Self { client, send_url })
    }
}

#[async_trait]
impl Messenger for TelegramMessenger {
    async fn send_message(&self, chat_id: i64, text: &str, parse_mode: ParseMode) -> Result<()> {
        let body = SendMessageRequest {
            chat_id,
            text,
            parse_mode: match parse_mode {
                ParseMode::Html => Some("HTML"),
                ParseMode::Plain => None,
            },
        };

        // The bot token is part of the URL, keep it out of error text.
        let response = self
            .client
            .post(self.send_url.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| UpdateError::Http(e.without_url()))?;
        let status = response.status();
        let reply: TelegramResponse = response.json().await.map_err(|e| UpdateError::Delivery {
            chat_id,
            reason: format!("HTTP {}: {}", status, e.without_url()),
        })?;

        if !reply.ok {
            return Err(UpdateError::Delivery {
                chat_id,
                reason: reply.description.unwrap_or_else(|| format!("HTTP {}", status)),
            });
        }

        debug!("Delivered {} bytes to chat {}", text.len(), chat_id);
        Ok(())
    }
}
