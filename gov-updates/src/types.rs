use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Presidential document as published by the Federal Register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutiveOrder {
    pub title: String,
    pub executive_order_number: u32,
    #[serde(default)]
    pub signing_date: Option<String>,
    #[serde(default)]
    pub publication_date: Option<String>,
    #[serde(default)]
    pub executive_order_notes: Option<String>,
    pub html_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutiveOrderResponse {
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub next_page_url: Option<String>,
    #[serde(default)]
    pub results: Vec<ExecutiveOrder>,
}

/// A bill record from the ProPublica "recently updated bills" listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub bill_id: String,
    #[serde(default)]
    pub bill_type: Option<String>,
    pub number: String,
    #[serde(default)]
    pub bill_uri: Option<String>,
    pub title: String,
    #[serde(default)]
    pub sponsor_id: Option<String>,
    #[serde(default)]
    pub sponsor_uri: Option<String>,
    #[serde(default)]
    pub gpo_pdf_uri: Option<String>,
    #[serde(default)]
    pub congressdotgov_url: Option<String>,
    #[serde(default)]
    pub govtrack_url: Option<String>,
    #[serde(default)]
    pub introduced_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub active: Option<String>,
    #[serde(default)]
    pub house_passage: Option<String>,
    #[serde(default)]
    pub senate_passage: Option<String>,
    #[serde(default)]
    pub enacted: Option<String>,
    #[serde(default)]
    pub vetoed: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub cosponsors: Option<String>,
    #[serde(default)]
    pub committees: Option<String>,
    #[serde(default)]
    pub primary_subject: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub summary_short: Option<String>,
    #[serde(default)]
    pub latest_major_action_date: Option<String>,
    #[serde(default)]
    pub latest_major_action: Option<String>,
}

impl Bill {
    /// Best link to show a reader, falling back through the URLs ProPublica provides.
    pub fn link(&self) -> Option<&str> {
        self.govtrack_url
            .as_deref()
            .or(self.congressdotgov_url.as_deref())
            .or(self.bill_uri.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillsResponse {
    pub status: String,
    #[serde(default)]
    pub copyright: Option<String>,
    #[serde(default)]
    pub results: Vec<BillsPage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillsPage {
    #[serde(default, deserialize_with = "lenient_string")]
    pub congress: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub chamber: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub num_results: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub offset: Option<String>,
    #[serde(default)]
    pub bills: Vec<Bill>,
}

/// Keeps a scalar as text whether ProPublica sent it as a string, number or bool.
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chamber {
    Senate,
    House,
}

impl Chamber {
    pub fn as_path(&self) -> &'static str {
        match self {
            Chamber::Senate => "senate",
            Chamber::House => "house",
        }
    }
}

impl std::fmt::Display for Chamber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_path())
    }
}

/// Free-text notice about the service itself, e.g. a failing feed.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceMessage {
    pub message: String,
    pub time: DateTime<Utc>,
}

impl ServiceMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            time: Utc::now(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "gov-updates/0.1".to_string(),
            timeout_seconds: 30,
        }
    }
}

/// Whether a cursor moves forward after each successful poll or stays at its first value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum CursorPolicy {
    #[default]
    Advance,
    Legacy,
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Rate limited by {url}")]
    RateLimited { url: String },

    #[error("{feed} GET failed: {status}")]
    FeedStatus { feed: String, status: String },

    #[error("Missing {feed}")]
    MissingRecords { feed: String },

    #[error("Feed parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Delivery to chat {chat_id} failed: {reason}")]
    Delivery { chat_id: i64, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl UpdateError {
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, UpdateError::RateLimited { .. })
    }
}

pub type Result<T> = std::result::Result<T, UpdateError>;
