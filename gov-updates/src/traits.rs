use crate::types::Result;
use async_trait::async_trait;

/// Trait for pulling records from a government data source
#[async_trait]
pub trait PullFeed: Send + Sync {
    type Record: Send + 'static;

    /// Human-readable name used in logs and service messages
    fn source_name(&self) -> String;

    /// Fetch the source's current listing with one request.
    /// Detecting which records are new is left to the caller's cursor.
    async fn pull(&self) -> Result<Vec<Self::Record>>;
}

/// Output format hint passed along with a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    Plain,
    Html,
}

/// Delivery side: anything that can post text to a chat
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send_message(&self, chat_id: i64, text: &str, parse_mode: ParseMode) -> Result<()>;
}
