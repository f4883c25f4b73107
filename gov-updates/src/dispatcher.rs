use crate::event::{GovUpdate, UpdateReceiver};
use crate::formatter::{self, RenderedMessage, CONNECTED_NOTICE};
use crate::traits::{Messenger, ParseMode};
use std::sync::Arc;
use tracing::{info, warn};

/// Chat ids that receive every update, in delivery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriberSet(Arc<[i64]>);

impl SubscriberSet {
    pub fn new(chat_ids: Vec<i64>) -> Self {
        Self(chat_ids.into())
    }

    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryReport {
    pub attempted: usize,
    pub failed: usize,
}

/// Single consumer of the update channel; renders each update and fans it out.
pub struct Dispatcher {
    messenger: Arc<dyn Messenger>,
    subscribers: SubscriberSet,
}

impl Dispatcher {
    pub fn new(messenger: Arc<dyn Messenger>, subscribers: SubscriberSet) -> Self {
        Self { messenger, subscribers }
    }

    pub async fn announce_online(&self) -> DeliveryReport {
        let message = RenderedMessage {
            text: CONNECTED_NOTICE.to_string(),
            parse_mode: ParseMode::Plain,
        };
        self.deliver(&message).await
    }

    pub async fn dispatch(&self, update: &GovUpdate) -> DeliveryReport {
        let message = formatter::render(update);
        let report = self.deliver(&message).await;

        info!(
            "Dispatched {} to {}/{} chats",
            update.kind(),
            report.attempted - report.failed,
            report.attempted
        );
        report
    }

    /// Every subscriber gets an attempt, whatever happened to the previous ones.
    async fn deliver(&self, message: &RenderedMessage) -> DeliveryReport {
        let mut report = DeliveryReport::default();

        for chat_id in self.subscribers.iter() {
            report.attempted += 1;
            if let Err(e) = self
                .messenger
                .send_message(chat_id, &message.text, message.parse_mode)
                .await
            {
                report.failed += 1;
                warn!("Failed to deliver to chat {}: {}", chat_id, e);
            }
        }

        report
    }

    /// Runs until every sender has been dropped.
    pub async fn run(self, mut updates: UpdateReceiver) {
        info!("Dispatcher started for {} chats", self.subscribers.len());
        self.announce_online().await;

        while let Some(update) = updates.recv().await {
            self.dispatch(&update).await;
        }

        info!("Update channel closed, dispatcher stopping");
    }
}
