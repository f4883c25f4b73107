use crate::types::{Bill, ExecutiveOrder, ServiceMessage};
use tokio::sync::mpsc;

/// Enough slots for a full cycle of every feed with room to spare.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Everything a poller can hand to the dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub enum GovUpdate {
    ExecutiveOrder(ExecutiveOrder),
    Bill(Bill),
    ServiceMessage(ServiceMessage),
}

impl GovUpdate {
    pub fn service(message: impl Into<String>) -> Self {
        GovUpdate::ServiceMessage(ServiceMessage::new(message))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            GovUpdate::ExecutiveOrder(_) => "executive_order",
            GovUpdate::Bill(_) => "bill",
            GovUpdate::ServiceMessage(_) => "service_message",
        }
    }
}

impl From<ExecutiveOrder> for GovUpdate {
    fn from(order: ExecutiveOrder) -> Self {
        GovUpdate::ExecutiveOrder(order)
    }
}

impl From<Bill> for GovUpdate {
    fn from(bill: Bill) -> Self {
        GovUpdate::Bill(bill)
    }
}

pub type UpdateSender = mpsc::Sender<GovUpdate>;
pub type UpdateReceiver = mpsc::Receiver<GovUpdate>;

/// Bounded channel between the pollers and the dispatcher. Senders wait when it is full.
pub fn update_channel(capacity: usize) -> (UpdateSender, UpdateReceiver) {
    mpsc::channel(capacity)
}
