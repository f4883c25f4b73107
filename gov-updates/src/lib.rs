pub mod config;
pub mod cursor;
pub mod dispatcher;
pub mod event;
pub mod fetcher;
pub mod formatter;
pub mod messenger;
pub mod parser;
pub mod poller;
pub mod sources;
pub mod traits;
pub mod types;

pub use types::*;
pub use config::Config;
pub use cursor::{BillCursor, OrderCursor};
pub use dispatcher::{DeliveryReport, Dispatcher, SubscriberSet};
pub use event::{update_channel, GovUpdate, UpdateReceiver, UpdateSender};
pub use fetcher::Fetcher;
pub use messenger::TelegramMessenger;
pub use parser::FeedParser;
pub use poller::{BillPoller, CycleReport, ExecutiveOrderPoller, Schedule};
pub use sources::{BillSource, ExecutiveOrderSource};
pub use traits::{Messenger, ParseMode, PullFeed};
