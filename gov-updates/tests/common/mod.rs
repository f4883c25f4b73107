#![allow(dead_code)]

use async_trait::async_trait;
use gov_updates::{Bill, ExecutiveOrder, Messenger, ParseMode, PullFeed, Result, UpdateError};
use std::collections::{HashSet, VecDeque};
use std::sync::{Mutex, Once};

static INIT: Once = Once::new();

pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .try_init()
            .ok();
    });
}

pub fn order(number: u32) -> ExecutiveOrder {
    ExecutiveOrder {
        title: format!("Executive Order {}", number),
        executive_order_number: number,
        signing_date: Some("2017-03-06".to_string()),
        publication_date: Some("2017-03-09".to_string()),
        executive_order_notes: None,
        html_url: format!("https://www.federalregister.gov/documents/eo-{}", number),
    }
}

pub fn bill(id: &str) -> Bill {
    Bill {
        bill_id: id.to_string(),
        bill_type: Some("s".to_string()),
        number: id.to_uppercase(),
        bill_uri: None,
        title: format!("A bill named {}", id),
        sponsor_id: Some("S000033".to_string()),
        sponsor_uri: None,
        gpo_pdf_uri: None,
        congressdotgov_url: None,
        govtrack_url: Some(format!("https://www.govtrack.us/congress/bills/115/{}", id)),
        introduced_date: Some("2017-03-01".to_string()),
        active: Some("true".to_string()),
        house_passage: None,
        senate_passage: None,
        enacted: None,
        vetoed: None,
        cosponsors: Some("0".to_string()),
        committees: None,
        primary_subject: None,
        summary: None,
        summary_short: None,
        latest_major_action_date: Some("2017-03-02".to_string()),
        latest_major_action: Some("Read twice and referred to committee.".to_string()),
    }
}

pub fn ids(bills: &[Bill]) -> Vec<&str> {
    bills.iter().map(|b| b.bill_id.as_str()).collect()
}

pub fn numbers(orders: &[ExecutiveOrder]) -> Vec<u32> {
    orders.iter().map(|o| o.executive_order_number).collect()
}

/// Feed that replays a fixed sequence of pull results, then keeps failing.
pub struct ScriptedFeed<R> {
    name: String,
    responses: Mutex<VecDeque<Result<Vec<R>>>>,
}

impl<R> ScriptedFeed<R> {
    pub fn new(name: &str, responses: Vec<Result<Vec<R>>>) -> Self {
        Self {
            name: name.to_string(),
            responses: Mutex::new(responses.into()),
        }
    }
}

#[async_trait]
impl<R: Send + 'static> PullFeed for ScriptedFeed<R> {
    type Record = R;

    fn source_name(&self) -> String {
        self.name.clone()
    }

    async fn pull(&self) -> Result<Vec<R>> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(UpdateError::MissingRecords { feed: self.name.clone() }))
    }
}

/// Messenger that records every attempt and fails for selected chats.
#[derive(Default)]
pub struct RecordingMessenger {
    failing: HashSet<i64>,
    sent: Mutex<Vec<(i64, String, ParseMode)>>,
}

impl RecordingMessenger {
    pub fn failing_for(chat_ids: &[i64]) -> Self {
        Self {
            failing: chat_ids.iter().copied().collect(),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn attempts(&self) -> Vec<(i64, String, ParseMode)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn attempted_chats(&self) -> Vec<i64> {
        self.attempts().into_iter().map(|(chat_id, _, _)| chat_id).collect()
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send_message(&self, chat_id: i64, text: &str, parse_mode: ParseMode) -> Result<()> {
        self.sent.lock().unwrap().push((chat_id, text.to_string(), parse_mode));
        if self.failing.contains(&chat_id) {
            return Err(UpdateError::Delivery {
                chat_id,
                reason: "Forbidden: bot was blocked by the user".to_string(),
            });
        }
        Ok(())
    }
}
