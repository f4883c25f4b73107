//! Per-feed "last seen" markers and the new-item detection built on them.
//!
//! Executive orders are compared by order number, so their order in the
//! response does not matter. Bill listings are newest-first and are scanned
//! from the front until the remembered bill id shows up.

use crate::types::{Bill, CursorPolicy, ExecutiveOrder};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct OrderCursor {
    feed_name: String,
    policy: CursorPolicy,
    last_seen: Option<u32>,
}

impl OrderCursor {
    pub fn new(feed_name: impl Into<String>, policy: CursorPolicy) -> Self {
        Self {
            feed_name: feed_name.into(),
            policy,
            last_seen: None,
        }
    }

    pub fn feed_name(&self) -> &str {
        &self.feed_name
    }

    pub fn last_seen(&self) -> Option<u32> {
        self.last_seen
    }

    /// Returns the orders numbered above the marker, lowest number first.
    /// The first call only sets the marker and returns nothing.
    pub fn detect_new(&mut self, orders: Vec<ExecutiveOrder>) -> Vec<ExecutiveOrder> {
        let Some(marker) = self.last_seen else {
            self.last_seen = match self.policy {
                CursorPolicy::Legacy => orders.first().map(|o| o.executive_order_number),
                CursorPolicy::Advance => orders.iter().map(|o| o.executive_order_number).max(),
            };
            debug!("Initialized {} cursor at {:?}", self.feed_name, self.last_seen);
            return Vec::new();
        };

        let mut fresh: Vec<ExecutiveOrder> = orders
            .into_iter()
            .filter(|o| o.executive_order_number > marker)
            .collect();
        fresh.sort_by_key(|o| o.executive_order_number);
        fresh.dedup_by_key(|o| o.executive_order_number);

        if self.policy == CursorPolicy::Advance {
            if let Some(newest) = fresh.last() {
                self.last_seen = Some(newest.executive_order_number);
            }
        }

        fresh
    }
}

#[derive(Debug, Clone)]
pub struct BillCursor {
    feed_name: String,
    policy: CursorPolicy,
    last_seen: Option<String>,
}

impl BillCursor {
    pub fn new(feed_name: impl Into<String>, policy: CursorPolicy) -> Self {
        Self {
            feed_name: feed_name.into(),
            policy,
            last_seen: None,
        }
    }

    pub fn feed_name(&self) -> &str {
        &self.feed_name
    }

    pub fn last_seen(&self) -> Option<&str> {
        self.last_seen.as_deref()
    }

    /// Takes a newest-first listing and returns the bills ahead of the marker,
    /// oldest first. Without a match the whole listing counts as new.
    pub fn detect_new(&mut self, bills: Vec<Bill>) -> Vec<Bill> {
        let newest = bills.first().map(|b| b.bill_id.clone());

        let Some(marker) = self.last_seen.clone() else {
            self.last_seen = newest;
            debug!("Initialized {} cursor at {:?}", self.feed_name, self.last_seen);
            return Vec::new();
        };

        let mut fresh: Vec<Bill> = bills
            .into_iter()
            .take_while(|b| b.bill_id != marker)
            .collect();
        fresh.reverse();

        if self.policy == CursorPolicy::Advance && newest.is_some() {
            self.last_seen = newest;
        }

        fresh
    }
}
