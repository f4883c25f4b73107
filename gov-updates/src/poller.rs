use crate::cursor::{BillCursor, OrderCursor};
use crate::event::{GovUpdate, UpdateSender};
use crate::traits::PullFeed;
use crate::types::{Bill, CursorPolicy, ExecutiveOrder, UpdateError};
use backoff::backoff::Backoff;
use backoff::ExponentialBackoff;
use std::time::Duration;
use tracing::{error, info, warn};

pub const EXECUTIVE_ORDER_INTERVAL: Duration = Duration::from_secs(60 * 60);
pub const BILL_INTERVAL: Duration = Duration::from_secs(20 * 60);

/// Fixed sleep between cycles, stretched exponentially while a feed keeps rate limiting us.
pub struct Schedule {
    interval: Duration,
    backoff: ExponentialBackoff,
}

impl Schedule {
    pub fn new(interval: Duration) -> Self {
        let backoff = ExponentialBackoff {
            current_interval: interval.saturating_mul(2),
            initial_interval: interval.saturating_mul(2),
            randomization_factor: 0.0,
            multiplier: 2.0,
            max_interval: interval.saturating_mul(16),
            max_elapsed_time: None,
            ..Default::default()
        };

        Self { interval, backoff }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn next_delay(&mut self, rate_limited: bool) -> Duration {
        if !rate_limited {
            self.backoff.reset();
            return self.interval;
        }

        let delay = self.backoff.next_backoff().unwrap_or(self.backoff.max_interval);
        warn!("Rate limited, sleeping {:?} instead of {:?}", delay, self.interval);
        delay
    }
}

/// What one poll cycle did
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CycleReport {
    pub emitted: usize,
    pub failures: usize,
    pub rate_limited: bool,
}

impl CycleReport {
    fn record_failure(&mut self, err: &UpdateError) {
        self.failures += 1;
        self.rate_limited |= err.is_rate_limited();
    }
}

async fn emit<T: Into<GovUpdate>>(updates: &UpdateSender, items: Vec<T>) -> usize {
    let mut sent = 0;
    for item in items {
        if updates.send(item.into()).await.is_err() {
            warn!("Update channel closed, dropping remaining items");
            break;
        }
        sent += 1;
    }
    sent
}

async fn report_failure(updates: &UpdateSender, source_name: &str, err: &UpdateError) {
    error!("Error while getting {}: {}", source_name, err);
    let notice = GovUpdate::service(format!("Error while getting {}: {}", source_name, err));
    if updates.send(notice).await.is_err() {
        warn!("Update channel closed, dropping service message for {}", source_name);
    }
}

pub struct ExecutiveOrderPoller<S> {
    source: S,
    cursor: OrderCursor,
    schedule: Schedule,
}

impl<S> ExecutiveOrderPoller<S>
where
    S: PullFeed<Record = ExecutiveOrder>,
{
    pub fn new(source: S, policy: CursorPolicy, interval: Duration) -> Self {
        let cursor = OrderCursor::new(source.source_name(), policy);
        Self {
            source,
            cursor,
            schedule: Schedule::new(interval),
        }
    }

    pub fn cursor(&self) -> &OrderCursor {
        &self.cursor
    }

    pub async fn poll_once(&mut self, updates: &UpdateSender) -> CycleReport {
        let mut report = CycleReport::default();

        match self.source.pull().await {
            Ok(orders) => {
                let fresh = self.cursor.detect_new(orders);
                info!("Found {} new {}", fresh.len(), self.cursor.feed_name());
                report.emitted = emit(updates, fresh).await;
            }
            Err(e) => {
                report.record_failure(&e);
                report_failure(updates, self.cursor.feed_name(), &e).await;
            }
        }

        report
    }

    pub async fn run(mut self, updates: UpdateSender) {
        info!(
            "Polling {} every {:?}",
            self.source.source_name(),
            self.schedule.interval()
        );

        loop {
            let report = self.poll_once(&updates).await;
            if updates.is_closed() {
                info!("Update channel closed, stopping {} poller", self.cursor.feed_name());
                break;
            }
            tokio::time::sleep(self.schedule.next_delay(report.rate_limited)).await;
        }
    }
}

struct ChamberFeed<S> {
    source: S,
    cursor: BillCursor,
}

/// Polls several bill listings back-to-back within one cycle, each with its own cursor.
pub struct BillPoller<S> {
    feeds: Vec<ChamberFeed<S>>,
    schedule: Schedule,
}

impl<S> BillPoller<S>
where
    S: PullFeed<Record = Bill>,
{
    pub fn new(sources: Vec<S>, policy: CursorPolicy, interval: Duration) -> Self {
        let feeds = sources
            .into_iter()
            .map(|source| {
                let cursor = BillCursor::new(source.source_name(), policy);
                ChamberFeed { source, cursor }
            })
            .collect();

        Self {
            feeds,
            schedule: Schedule::new(interval),
        }
    }

    pub fn cursors(&self) -> impl Iterator<Item = &BillCursor> {
        self.feeds.iter().map(|feed| &feed.cursor)
    }

    pub async fn poll_once(&mut self, updates: &UpdateSender) -> CycleReport {
        let mut report = CycleReport::default();

        for feed in &mut self.feeds {
            match feed.source.pull().await {
                Ok(bills) => {
                    let fresh = feed.cursor.detect_new(bills);
                    info!("Found {} new {}", fresh.len(), feed.cursor.feed_name());
                    report.emitted += emit(updates, fresh).await;
                }
                Err(e) => {
                    report.record_failure(&e);
                    report_failure(updates, feed.cursor.feed_name(), &e).await;
                }
            }
        }

        report
    }

    pub async fn run(mut self, updates: UpdateSender) {
        let names = self
            .cursors()
            .map(|c| c.feed_name())
            .collect::<Vec<_>>()
            .join(", ");
        info!("Polling {} every {:?}", names, self.schedule.interval());

        loop {
            let report = self.poll_once(&updates).await;
            if updates.is_closed() {
                info!("Update channel closed, stopping bill poller");
                break;
            }
            tokio::time::sleep(self.schedule.next_delay(report.rate_limited)).await;
        }
    }
}
