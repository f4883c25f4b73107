use crate::types::{Bill, BillsResponse, Chamber, ExecutiveOrder, ExecutiveOrderResponse, Result, UpdateError};
use tracing::debug;

/// Status value ProPublica returns on a successful request
pub const PROPUBLICA_OK_STATUS: &str = "OK";

/// Turns raw feed payloads into domain records.
pub struct FeedParser;

impl FeedParser {
    pub fn parse_executive_orders(content: &str) -> Result<Vec<ExecutiveOrder>> {
        debug!("Parsing executive order payload ({} bytes)", content.len());

        let response: ExecutiveOrderResponse = serde_json::from_str(content)?;
        if response.results.is_empty() {
            return Err(UpdateError::MissingRecords {
                feed: "executive orders".to_string(),
            });
        }

        Ok(response.results)
    }

    /// Bills come back newest-first inside the first result page.
    pub fn parse_bills(chamber: Chamber, content: &str) -> Result<Vec<Bill>> {
        debug!("Parsing {} bill payload ({} bytes)", chamber, content.len());

        let response: BillsResponse = serde_json::from_str(content)?;
        if response.status != PROPUBLICA_OK_STATUS {
            return Err(UpdateError::FeedStatus {
                feed: format!("{} bill", chamber),
                status: response.status,
            });
        }

        let bills = response
            .results
            .into_iter()
            .next()
            .map(|page| page.bills)
            .unwrap_or_default();

        if bills.is_empty() {
            return Err(UpdateError::MissingRecords {
                feed: format!("{} bills", chamber),
            });
        }

        Ok(bills)
    }
}
