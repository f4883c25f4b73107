use crate::traits::PullFeed;
use crate::types::{ExecutiveOrder, Result};
use crate::{FeedParser, Fetcher};
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use tracing::info;
use url::Url;

pub const FEDERAL_REGISTER_API: &str = "https://www.federalregister.gov/api/v1/";
pub const DEFAULT_PRESIDENT: &str = "donald-trump";

/// Fields requested from the Federal Register, matching `ExecutiveOrder`.
const REQUESTED_FIELDS: [&str; 6] = [
    "executive_order_notes",
    "executive_order_number",
    "html_url",
    "publication_date",
    "signing_date",
    "title",
];

/// Ten most recent executive orders from the Federal Register documents API
pub struct ExecutiveOrderSource {
    fetcher: Fetcher,
    base_url: Url,
    president: String,
}

impl ExecutiveOrderSource {
    pub fn new(fetcher: Fetcher, base_url: Url) -> Self {
        Self {
            fetcher,
            base_url,
            president: DEFAULT_PRESIDENT.to_string(),
        }
    }

    pub fn with_president(mut self, president: impl Into<String>) -> Self {
        self.president = president.into();
        self
    }

    pub fn request_url(&self) -> Result<Url> {
        let mut url = self.base_url.join("documents.json")?;
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("conditions[correction]", "0")
                .append_pair("conditions[president]", &self.president)
                .append_pair("conditions[presidential_document_type_id]", "2")
                .append_pair("conditions[type]", "PRESDOCU");
            for field in REQUESTED_FIELDS {
                query.append_pair("fields[]", field);
            }
            query.append_pair("per_page", "10");
        }
        Ok(url)
    }
}

#[async_trait]
impl PullFeed for ExecutiveOrderSource {
    type Record = ExecutiveOrder;

    fn source_name(&self) -> String {
        "executive orders".to_string()
    }

    async fn pull(&self) -> Result<Vec<ExecutiveOrder>> {
        let content = self.fetcher.get_text(self.request_url()?, HeaderMap::new()).await?;
        let orders = FeedParser::parse_executive_orders(&content)?;

        info!("Pulled {} executive orders", orders.len());
        Ok(orders)
    }
}
