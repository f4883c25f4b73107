use crate::traits::PullFeed;
use crate::types::{Bill, Chamber, Result, UpdateError};
use crate::{FeedParser, Fetcher};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::info;
use url::Url;

pub const PROPUBLICA_API: &str = "https://api.propublica.org/congress/v1/";
pub const PROPUBLICA_KEY_HEADER: &str = "x-api-key";

/// Recently updated bills for one chamber of one congress
pub struct BillSource {
    fetcher: Fetcher,
    base_url: Url,
    api_key: String,
    session: String,
    chamber: Chamber,
}

impl BillSource {
    pub fn new(
        fetcher: Fetcher,
        base_url: Url,
        api_key: impl Into<String>,
        session: impl Into<String>,
        chamber: Chamber,
    ) -> Self {
        Self {
            fetcher,
            base_url,
            api_key: api_key.into(),
            session: session.into(),
            chamber,
        }
    }

    pub fn senate(fetcher: Fetcher, base_url: Url, api_key: &str, session: &str) -> Self {
        Self::new(fetcher, base_url, api_key, session, Chamber::Senate)
    }

    pub fn house(fetcher: Fetcher, base_url: Url, api_key: &str, session: &str) -> Self {
        Self::new(fetcher, base_url, api_key, session, Chamber::House)
    }

    pub fn request_url(&self) -> Result<Url> {
        let path = format!("{}/{}/bills/updated.json", self.session, self.chamber.as_path());
        Ok(self.base_url.join(&path)?)
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(&self.api_key)
            .map_err(|_| UpdateError::Config("ProPublica API key is not a valid header value".to_string()))?;
        headers.insert(PROPUBLICA_KEY_HEADER, key);
        Ok(headers)
    }
}

#[async_trait]
impl PullFeed for BillSource {
    type Record = Bill;

    fn source_name(&self) -> String {
        format!("{} bills", self.chamber)
    }

    async fn pull(&self) -> Result<Vec<Bill>> {
        let content = self.fetcher.get_text(self.request_url()?, self.headers()?).await?;
        let bills = FeedParser::parse_bills(self.chamber, &content)?;

        info!("Pulled {} {} bills", bills.len(), self.chamber);
        Ok(bills)
    }
}
