use crate::types::{FetchConfig, Result, UpdateError};
use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode};
use std::time::{Duration, Instant};
use tracing::{debug, info};
use url::Url;

/// Thin HTTP wrapper shared by the feed sources. One call is one round trip.
#[derive(Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .build()?;

        Ok(Self { client })
    }

    pub async fn get_text(&self, url: Url, headers: HeaderMap) -> Result<String> {
        let start_time = Instant::now();
        debug!("Fetching: {}", url);

        let response = self.client.get(url.clone()).headers(headers).send().await?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(UpdateError::RateLimited { url: redact(&url) });
        }
        if !status.is_success() {
            return Err(UpdateError::HttpStatus {
                status: status.as_u16(),
                url: redact(&url),
            });
        }

        let content = response.text().await?;
        info!(
            "Fetched {} ({} bytes in {}ms)",
            url.path(),
            content.len(),
            start_time.elapsed().as_millis()
        );
        Ok(content)
    }
}

/// URL without its query string, for error text that reaches subscribers.
fn redact(url: &Url) -> String {
    let mut url = url.clone();
    url.set_query(None);
    url.to_string()
}
