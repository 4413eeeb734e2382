use std::time::Duration;

use async_trait::async_trait;
use nd_core::{Enricher, Enrichment, Error, Result};
use reqwest::Client;
use tracing::warn;
use url::Url;

pub mod extract;
pub mod jsonld;

const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Enricher that downloads the article's own page and parses body text,
/// author, and publish date out of it.
pub struct ArticleScraper {
    http: Client,
}

impl ArticleScraper {
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent("nd/0.1")
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { http }
    }

    async fn fetch_and_parse(&self, url: &str) -> Result<Enrichment> {
        Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{}: {}", url, e)))?;

        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(Error::Scraping(format!(
                "{} returned status {}",
                url,
                response.status()
            )));
        }

        let html = response.text().await?;
        // `Html` is not Send; parse only after the last await.
        Ok(extract::parse_page(&html))
    }
}

impl Default for ArticleScraper {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Enricher for ArticleScraper {
    async fn scrape(&self, url: &str) -> Enrichment {
        match self.fetch_and_parse(url).await {
            Ok(enrichment) => enrichment,
            Err(e) => {
                warn!("Error scraping {}: {}", url, e);
                Enrichment::default()
            }
        }
    }
}

pub mod prelude {
    pub use super::ArticleScraper;
    pub use nd_core::{Enricher, Enrichment};
}
