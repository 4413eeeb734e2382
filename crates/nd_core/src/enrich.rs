use async_trait::async_trait;

use crate::types::Enrichment;

#[async_trait]
pub trait Enricher: Send + Sync {
    /// Visit the article page at `url` and pull out what it offers. Never
    /// fails: an unreachable or unparseable page yields the empty value and
    /// a logged diagnostic, so one bad article cannot sink a batch.
    async fn scrape(&self, url: &str) -> Enrichment;
}
