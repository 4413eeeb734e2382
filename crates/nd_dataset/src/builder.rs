use std::collections::HashSet;
use std::sync::Arc;

use futures::stream::{self, StreamExt};
use nd_core::{
    ArticleRecord, Dataset, Enricher, Enrichment, Error, RawArticle, Result, Sentiment,
    SentimentModel, UNKNOWN,
};
use nd_feed::FeedClient;
use tracing::{info, warn};

use crate::dates::normalize_timestamp;

const DEFAULT_CONCURRENCY: usize = 8;

/// Which feed query a build should issue.
#[derive(Debug, Clone)]
pub enum FeedQuery {
    /// Headline browse, optionally restricted to a category.
    Category(Option<String>),
    /// Ad-hoc keyword search.
    Keyword(String),
}

/// Parse a requested article count arriving as text. A rejected count aborts
/// the build before any fetch begins.
pub fn parse_article_count(raw: &str) -> Result<usize> {
    let count: usize = raw
        .trim()
        .parse()
        .map_err(|_| Error::InvalidInput(format!("Invalid article count: {:?}", raw)))?;
    if count == 0 {
        return Err(Error::InvalidInput(
            "Article count must be positive".to_string(),
        ));
    }
    Ok(count)
}

/// A record between merge and cleaning; fields still carry their absence.
struct MergedRecord {
    title: Option<String>,
    description: Option<String>,
    source: Option<String>,
    url: String,
    full_content: Option<String>,
    author: Option<String>,
    published_at: String,
}

/// Orchestrates feed fetch, per-article enrichment, cleaning, and sentiment
/// labeling into one immutable dataset per call.
pub struct DatasetBuilder {
    feed: FeedClient,
    enricher: Arc<dyn Enricher>,
    sentiment: Arc<dyn SentimentModel>,
    concurrency: usize,
}

impl DatasetBuilder {
    pub fn new(
        feed: FeedClient,
        enricher: Arc<dyn Enricher>,
        sentiment: Arc<dyn SentimentModel>,
    ) -> Self {
        Self {
            feed,
            enricher,
            sentiment,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Build a fresh dataset. The previous dataset, if any, is the caller's
    /// to discard; nothing is merged across builds.
    pub async fn build(&self, query: &FeedQuery, limit: usize) -> Result<Dataset> {
        if limit == 0 {
            return Err(Error::InvalidInput(
                "Article count must be positive".to_string(),
            ));
        }

        let raw = match query {
            FeedQuery::Category(category) => {
                self.feed
                    .fetch_by_category(category.as_deref(), limit)
                    .await
            }
            FeedQuery::Keyword(keyword) => self.feed.fetch_by_keyword(keyword, limit).await,
        };
        info!("Feed returned {} articles", raw.len());

        let merged = self.enrich_all(raw).await;
        let deduped = dedup(merged);
        let records = deduped.into_iter().map(|r| self.finish(r)).collect();

        Ok(Dataset::new(records))
    }

    /// Enrich every article with a bounded concurrent fan-out. `buffered`
    /// keeps results in fetch order; dedup must see fetch order, not
    /// arrival order.
    async fn enrich_all(&self, raw: Vec<RawArticle>) -> Vec<MergedRecord> {
        let with_urls: Vec<RawArticle> = raw
            .into_iter()
            .filter(|article| match article.url.as_deref() {
                Some(url) if !url.is_empty() => true,
                _ => {
                    warn!("Skipping article with no URL: {:?}", article.title);
                    false
                }
            })
            .collect();

        stream::iter(with_urls)
            .map(|article| async move {
                let url = article.url.clone().unwrap_or_default();
                let enrichment = self.enricher.scrape(&url).await;
                merge(article, enrichment)
            })
            .buffered(self.concurrency)
            .collect()
            .await
    }

    fn finish(&self, record: MergedRecord) -> ArticleRecord {
        let title = fill(record.title);
        let description = fill(record.description);

        let text = format!("{} {}", title, description);
        let sentiment = Sentiment::from_polarity(self.sentiment.polarity(&text));

        ArticleRecord {
            title,
            description,
            source: fill(record.source),
            url: record.url,
            full_content: fill(record.full_content),
            author: fill(record.author),
            published_at: record.published_at,
            sentiment,
        }
    }
}

/// Merge feed metadata with what the article's own page contributed. The
/// page wins for author and date when it has one; the body only ever comes
/// from the page.
fn merge(article: RawArticle, enrichment: Enrichment) -> MergedRecord {
    let page_date = enrichment
        .published_at
        .filter(|d| !d.trim().is_empty());
    let feed_date = article.published_at.filter(|d| !d.trim().is_empty());
    let published_at = normalize_timestamp(page_date.or(feed_date).as_deref());

    let author = enrichment
        .author
        .filter(|a| !a.trim().is_empty())
        .or(article.author);

    MergedRecord {
        title: article.title,
        description: article.description,
        source: article.source.name,
        url: article.url.unwrap_or_default(),
        full_content: enrichment.full_content,
        author,
        published_at,
    }
}

/// First occurrence wins, in fetch order. Absent titles only collide with
/// other absent titles, never with a literal "Unknown".
fn dedup(records: Vec<MergedRecord>) -> Vec<MergedRecord> {
    let mut seen: HashSet<(Option<String>, String)> = HashSet::new();
    let mut result = Vec::with_capacity(records.len());
    for record in records {
        if seen.insert((record.title.clone(), record.url.clone())) {
            result.push(record);
        }
    }
    result
}

fn fill(value: Option<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => UNKNOWN.to_string(),
    }
}
