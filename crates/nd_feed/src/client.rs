use std::sync::Arc;
use std::time::Duration;

use nd_core::{CacheStore, Error, RawArticle, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::{info, warn};

/// Cache key used for headline queries with no category.
pub const KEYWORD_CACHE_KEY: &str = "keyword";

const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";
const DEFAULT_FRESHNESS_SECS: u64 = 3600;
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub api_key: String,
    pub base_url: String,
    pub freshness: Duration,
    pub timeout: Duration,
}

impl FeedConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            freshness: Duration::from_secs(DEFAULT_FRESHNESS_SECS),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_freshness(mut self, freshness: Duration) -> Self {
        self.freshness = freshness;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Default, Deserialize)]
struct FeedResponse {
    #[serde(default)]
    articles: Vec<RawArticle>,
}

/// Client for the remote headline feed. Fetch failures degrade to an empty
/// article list; an empty dataset is a reportable outcome, not an error.
pub struct FeedClient {
    http: Client,
    config: FeedConfig,
    cache: Arc<dyn CacheStore>,
}

impl FeedClient {
    pub fn new(config: FeedConfig, cache: Arc<dyn CacheStore>) -> Self {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent("nd/0.1")
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { http, config, cache }
    }

    /// Headline browse. A cached response younger than the freshness window
    /// is returned verbatim, truncated to `limit`; otherwise the feed is hit
    /// live and the full response overwrites the cache entry.
    pub async fn fetch_by_category(&self, category: Option<&str>, limit: usize) -> Vec<RawArticle> {
        let category = category.filter(|c| !c.is_empty());
        let key = category.unwrap_or(KEYWORD_CACHE_KEY);

        match self.cache.get(key, self.config.freshness).await {
            Ok(Some(mut articles)) => {
                info!("Loading cached articles for {}", key);
                articles.truncate(limit);
                return articles;
            }
            Ok(None) => {}
            Err(e) => warn!("Cache read failed for {}: {}", key, e),
        }

        let url = format!("{}/top-headlines", self.config.base_url);
        let mut params: Vec<(&str, String)> = vec![
            ("apiKey", self.config.api_key.clone()),
            ("pageSize", limit.to_string()),
        ];
        if let Some(c) = category {
            params.push(("category", c.to_string()));
        }

        let articles = match self.fetch_live(&url, &params).await {
            Ok(articles) => articles,
            Err(e) => {
                warn!("Error fetching news: {}", e);
                return Vec::new();
            }
        };

        if let Err(e) = self.cache.put(key, &articles).await {
            warn!("Cache write failed for {}: {}", key, e);
        }

        let mut articles = articles;
        articles.truncate(limit);
        articles
    }

    /// Ad-hoc search. Always live; the freshness cache is never consulted,
    /// in either direction.
    pub async fn fetch_by_keyword(&self, keyword: &str, limit: usize) -> Vec<RawArticle> {
        let url = format!("{}/everything", self.config.base_url);
        let params: Vec<(&str, String)> = vec![
            ("apiKey", self.config.api_key.clone()),
            ("q", keyword.to_string()),
            ("pageSize", limit.to_string()),
        ];

        match self.fetch_live(&url, &params).await {
            Ok(mut articles) => {
                articles.truncate(limit);
                articles
            }
            Err(e) => {
                warn!("Error fetching news by keyword: {}", e);
                Vec::new()
            }
        }
    }

    async fn fetch_live(&self, url: &str, params: &[(&str, String)]) -> Result<Vec<RawArticle>> {
        let response = self.http.get(url).query(params).send().await?;

        if !response.status().is_success() {
            return Err(Error::Fetch(format!(
                "Feed returned status {}",
                response.status()
            )));
        }

        let body: FeedResponse = response.json().await?;
        Ok(body.articles)
    }
}
