use std::time::Duration;

use async_trait::async_trait;

use crate::types::RawArticle;
use crate::Result;

/// Keyed store for raw feed responses. Any backend satisfying this contract
/// is substitutable; staleness is re-checked on every read, so concurrent
/// writers may race (last writer wins).
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Returns the articles stored under `key` if they were written within
    /// `max_age`, `None` on a miss or a stale entry.
    async fn get(&self, key: &str, max_age: Duration) -> Result<Option<Vec<RawArticle>>>;

    /// Replaces the entry under `key` with `articles`, stamped now.
    async fn put(&self, key: &str, articles: &[RawArticle]) -> Result<()>;
}
