use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use async_trait::async_trait;
use nd_core::{CacheStore, RawArticle, Result};
use tokio::sync::RwLock;

pub struct MemoryStore {
    entries: HashMap<String, (SystemTime, Vec<RawArticle>)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, key: &str, max_age: Duration) -> Option<Vec<RawArticle>> {
        let (written_at, articles) = self.entries.get(key)?;
        let age = written_at.elapsed().ok()?;
        if age < max_age {
            Some(articles.clone())
        } else {
            None
        }
    }

    pub fn put(&mut self, key: &str, articles: &[RawArticle]) {
        self.entries
            .insert(key.to_string(), (SystemTime::now(), articles.to_vec()));
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

pub struct MemoryCache {
    store: Arc<RwLock<MemoryStore>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(MemoryStore::new())),
        }
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn get(&self, key: &str, max_age: Duration) -> Result<Option<Vec<RawArticle>>> {
        let store = self.store.read().await;
        Ok(store.get(key, max_age))
    }

    async fn put(&self, key: &str, articles: &[RawArticle]) -> Result<()> {
        let mut store = self.store.write().await;
        store.put(key, articles);
        Ok(())
    }
}
