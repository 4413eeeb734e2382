use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use nd_core::{CacheStore, RawArticle, Result};
use sha2::{Digest, Sha256};

/// One JSON file per query key under a cache directory; the file holds the
/// raw article array as received and its mtime is the freshness signal.
pub struct DiskCache {
    dir: PathBuf,
}

impl DiskCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Keys come from user-supplied category names; keep a readable prefix
    /// and append a short digest so distinct keys cannot share a file.
    fn file_path(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    '_'
                }
            })
            .collect();

        let digest = Sha256::digest(key.as_bytes());
        let suffix: String = digest[..4].iter().map(|b| format!("{:02x}", b)).collect();

        self.dir.join(format!("{}_{}.json", safe, suffix))
    }
}

#[async_trait]
impl CacheStore for DiskCache {
    async fn get(&self, key: &str, max_age: Duration) -> Result<Option<Vec<RawArticle>>> {
        let path = self.file_path(key);

        let meta = match tokio::fs::metadata(&path).await {
            Ok(meta) => meta,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let modified = meta.modified()?;
        // An mtime in the future reads as age zero rather than an error.
        let age = modified.elapsed().unwrap_or(Duration::ZERO);
        if age >= max_age {
            return Ok(None);
        }

        let bytes = tokio::fs::read(&path).await?;
        let articles = serde_json::from_slice(&bytes)?;
        Ok(Some(articles))
    }

    async fn put(&self, key: &str, articles: &[RawArticle]) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let bytes = serde_json::to_vec(articles)?;
        tokio::fs::write(self.file_path(key), bytes).await?;
        Ok(())
    }
}
