use std::path::Path;
use std::sync::Arc;

use nd_core::{CacheStore, Error, Result};

pub mod backends;

pub use backends::{DiskCache, MemoryCache};

/// Select a cache backend by name: `"memory"` or `"disk"`. The directory is
/// only used by the disk backend.
pub fn create_cache(kind: &str, dir: &Path) -> Result<Arc<dyn CacheStore>> {
    match kind {
        "memory" => Ok(Arc::new(MemoryCache::new())),
        "disk" => Ok(Arc::new(DiskCache::new(dir))),
        other => Err(Error::Cache(format!("Unknown cache backend: {}", other))),
    }
}

pub mod prelude {
    pub use super::{create_cache, DiskCache, MemoryCache};
    pub use nd_core::CacheStore;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_cache() {
        let dir = std::env::temp_dir();
        assert!(create_cache("memory", &dir).is_ok());
        assert!(create_cache("disk", &dir).is_ok());
        assert!(create_cache("postgres", &dir).is_err());
    }
}
