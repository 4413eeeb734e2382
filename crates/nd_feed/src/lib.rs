pub mod client;

pub use client::{FeedClient, FeedConfig, KEYWORD_CACHE_KEY};

pub mod prelude {
    pub use super::{FeedClient, FeedConfig};
    pub use nd_core::{RawArticle, Result};
}
