pub mod cache;
pub mod enrich;
pub mod error;
pub mod sentiment;
pub mod types;

pub use cache::CacheStore;
pub use enrich::Enricher;
pub use error::Error;
pub use sentiment::SentimentModel;
pub use types::{ArticleRecord, Dataset, Enrichment, FeedSource, RawArticle, Sentiment, UNKNOWN};

pub type Result<T> = std::result::Result<T, Error>;

pub mod prelude {
    pub use crate::{ArticleRecord, Dataset, Enrichment, Error, RawArticle, Result, Sentiment};
}
