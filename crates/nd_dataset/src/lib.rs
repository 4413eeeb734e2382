pub mod builder;
pub mod dates;
pub mod views;

pub use builder::{parse_article_count, DatasetBuilder, FeedQuery};
pub use dates::{normalize_timestamp, DISPLAY_FORMAT};

pub mod prelude {
    pub use super::views;
    pub use super::{parse_article_count, DatasetBuilder, FeedQuery};
    pub use nd_core::{ArticleRecord, Dataset, Result, Sentiment};
}
