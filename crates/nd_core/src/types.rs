use serde::{Deserialize, Serialize};

/// Marker stored in any dataset field whose value could not be determined.
pub const UNKNOWN: &str = "Unknown";

/// One article as the feed reports it. Every field may be absent; nothing
/// here is validated until the dataset build.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawArticle {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub source: FeedSource,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default, rename = "publishedAt")]
    pub published_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedSource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// What a visit to the article's own page contributed. `Default` is the
/// all-empty value a failed scrape degrades to.
#[derive(Debug, Clone, Default)]
pub struct Enrichment {
    pub full_content: Option<String>,
    pub author: Option<String>,
    pub published_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Three-way label from a signed polarity score.
    pub fn from_polarity(polarity: f32) -> Self {
        if polarity > 0.0 {
            Sentiment::Positive
        } else if polarity < 0.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "Positive"),
            Sentiment::Neutral => write!(f, "Neutral"),
            Sentiment::Negative => write!(f, "Negative"),
        }
    }
}

/// One finished row of the dataset. After the build every field holds
/// meaningful text or the literal `"Unknown"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub title: String,
    pub description: String,
    pub source: String,
    pub url: String,
    pub full_content: String,
    pub author: String,
    pub published_at: String,
    pub sentiment: Sentiment,
}

/// Ordered, read-only collection of finished records. Insertion order is
/// fetch order after deduplication; a rebuild replaces the whole value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<ArticleRecord>,
}

impl Dataset {
    pub fn new(records: Vec<ArticleRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ArticleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ArticleRecord> {
        self.records.iter()
    }
}
