//! Read-only summaries over a finished dataset. Pure functions, no I/O;
//! rendering them into figures is the display layer's business.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use nd_core::{Dataset, Sentiment, UNKNOWN};
use serde::Serialize;

use crate::dates::DISPLAY_FORMAT;

/// Count of records per source, descending by count (ties break by name so
/// the ordering is stable).
pub fn source_distribution(dataset: &Dataset) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in dataset.iter() {
        *counts.entry(record.source.as_str()).or_insert(0) += 1;
    }
    sorted_desc(counts)
}

/// Count of records per calendar day. Records whose date is unknown are
/// excluded from this view only.
pub fn publication_histogram(dataset: &Dataset) -> Vec<(NaiveDate, usize)> {
    let mut counts: HashMap<NaiveDate, usize> = HashMap::new();
    for record in dataset.iter() {
        if record.published_at == UNKNOWN {
            continue;
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(&record.published_at, DISPLAY_FORMAT) {
            *counts.entry(dt.date()).or_insert(0) += 1;
        }
    }

    let mut days: Vec<(NaiveDate, usize)> = counts.into_iter().collect();
    days.sort_by_key(|(day, _)| *day);
    days
}

/// The ten most frequent author buckets; `"Unknown"` is a valid bucket.
pub fn top_authors(dataset: &Dataset) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in dataset.iter() {
        *counts.entry(record.author.as_str()).or_insert(0) += 1;
    }

    let mut authors = sorted_desc(counts);
    authors.truncate(10);
    authors
}

/// Frequency of whitespace-separated title tokens across all records; feeds
/// a word-cloud-style rendering.
pub fn title_token_frequency(dataset: &Dataset) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in dataset.iter() {
        for token in record.title.split_whitespace() {
            *counts.entry(token).or_insert(0) += 1;
        }
    }
    sorted_desc(counts)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentTally {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

/// Count of records per sentiment label.
pub fn sentiment_tally(dataset: &Dataset) -> SentimentTally {
    let mut tally = SentimentTally::default();
    for record in dataset.iter() {
        match record.sentiment {
            Sentiment::Positive => tally.positive += 1,
            Sentiment::Neutral => tally.neutral += 1,
            Sentiment::Negative => tally.negative += 1,
        }
    }
    tally
}

fn sorted_desc(counts: HashMap<&str, usize>) -> Vec<(String, usize)> {
    let mut entries: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(label, count)| (label.to_string(), count))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use nd_core::ArticleRecord;

    fn record(
        title: &str,
        source: &str,
        author: &str,
        published_at: &str,
        sentiment: Sentiment,
    ) -> ArticleRecord {
        ArticleRecord {
            title: title.to_string(),
            description: "desc".to_string(),
            source: source.to_string(),
            url: format!("https://example.com/{}", title.replace(' ', "-")),
            full_content: "content".to_string(),
            author: author.to_string(),
            published_at: published_at.to_string(),
            sentiment,
        }
    }

    fn sample() -> Dataset {
        Dataset::new(vec![
            record(
                "Rates rise again",
                "Example Times",
                "Jane Reporter",
                "2024-01-15 10:00",
                Sentiment::Positive,
            ),
            record(
                "Rates fall back",
                "Example Times",
                "Jane Reporter",
                "2024-01-15 18:30",
                Sentiment::Negative,
            ),
            record(
                "Quiet day for rates",
                "Daily Wire Report",
                UNKNOWN,
                "2024-01-16 09:00",
                Sentiment::Neutral,
            ),
            record(
                "Unknown date story",
                "Daily Wire Report",
                UNKNOWN,
                UNKNOWN,
                Sentiment::Neutral,
            ),
        ])
    }

    #[test]
    fn test_source_distribution() {
        let sources = source_distribution(&sample());
        assert_eq!(
            sources,
            vec![
                ("Daily Wire Report".to_string(), 2),
                ("Example Times".to_string(), 2),
            ]
        );
    }

    #[test]
    fn test_publication_histogram_excludes_unknown_dates() {
        let days = publication_histogram(&sample());
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].0, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(days[0].1, 2);
        assert_eq!(days[1].0, NaiveDate::from_ymd_opt(2024, 1, 16).unwrap());
        assert_eq!(days[1].1, 1);
    }

    #[test]
    fn test_top_authors_counts_unknown_bucket() {
        let authors = top_authors(&sample());
        assert_eq!(authors[0], (UNKNOWN.to_string(), 2));
        assert_eq!(authors[1], ("Jane Reporter".to_string(), 2));
    }

    #[test]
    fn test_top_authors_is_capped_at_ten() {
        let records: Vec<ArticleRecord> = (0..15)
            .map(|i| {
                record(
                    &format!("Story {}", i),
                    "Example Times",
                    &format!("Author {}", i),
                    "2024-01-15 10:00",
                    Sentiment::Neutral,
                )
            })
            .collect();
        let authors = top_authors(&Dataset::new(records));
        assert_eq!(authors.len(), 10);
    }

    #[test]
    fn test_title_token_frequency() {
        let tokens = title_token_frequency(&sample());
        let capitalized = tokens.iter().find(|(t, _)| t == "Rates").unwrap();
        assert_eq!(capitalized.1, 2);
        // Tokens are taken as written; case variants count separately.
        let lowercase = tokens.iter().find(|(t, _)| t == "rates").unwrap();
        assert_eq!(lowercase.1, 1);
    }

    #[test]
    fn test_sentiment_tally() {
        let tally = sentiment_tally(&sample());
        assert_eq!(
            tally,
            SentimentTally {
                positive: 1,
                neutral: 2,
                negative: 1,
            }
        );
    }

    #[test]
    fn test_views_are_total_on_an_empty_dataset() {
        let empty = Dataset::default();
        assert!(source_distribution(&empty).is_empty());
        assert!(publication_histogram(&empty).is_empty());
        assert!(top_authors(&empty).is_empty());
        assert!(title_token_frequency(&empty).is_empty());
        assert_eq!(sentiment_tally(&empty), SentimentTally::default());
    }
}
