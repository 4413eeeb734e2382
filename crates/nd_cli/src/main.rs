use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use nd_core::{Dataset, Error, Result};
use nd_dataset::{parse_article_count, views, DatasetBuilder, FeedQuery};
use nd_feed::{FeedClient, FeedConfig};
use nd_scrape::ArticleScraper;
use nd_web::AppState;
use tracing::info;

const MAX_CONTENT_LENGTH: usize = 1000;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Cache backend for feed responses: memory or disk
    #[arg(long, default_value = "disk")]
    cache: String,
    /// Directory for the disk cache
    #[arg(long, default_value = "cache")]
    cache_dir: PathBuf,
    /// Feed API key; falls back to the NEWS_API_KEY environment variable
    #[arg(long)]
    api_key: Option<String>,
    /// Cache freshness window in seconds
    #[arg(long, default_value_t = 3600)]
    freshness: u64,
    /// Sentiment model to use. Available models: lexicon (default), dummy
    #[arg(long)]
    model: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Build a dataset and print it
    Fetch {
        /// Headline category to browse
        #[arg(long)]
        category: Option<String>,
        /// Keyword to search instead of browsing a category
        #[arg(long)]
        keyword: Option<String>,
        /// Number of articles to request
        #[arg(long, default_value = "5")]
        count: String,
        /// Print the dataset as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Serve the dataset API over HTTP
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: String,
    },
}

fn resolve_api_key(flag: Option<String>) -> Result<String> {
    flag.or_else(|| std::env::var("NEWS_API_KEY").ok())
        .filter(|key| !key.is_empty())
        .ok_or_else(|| {
            Error::InvalidInput(
                "No API key; pass --api-key or set NEWS_API_KEY".to_string(),
            )
        })
}

fn build_pipeline(cli: &Cli) -> Result<DatasetBuilder> {
    let api_key = resolve_api_key(cli.api_key.clone())?;

    let cache = nd_storage::create_cache(&cli.cache, &cli.cache_dir)?;
    info!("💾 Cache backend initialized (using {})", cli.cache);

    let config =
        FeedConfig::new(api_key).with_freshness(Duration::from_secs(cli.freshness));
    let feed = FeedClient::new(config, cache);

    let sentiment = nd_sentiment::create_model(cli.model.as_deref())?;
    info!("🧠 Sentiment model initialized (using {})", sentiment.name());

    Ok(DatasetBuilder::new(
        feed,
        Arc::new(ArticleScraper::new()),
        sentiment,
    ))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Fetch {
            category,
            keyword,
            count,
            json,
        } => {
            // Validated before anything touches the network.
            let count = parse_article_count(count)?;
            let query = match (keyword, category) {
                (Some(keyword), _) if !keyword.is_empty() => {
                    FeedQuery::Keyword(keyword.clone())
                }
                (_, category) => {
                    FeedQuery::Category(category.clone().filter(|c| !c.is_empty()))
                }
            };

            let builder = build_pipeline(&cli)?;
            info!("📰 Building dataset for {:?}", query);
            let dataset = builder.build(&query, count).await?;
            info!("✨ Dataset built with {} records", dataset.len());

            if *json {
                println!("{}", serde_json::to_string_pretty(&dataset)?);
            } else {
                print_dataset(&dataset);
                print_views(&dataset);
            }
        }
        Commands::Serve { addr } => {
            let builder = build_pipeline(&cli)?;
            nd_web::serve(AppState::new(builder), addr).await?;
        }
    }

    Ok(())
}

fn print_dataset(dataset: &Dataset) {
    if dataset.is_empty() {
        println!("No articles found.");
        return;
    }

    for (idx, record) in dataset.iter().enumerate() {
        println!("{}. {}", idx + 1, record.title);
        println!("Source: {}", record.source);
        println!("Author: {}", record.author);
        println!("Published At: {}", record.published_at);
        println!("Sentiment: {}", record.sentiment);
        println!("Description: {}", record.description);
        println!(
            "Full Content: {}",
            truncate(&record.full_content, MAX_CONTENT_LENGTH)
        );
        println!("Link: {}", record.url);
        println!("{}", "-".repeat(50));
    }
}

fn truncate(content: &str, max: usize) -> String {
    if content.chars().count() > max {
        let cut: String = content.chars().take(max).collect();
        format!("{}...", cut)
    } else {
        content.to_string()
    }
}

fn print_views(dataset: &Dataset) {
    let sources = views::source_distribution(dataset);
    if !sources.is_empty() {
        println!("\nArticles by source:");
        for (source, count) in sources {
            println!("  {} - {}", source, count);
        }
    }

    let days = views::publication_histogram(dataset);
    if !days.is_empty() {
        println!("\nArticles per day:");
        for (day, count) in days {
            println!("  {} - {}", day, count);
        }
    }

    let authors = views::top_authors(dataset);
    if !authors.is_empty() {
        println!("\nTop authors:");
        for (author, count) in authors {
            println!("  {} - {}", author, count);
        }
    }

    let tally = views::sentiment_tally(dataset);
    println!(
        "\nSentiment: {} positive, {} neutral, {} negative",
        tally.positive, tally.neutral, tally.negative
    );
}
