use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use nd_core::Result;
use tower_http::cors::CorsLayer;
use tracing::info;

pub mod handlers;
pub mod state;

pub use state::AppState;

pub async fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/build", post(handlers::build_dataset))
        .route("/api/dataset", get(handlers::get_dataset))
        .route("/api/views/sources", get(handlers::view_sources))
        .route("/api/views/days", get(handlers::view_days))
        .route("/api/views/authors", get(handlers::view_authors))
        .route("/api/views/tokens", get(handlers::view_tokens))
        .route("/api/views/sentiment", get(handlers::view_sentiment))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub async fn serve(state: AppState, addr: &str) -> Result<()> {
    let app = create_app(state).await;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Serving dataset API on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

pub mod prelude {
    pub use crate::AppState;
    pub use nd_core::{Dataset, Result};
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use async_trait::async_trait;
    use axum::extract::State;
    use axum::http::StatusCode;
    use axum::Json;
    use nd_core::{CacheStore, Enricher, Enrichment, FeedSource, RawArticle};
    use nd_dataset::DatasetBuilder;
    use nd_feed::{FeedClient, FeedConfig};
    use nd_sentiment::DummyModel;
    use nd_storage::MemoryCache;

    use crate::handlers::{self, BuildRequest};

    struct EmptyEnricher;

    #[async_trait]
    impl Enricher for EmptyEnricher {
        async fn scrape(&self, _url: &str) -> Enrichment {
            Enrichment::default()
        }
    }

    async fn state_with(articles: &[RawArticle]) -> Arc<AppState> {
        let cache = Arc::new(MemoryCache::new());
        cache.put("technology", articles).await.unwrap();

        let config = FeedConfig::new("test-key")
            .with_base_url("http://127.0.0.1:9/v2")
            .with_timeout(Duration::from_secs(1));
        let feed = FeedClient::new(config, cache);
        let builder = DatasetBuilder::new(
            feed,
            Arc::new(EmptyEnricher),
            Arc::new(DummyModel),
        );

        Arc::new(AppState::new(builder))
    }

    fn article(url: &str, title: &str) -> RawArticle {
        RawArticle {
            title: Some(title.to_string()),
            description: Some("desc".to_string()),
            source: FeedSource {
                id: None,
                name: Some("Example Times".to_string()),
            },
            url: Some(url.to_string()),
            author: None,
            published_at: Some("2024-01-15T10:00:00Z".to_string()),
        }
    }

    #[tokio::test]
    async fn test_invalid_count_is_rejected_with_400() {
        let state = state_with(&[]).await;
        let request = BuildRequest {
            category: Some("technology".to_string()),
            keyword: None,
            count: "five".to_string(),
        };

        let result = handlers::build_dataset(State(state), Json(request)).await;
        let (status, _) = result.err().unwrap();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_build_replaces_the_dataset() {
        let state = state_with(&[
            article("https://example.com/a", "A"),
            article("https://example.com/b", "B"),
        ])
        .await;

        let request = BuildRequest {
            category: Some("technology".to_string()),
            keyword: None,
            count: "5".to_string(),
        };
        let Json(response) = handlers::build_dataset(State(state.clone()), Json(request))
            .await
            .unwrap();
        assert_eq!(response.records, 2);

        let Json(dataset) = handlers::get_dataset(State(state.clone())).await;
        assert_eq!(dataset.len(), 2);

        let Json(sources) = handlers::view_sources(State(state)).await;
        assert_eq!(sources, vec![("Example Times".to_string(), 2)]);
    }

    #[tokio::test]
    async fn test_views_are_empty_before_any_build() {
        let state = state_with(&[]).await;

        let Json(dataset) = handlers::get_dataset(State(state.clone())).await;
        assert!(dataset.is_empty());

        let Json(tally) = handlers::view_sentiment(State(state)).await;
        assert_eq!(tally.positive + tally.neutral + tally.negative, 0);
    }
}
