use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use nd_core::Dataset;
use nd_dataset::views::{self, SentimentTally};
use nd_dataset::{parse_article_count, FeedQuery};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct BuildRequest {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub keyword: Option<String>,
    /// Requested article count as entered; the pipeline validates it.
    pub count: String,
}

#[derive(Debug, Serialize)]
pub struct BuildResponse {
    pub records: usize,
}

pub async fn build_dataset(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BuildRequest>,
) -> Result<Json<BuildResponse>, (StatusCode, String)> {
    let count = parse_article_count(&request.count)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let query = match (request.keyword, request.category) {
        (Some(keyword), _) if !keyword.is_empty() => FeedQuery::Keyword(keyword),
        (_, category) => FeedQuery::Category(category.filter(|c| !c.is_empty())),
    };

    let dataset = state
        .builder
        .build(&query, count)
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    info!("Built dataset with {} records", dataset.len());
    let records = dataset.len();
    *state.dataset.write().await = Some(dataset);

    Ok(Json(BuildResponse { records }))
}

pub async fn get_dataset(State(state): State<Arc<AppState>>) -> Json<Dataset> {
    Json(current(&state).await)
}

pub async fn view_sources(State(state): State<Arc<AppState>>) -> Json<Vec<(String, usize)>> {
    Json(views::source_distribution(&current(&state).await))
}

pub async fn view_days(State(state): State<Arc<AppState>>) -> Json<Vec<(NaiveDate, usize)>> {
    Json(views::publication_histogram(&current(&state).await))
}

pub async fn view_authors(State(state): State<Arc<AppState>>) -> Json<Vec<(String, usize)>> {
    Json(views::top_authors(&current(&state).await))
}

pub async fn view_tokens(State(state): State<Arc<AppState>>) -> Json<Vec<(String, usize)>> {
    Json(views::title_token_frequency(&current(&state).await))
}

pub async fn view_sentiment(State(state): State<Arc<AppState>>) -> Json<SentimentTally> {
    Json(views::sentiment_tally(&current(&state).await))
}

async fn current(state: &AppState) -> Dataset {
    state.dataset.read().await.clone().unwrap_or_default()
}
