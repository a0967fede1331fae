use super::engine::search_posts;
use super::types::{SearchResponse, SearchResultItem, SearchResults};
use crate::config::SearchSettings;
use crate::content::types::Post;
use axum::extract::Query;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub limit: Option<usize>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub posts: usize,
}

pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(posts): Extension<Arc<Vec<Post>>>,
    Extension(settings): Extension<SearchSettings>,
) -> Json<SearchResponse> {
    let results = search_posts(&params.q, &posts);
    let limit = params.limit.unwrap_or(settings.max_results);

    Json(render_results(results, limit))
}

pub async fn handle_health(Extension(posts): Extension<Arc<Vec<Post>>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        posts: posts.len(),
    })
}

/// Shapes an envelope for display. Truncation to `limit` only affects the
/// listed items; `total_count` is the full match count. A `limit` of 0 shows everything.
pub fn render_results(results: SearchResults, limit: usize) -> SearchResponse {
    let SearchResults {
        results,
        query,
        total_count,
        is_empty,
    } = results;

    let shown = if limit == 0 { total_count } else { limit };
    let results: Vec<SearchResultItem> = results
        .into_iter()
        .take(shown)
        .map(SearchResultItem::from)
        .collect();
    let count = results.len();

    let message = if is_empty {
        Some(format!("No results found for \"{}\"", query))
    } else if count < total_count {
        Some(format!("Showing {} of {} results", count, total_count))
    } else {
        None
    };

    SearchResponse {
        query,
        total_count,
        count,
        is_empty,
        results,
        message,
    }
}
