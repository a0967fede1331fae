use crate::config::SearchSettings;
use crate::content::types::Post;
use crate::search::handlers::{handle_health, handle_search};
use axum::extract::Extension;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

pub fn build_router(posts: Arc<Vec<Post>>, settings: SearchSettings) -> Router {
    Router::new()
        .route("/search", get(handle_search))
        .route("/health", get(handle_health))
        .layer(Extension(posts))
        .layer(Extension(settings))
}
