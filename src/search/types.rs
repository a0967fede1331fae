use crate::content::types::Post;
use serde::{Deserialize, Serialize};

/// The envelope returned by every search call.
///
/// `query` is the caller's raw input, not the normalized form.
/// `total_count` always equals `results.len()` and `is_empty` is `total_count == 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub results: Vec<Post>,
    pub query: String,
    pub total_count: usize,
    pub is_empty: bool,
}

impl SearchResults {
    pub fn empty(query: &str) -> Self {
        Self::from_matches(query, Vec::new())
    }

    pub fn from_matches(query: &str, results: Vec<Post>) -> Self {
        let total_count = results.len();
        Self {
            results,
            query: query.to_string(),
            total_count,
            is_empty: total_count == 0,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub total_count: usize,
    pub count: usize,
    pub is_empty: bool,
    pub results: Vec<SearchResultItem>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub date: String,
}

impl From<Post> for SearchResultItem {
    fn from(post: Post) -> Self {
        Self {
            slug: post.slug,
            title: post.title,
            excerpt: post.excerpt,
            date: post.date,
        }
    }
}
