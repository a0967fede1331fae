use super::normalizer::{is_query_empty, normalize};
use super::types::SearchResults;
use crate::content::types::{sort_newest_first, Post};

/// Filters `posts` to those whose title or excerpt contains the query
/// (case-insensitive, plain substring) and orders them newest first.
///
/// An empty or whitespace-only query returns an empty envelope without scanning `posts`.
/// Ties on date, and posts whose date cannot be parsed, keep their input order;
/// unparseable dates rank after every dated post.
pub fn search_posts(query: &str, posts: &[Post]) -> SearchResults {
    if is_query_empty(query) {
        return SearchResults::empty(query);
    }
    let needle = normalize(query);

    let mut matches: Vec<Post> = posts
        .iter()
        .filter(|post| matches_post(post, &needle))
        .cloned()
        .collect();
    sort_newest_first(&mut matches);

    tracing::debug!(
        "Query {:?} matched {} of {} posts",
        query,
        matches.len(),
        posts.len()
    );

    SearchResults::from_matches(query, matches)
}

fn matches_post(post: &Post, needle: &str) -> bool {
    post.title.to_lowercase().contains(needle) || post.excerpt.to_lowercase().contains(needle)
}
