//! Content Data Types
//!
//! The `Post` entity and the date parsing used to order posts chronologically.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// A single blog entry.
///
/// `slug` is unique across a loaded collection and is only used as an identity key
/// by whoever renders results. `date` is kept as the raw string from the source.
/// A missing `excerpt` or `date` deserializes as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub date: String,
}

impl Post {
    /// Parsed publication instant, or `None` if `date` is not a recognised format.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        parse_post_date(&self.date)
    }
}

/// Parses RFC 3339 timestamps, naive ISO date-times (taken as UTC) and plain
/// `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_post_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Stable newest-first sort. Unparseable dates rank after every parseable one
/// and keep their relative input order.
pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by_cached_key(|post| Reverse(post.published_at()));
}
