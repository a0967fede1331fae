//! Content Module Tests
//!
//! ## Test Scopes
//! - **Dates**: Accepted formats and the oldest-rank fallback for bad dates.
//! - **Front matter**: Header parsing for Markdown posts.
//! - **Loader**: JSON and directory sources, ordering, duplicate slug rejection.

#[cfg(test)]
mod tests {
    use crate::content::loader::{load_posts, parse_markdown_post};
    use crate::content::types::{parse_post_date, sort_newest_first, Post};
    use std::fs;
    use tempfile::TempDir;

    fn post(slug: &str, date: &str) -> Post {
        Post {
            slug: slug.to_string(),
            title: format!("Title {}", slug),
            excerpt: String::new(),
            date: date.to_string(),
        }
    }

    fn slugs(posts: &[Post]) -> Vec<&str> {
        posts.iter().map(|p| p.slug.as_str()).collect()
    }

    // ============================================================
    // DATE PARSING
    // ============================================================

    #[test]
    fn test_parse_plain_date() {
        let parsed = parse_post_date("2024-01-01").expect("plain date");
        assert_eq!(parsed.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let parsed = parse_post_date("2024-03-16T05:35:07.322+02:00").expect("rfc3339");
        assert_eq!(parsed.to_rfc3339(), "2024-03-16T03:35:07.322+00:00");
    }

    #[test]
    fn test_parse_naive_datetime_as_utc() {
        assert!(parse_post_date("2024-03-16T05:35:07").is_some());
        assert!(parse_post_date("2024-03-16 05:35:07").is_some());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_post_date("").is_none());
        assert!(parse_post_date("   ").is_none());
        assert!(parse_post_date("yesterday").is_none());
        assert!(parse_post_date("2024-13-45").is_none());
    }

    #[test]
    fn test_sort_newest_first_puts_bad_dates_last() {
        let mut posts = vec![
            post("bad-1", "not a date"),
            post("old", "2020-01-01"),
            post("bad-2", ""),
            post("new", "2024-01-01"),
        ];

        sort_newest_first(&mut posts);

        assert_eq!(slugs(&posts), vec!["new", "old", "bad-1", "bad-2"]);
    }

    #[test]
    fn test_sort_newest_first_is_stable_on_ties() {
        let mut posts = vec![
            post("first", "2024-01-01"),
            post("second", "2024-01-01T00:00:00Z"),
            post("third", "2024-01-01"),
        ];

        sort_newest_first(&mut posts);

        assert_eq!(slugs(&posts), vec!["first", "second", "third"]);
    }

    // ============================================================
    // FRONT MATTER
    // ============================================================

    #[test]
    fn test_parse_markdown_post_reads_header() {
        let text = "---\ntitle: \"Learn Rust\"\nexcerpt: 'Ownership explained'\ndate: \"2024-02-02T00:00:00.000Z\"\n---\n\nBody text\n";

        let post = parse_markdown_post("learn-rust", text).expect("header present");

        assert_eq!(post.slug, "learn-rust");
        assert_eq!(post.title, "Learn Rust");
        assert_eq!(post.excerpt, "Ownership explained");
        assert_eq!(post.date, "2024-02-02T00:00:00.000Z");
    }

    #[test]
    fn test_parse_markdown_post_defaults() {
        let post = parse_markdown_post("untitled", "---\nauthor: someone\n---\n").unwrap();

        assert_eq!(post.title, "untitled");
        assert_eq!(post.excerpt, "");
        assert_eq!(post.date, "");
    }

    #[test]
    fn test_parse_markdown_post_without_header() {
        assert!(parse_markdown_post("plain", "# Just a heading\n").is_none());
        assert!(parse_markdown_post("open", "---\ntitle: never closed\n").is_none());
    }

    #[test]
    fn test_header_field_only_matches_line_start() {
        let text = "---\nsubtitle: nope\ntitle: yes\n---\n";
        let post = parse_markdown_post("x", text).unwrap();
        assert_eq!(post.title, "yes");
    }

    // ============================================================
    // LOADER
    // ============================================================

    #[test]
    fn test_load_posts_from_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("posts.json");
        fs::write(
            &path,
            r#"[
                {"slug": "a", "title": "A", "excerpt": "first", "date": "2023-01-01"},
                {"slug": "b", "title": "B", "excerpt": "second", "date": "2024-01-01"}
            ]"#,
        )
        .unwrap();

        let posts = load_posts(&path).expect("load json");

        assert_eq!(slugs(&posts), vec!["b", "a"]);
    }

    #[test]
    fn test_load_posts_from_markdown_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("hello-world.md"),
            "---\ntitle: Hello World\nexcerpt: A first post\ndate: 2023-05-01\n---\nbody",
        )
        .unwrap();
        fs::write(
            dir.path().join("dynamic-routing.md"),
            "---\ntitle: Dynamic Routing\nexcerpt: Pages\ndate: 2024-05-01\n---\nbody",
        )
        .unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        fs::write(dir.path().join("draft.md"), "no header here").unwrap();

        let posts = load_posts(dir.path()).expect("load dir");

        assert_eq!(slugs(&posts), vec!["dynamic-routing", "hello-world"]);
        assert_eq!(posts[1].title, "Hello World");
    }

    #[test]
    fn test_load_posts_rejects_duplicate_slugs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("posts.json");
        fs::write(
            &path,
            r#"[
                {"slug": "same", "title": "A", "excerpt": "", "date": "2023-01-01"},
                {"slug": "same", "title": "B", "excerpt": "", "date": "2024-01-01"}
            ]"#,
        )
        .unwrap();

        let err = load_posts(&path).unwrap_err();

        assert!(err.to_string().contains("Duplicate post slug: same"));
    }

    #[test]
    fn test_load_posts_keeps_unparseable_dates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("posts.json");
        fs::write(
            &path,
            r#"[
                {"slug": "undated", "title": "U", "excerpt": "", "date": "soon"},
                {"slug": "dated", "title": "D", "excerpt": "", "date": "2020-01-01"}
            ]"#,
        )
        .unwrap();

        let posts = load_posts(&path).unwrap();

        assert_eq!(slugs(&posts), vec!["dated", "undated"]);
    }

    #[test]
    fn test_load_posts_json_missing_date() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("posts.json");
        fs::write(
            &path,
            r#"[
                {"slug": "a", "title": "A", "excerpt": "x"},
                {"slug": "b", "title": "B", "excerpt": "y", "date": "2024-01-01"}
            ]"#,
        )
        .unwrap();

        let posts = load_posts(&path).expect("missing date is not an error");

        assert_eq!(slugs(&posts), vec!["b", "a"]);
        assert_eq!(posts[1].date, "");
    }

    #[test]
    fn test_load_posts_json_missing_excerpt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("posts.json");
        fs::write(
            &path,
            r#"[{"slug": "a", "title": "A", "date": "2024-01-01"}]"#,
        )
        .unwrap();

        let posts = load_posts(&path).unwrap();

        assert_eq!(posts[0].excerpt, "");
    }

    #[test]
    fn test_load_posts_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = load_posts(&dir.path().join("absent.json"));
        assert!(result.is_err());
    }
}
