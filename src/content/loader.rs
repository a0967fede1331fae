use super::types::{sort_newest_first, Post};
use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const HEADER_DELIMITER: &str = "---";

/// Loads the post collection from `path`.
///
/// A file is read as a JSON array of posts; a directory is scanned (non-recursively)
/// for `*.md` files with a front-matter header. The result is ordered newest first.
pub fn load_posts(path: &Path) -> Result<Vec<Post>> {
    let mut posts = if path.is_dir() {
        load_markdown_dir(path)?
    } else {
        load_json_file(path)?
    };

    ensure_unique_slugs(&posts)?;

    for post in posts.iter().filter(|p| p.published_at().is_none()) {
        tracing::warn!(
            "Post {} has unparseable date {:?}, it will rank as oldest",
            post.slug,
            post.date
        );
    }

    sort_newest_first(&mut posts);
    tracing::info!("Loaded {} posts from {}", posts.len(), path.display());
    Ok(posts)
}

fn load_json_file(path: &Path) -> Result<Vec<Post>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read posts file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse posts file {}", path.display()))
}

fn load_markdown_dir(dir: &Path) -> Result<Vec<Post>> {
    let mut entries: Vec<_> = fs::read_dir(dir)
        .with_context(|| format!("Failed to read posts directory {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "md"))
        .collect();
    // read_dir order is platform dependent
    entries.sort();

    let mut posts = Vec::with_capacity(entries.len());
    for path in entries {
        let Some(slug) = path.file_stem().and_then(|s| s.to_str()) else {
            tracing::warn!("Skipping post with non UTF-8 file name {}", path.display());
            continue;
        };
        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read post {}", path.display()))?;

        match parse_markdown_post(slug, &text) {
            Some(post) => posts.push(post),
            None => tracing::warn!("Skipping {}: missing front-matter header", path.display()),
        }
    }

    Ok(posts)
}

/// Builds a post from a Markdown document whose first line is `---` and whose
/// header runs until the next `---` line. The body is not kept.
pub fn parse_markdown_post(slug: &str, text: &str) -> Option<Post> {
    let header = split_front_matter(text)?;

    let title = extract_header_field(header, "title:").unwrap_or_else(|| slug.to_string());
    let excerpt = extract_header_field(header, "excerpt:").unwrap_or_default();
    let date = extract_header_field(header, "date:").unwrap_or_default();

    Some(Post {
        slug: slug.to_string(),
        title,
        excerpt,
        date,
    })
}

fn split_front_matter(text: &str) -> Option<&str> {
    let rest = text.trim_start_matches('\u{feff}');
    let mut lines = rest.split_inclusive('\n');
    let first = lines.next()?;
    if first.trim_end() != HEADER_DELIMITER {
        return None;
    }

    let start = first.len();
    let mut offset = start;
    for line in lines {
        if line.trim_end() == HEADER_DELIMITER {
            return Some(&rest[start..offset]);
        }
        offset += line.len();
    }

    None
}

fn extract_header_field(header: &str, label: &str) -> Option<String> {
    header
        .lines()
        .find_map(|line| line.strip_prefix(label))
        .map(|value| unquote(value.trim()).to_string())
        .filter(|value| !value.is_empty())
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

fn ensure_unique_slugs(posts: &[Post]) -> Result<()> {
    let mut seen = HashSet::with_capacity(posts.len());
    for post in posts {
        if !seen.insert(post.slug.as_str()) {
            bail!("Duplicate post slug: {}", post.slug);
        }
    }
    Ok(())
}
