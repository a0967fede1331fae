/// Trims surrounding whitespace (including a byte order mark) and lowercases. Idempotent.
pub fn normalize(raw: &str) -> String {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .to_lowercase()
}

/// True for the empty string and for whitespace-only input.
pub fn is_query_empty(raw: &str) -> bool {
    normalize(raw).is_empty()
}
