//! Blog Post Search Library
//!
//! Filters a small, fully in-memory collection of blog posts by a free-text query.
//!
//! ## Modules
//! - **`search`**: The core. Normalizes a query, matches it as a case-insensitive substring
//!   of each post's title or excerpt, and returns matches newest first. Also holds the HTTP
//!   handlers and the debounced search-as-you-type session.
//! - **`content`**: Loads posts from a JSON file or a directory of Markdown files and parses
//!   their dates.
//! - **`config`**: Command-line and environment configuration for the server binary.
//! - **`server`**: Assembles the Axum router.

pub mod config;
pub mod content;
pub mod search;
pub mod server;
