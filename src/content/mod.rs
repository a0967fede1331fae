//! Content Module
//!
//! Owns the post collection that the search core scans.
//!
//! ## Workflow
//! 1. **Load**: Reads posts once at startup, either from a JSON array file or from a
//!    directory of Markdown files carrying a `---` delimited header.
//! 2. **Validate**: Rejects collections with duplicate slugs.
//! 3. **Order**: Returns posts newest first, using the same date comparator as the search engine.

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;
