//! Search Module
//!
//! Filters the in-memory post collection by a free-text query.
//!
//! ## Overview
//! The engine is a pure function: the caller passes the raw query and the full post list on
//! every call, and gets back a fresh `SearchResults` envelope. Nothing is indexed or cached;
//! the list is re-scanned per query.
//!
//! ## Submodules
//! - **`normalizer`**: Query normalization (trim + lowercase) and the emptiness check.
//! - **`engine`**: Substring matching over title and excerpt, newest-first ordering.
//! - **`handlers`**: HTTP handlers for the Axum web server, including display truncation.
//! - **`session`**: Search-as-you-type state and the debouncer that drives it.
//! - **`types`**: The result envelope and the HTTP response DTOs.

pub mod engine;
pub mod handlers;
pub mod normalizer;
pub mod session;
pub mod types;
