//! Search-as-you-type State
//!
//! Caller-held state for an interactive search box, kept outside the pure engine.
//!
//! ## Responsibilities
//! - **Session**: Tracks the typed query, the debounced query actually searched, and whether
//!   the results panel is open.
//! - **Debouncing**: Delays a search until input has been quiet for a fixed time. Every new
//!   input aborts the pending run, so only the last value of a burst is searched.

use super::engine::search_posts;
use super::types::SearchResults;
use crate::content::types::Post;

use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Quiet period before a typed query is searched.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

pub struct SearchSession {
    posts: Arc<Vec<Post>>,
    query: String,
    debounced_query: String,
    is_open: bool,
}

impl SearchSession {
    pub fn new(posts: Arc<Vec<Post>>) -> Self {
        Self {
            posts,
            query: String::new(),
            debounced_query: String::new(),
            is_open: false,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn debounced_query(&self) -> &str {
        &self.debounced_query
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Records new input and opens the results panel. The searched query only
    /// changes once [`on_debounce_elapsed`](Self::on_debounce_elapsed) fires.
    pub fn on_query_change(&mut self, query: &str) {
        self.query = query.to_string();
        self.is_open = true;
    }

    /// Reopens the panel when the search box regains focus, without changing the query.
    pub fn on_focus(&mut self) {
        self.is_open = true;
    }

    pub fn on_debounce_elapsed(&mut self) {
        self.debounced_query = self.query.clone();
    }

    /// Closes the panel after a result is picked. The query stays in the box.
    pub fn on_result_click(&mut self, slug: &str) {
        tracing::debug!("Result {} selected for query {:?}", slug, self.query);
        self.is_open = false;
    }

    pub fn results(&self) -> SearchResults {
        search_posts(&self.debounced_query, &self.posts)
    }
}

/// Runs a callback after a quiet period, cancelling any run still pending.
///
/// Must be used from within a tokio runtime.
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedules `callback(value)` after the delay. A run scheduled earlier and
    /// not yet fired is aborted.
    pub fn schedule<T, F>(&self, value: T, callback: F)
    where
        T: Send + 'static,
        F: FnOnce(T) + Send + 'static,
    {
        let mut pending = self.lock_pending();
        if let Some(previous) = pending.take() {
            previous.abort();
        }

        let delay = self.delay;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback(value);
        }));
    }

    pub fn cancel(&self) {
        if let Some(pending) = self.lock_pending().take() {
            pending.abort();
        }
    }

    fn lock_pending(&self) -> std::sync::MutexGuard<'_, Option<JoinHandle<()>>> {
        // the slot only ever holds a handle, so a poisoned lock is still consistent
        self.pending.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
