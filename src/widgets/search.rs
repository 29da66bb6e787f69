//! Debounced search input.

use std::time::Duration;

use crate::config::DebounceConfig;
use crate::debounce::Debouncer;

/// Receives the query once typing has settled.
pub trait SearchHandler: Send + Sync + 'static {
    fn search(&self, query: &str);
}

impl<F> SearchHandler for F
where
    F: Fn(&str) + Send + Sync + 'static,
{
    fn search(&self, query: &str) {
        self(query)
    }
}

/// Default handler: logs the query.
pub struct LogSearch;

impl SearchHandler for LogSearch {
    fn search(&self, query: &str) {
        tracing::info!(query = %query, "Searching for: {}", query);
    }
}

/// A search box that forwards its value to a handler after a quiet period.
pub struct SearchInput {
    debouncer: Debouncer<String>,
}

impl SearchInput {
    pub fn new<H: SearchHandler>(handler: H, wait: Duration) -> Self {
        Self {
            debouncer: Debouncer::new(wait, move |query: String| handler.search(&query)),
        }
    }

    pub fn from_config<H: SearchHandler>(handler: H, config: &DebounceConfig) -> Self {
        Self::new(handler, config.search_wait())
    }

    /// One input event carrying the box's current value.
    pub fn input(&self, value: impl Into<String>) {
        self.debouncer.call(value.into());
    }

    /// Whether a search is waiting for the quiet period to end.
    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Drop the pending search, e.g. when the box is cleared or unmounted.
    pub fn clear(&self) -> bool {
        self.debouncer.cancel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[tokio::test(start_paused = true)]
    async fn test_typing_issues_single_search() {
        let queries = Arc::new(Mutex::new(Vec::new()));
        let q = queries.clone();
        let input = SearchInput::from_config(
            move |query: &str| q.lock().unwrap().push(query.to_string()),
            &DebounceConfig::default(),
        );

        for prefix in ["a", "as", "asp", "aspirin"] {
            input.input(prefix);
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        assert!(input.is_pending());

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(*queries.lock().unwrap(), vec!["aspirin".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_drops_pending_search() {
        let queries = Arc::new(Mutex::new(Vec::<String>::new()));
        let q = queries.clone();
        let input = SearchInput::new(
            move |query: &str| q.lock().unwrap().push(query.to_string()),
            Duration::from_millis(300),
        );

        input.input("ibuprofen");
        assert!(input.clear());
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(queries.lock().unwrap().is_empty());
    }
}
