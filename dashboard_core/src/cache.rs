use crate::tabs::DocumentTab;
use model::{Document, Notification};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// Identity of one cached query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Documents(DocumentTab),
    Notifications,
}

/// The latest resolved payload for a query key
#[derive(Debug, Clone)]
pub enum QueryData {
    Documents(Vec<Document>),
    Notifications(Vec<Notification>),
}

#[derive(Debug, Default)]
struct QueryState {
    /// set while a re-fetch is scheduled or in flight; further invalidations
    /// of the same key collapse into the pending one
    stale: bool,
    data: Option<QueryData>,
    error: Option<String>,
}

/// Revalidate-on-demand cache of registry query results.
///
/// The cache holds no authoritative state. Marking a key stale schedules
/// exactly one re-fetch on the channel handed out by [QueryCache::new];
/// whoever drains that channel performs the fetch and stores the result.
/// Resolution order across keys is unconstrained, last write wins per key.
pub struct QueryCache {
    inner: Mutex<HashMap<QueryKey, QueryState>>,
    refetch_tx: mpsc::UnboundedSender<QueryKey>,
}

impl QueryCache {
    /// Build a cache plus the queue of keys awaiting re-fetch
    pub fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<QueryKey>) {
        let (refetch_tx, refetch_rx) = mpsc::unbounded_channel();
        let cache = Arc::new(Self {
            inner: Mutex::new(HashMap::new()),
            refetch_tx,
        });
        (cache, refetch_rx)
    }

    /// Mark a key stale and schedule its re-fetch. Returns false when the key
    /// was already stale, in which case nothing new is scheduled.
    pub fn invalidate(&self, key: QueryKey) -> bool {
        let mut inner = self.inner.lock().unwrap();
        let state = inner.entry(key).or_default();
        if state.stale {
            return false;
        }
        state.stale = true;
        // The receiver outlives the cache in every composition we build; a
        // send failure means shutdown is already underway.
        let _ = self.refetch_tx.send(key);
        true
    }

    /// Store a resolved payload and clear the stale flag so later triggers
    /// schedule again
    pub fn store(&self, key: QueryKey, data: QueryData) {
        let mut inner = self.inner.lock().unwrap();
        let state = inner.entry(key).or_default();
        state.stale = false;
        state.error = None;
        state.data = Some(data);
    }

    /// Record a failed re-fetch. The stored message is what the view renders;
    /// the previous payload is kept so the table does not blank out.
    pub fn store_error(&self, key: QueryKey, message: String) {
        let mut inner = self.inner.lock().unwrap();
        let state = inner.entry(key).or_default();
        state.stale = false;
        state.error = Some(message);
    }

    pub fn is_stale(&self, key: QueryKey) -> bool {
        let inner = self.inner.lock().unwrap();
        inner.get(&key).map(|state| state.stale).unwrap_or(false)
    }

    /// The latest resolved payload for a key, if any has arrived yet
    pub fn get(&self, key: QueryKey) -> Option<QueryData> {
        let inner = self.inner.lock().unwrap();
        inner.get(&key).and_then(|state| state.data.clone())
    }

    pub fn error(&self, key: QueryKey) -> Option<String> {
        let inner = self.inner.lock().unwrap();
        inner.get(&key).and_then(|state| state.error.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn invalidate_schedules_exactly_one_refetch() {
        let (cache, mut rx) = QueryCache::new();
        let key = QueryKey::Documents(DocumentTab::All);

        assert!(cache.invalidate(key));
        // rapid repeat triggers collapse into the pending re-fetch
        assert!(!cache.invalidate(key));
        assert!(!cache.invalidate(key));

        assert_eq!(rx.recv().await, Some(key));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn storing_a_result_rearms_the_key() {
        let (cache, mut rx) = QueryCache::new();
        let key = QueryKey::Notifications;

        assert!(cache.invalidate(key));
        cache.store(key, QueryData::Notifications(vec![]));
        assert!(!cache.is_stale(key));

        assert!(cache.invalidate(key));
        assert_eq!(rx.recv().await, Some(key));
        assert_eq!(rx.recv().await, Some(key));
    }

    #[tokio::test]
    async fn error_keeps_previous_data() {
        let (cache, _rx) = QueryCache::new();
        let key = QueryKey::Documents(DocumentTab::Completed);

        cache.store(key, QueryData::Documents(vec![]));
        cache.invalidate(key);
        cache.store_error(key, "could not load".to_string());

        assert!(cache.get(key).is_some());
        assert_eq!(cache.error(key), Some("could not load".to_string()));
        assert!(!cache.is_stale(key));
    }

    #[test]
    fn distinct_tabs_are_distinct_keys() {
        let (cache, _rx) = QueryCache::new();
        assert!(cache.invalidate(QueryKey::Documents(DocumentTab::All)));
        assert!(cache.invalidate(QueryKey::Documents(DocumentTab::Completed)));
        assert!(cache.invalidate(QueryKey::Notifications));
    }
}
