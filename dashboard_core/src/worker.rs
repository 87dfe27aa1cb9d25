use crate::cache::{QueryCache, QueryData, QueryKey};
use crate::session::Session;
use crate::tabs::DocumentTabs;
use crate::ui_state::NotificationCounter;
use registry_service_client::RegistryServiceClient;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Drains the cache's re-fetch queue, one registry call per scheduled key.
///
/// Fetches for different keys resolve in whatever order the registry answers;
/// each key only ever holds its own latest resolved data. A failed fetch
/// records a generic could-not-load error on the key and is not retried; the
/// next trigger (or a manual refresh) schedules it again.
pub struct RefetchWorker {
    tabs: DocumentTabs,
    client: RegistryServiceClient,
    session: Session,
    cache: Arc<QueryCache>,
    counter: Arc<NotificationCounter>,
}

impl RefetchWorker {
    pub fn new(
        client: RegistryServiceClient,
        session: Session,
        cache: Arc<QueryCache>,
        counter: Arc<NotificationCounter>,
    ) -> Self {
        Self {
            tabs: DocumentTabs::new(client.clone()),
            client,
            session,
            cache,
            counter,
        }
    }

    /// Run until the queue closes (the cache was dropped)
    pub async fn run(self, mut queue: mpsc::UnboundedReceiver<QueryKey>) {
        while let Some(key) = queue.recv().await {
            self.refetch(key).await;
        }
    }

    #[tracing::instrument(skip(self))]
    async fn refetch(&self, key: QueryKey) {
        match key {
            QueryKey::Documents(tab) => match self.tabs.fetch(&self.session, tab).await {
                Ok(documents) => self.cache.store(key, QueryData::Documents(documents)),
                Err(e) => {
                    tracing::warn!(error = ?e, "document re-fetch failed");
                    self.cache.store_error(key, "could not load documents".to_string());
                }
            },
            QueryKey::Notifications => {
                let Some(token) = self.session.token() else {
                    self.cache
                        .store_error(key, "no authenticated session".to_string());
                    return;
                };
                match self.client.get_notifications(token).await {
                    Ok(notifications) => {
                        self.counter.observe(&notifications);
                        self.cache
                            .store(key, QueryData::Notifications(notifications));
                    }
                    Err(e) => {
                        tracing::warn!(error = ?e, "notification re-fetch failed");
                        self.cache
                            .store_error(key, "could not load notifications".to_string());
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabs::DocumentTab;
    use axum::{Json, Router, routing::get};
    use docflow_auth::SessionToken;

    async fn mock_registry(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn refetch_resolves_notifications_and_updates_the_badge() {
        let router = Router::new().route(
            "/notifications",
            get(|| async {
                Json(serde_json::json!([
                    { "notification_id": 1, "message": "released", "document_id": 9, "seen": false, "created_at": null },
                    { "notification_id": 2, "message": "received", "document_id": 9, "seen": true, "created_at": null }
                ]))
            }),
        );
        let base = mock_registry(router).await;

        let (cache, queue) = QueryCache::new();
        let counter = Arc::new(NotificationCounter::new());
        let worker = RefetchWorker::new(
            RegistryServiceClient::new(base),
            Session::authenticated(SessionToken::new("t")),
            cache.clone(),
            counter.clone(),
        );

        cache.invalidate(QueryKey::Notifications);
        let cache2 = cache.clone();
        let handle = tokio::spawn(worker.run(queue));

        // the queue closes once the cache (and its sender) drop; poll instead
        let mut tries = 0;
        while cache2.is_stale(QueryKey::Notifications) && tries < 100 {
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
            tries += 1;
        }

        assert!(matches!(
            cache2.get(QueryKey::Notifications),
            Some(QueryData::Notifications(n)) if n.len() == 2
        ));
        assert_eq!(counter.count(), 1);
        handle.abort();
    }

    #[tokio::test]
    async fn failed_refetch_records_a_generic_error() {
        let (cache, mut queue) = QueryCache::new();
        let counter = Arc::new(NotificationCounter::new());
        let worker = RefetchWorker::new(
            RegistryServiceClient::new("http://registry.invalid".to_string()),
            Session::authenticated(SessionToken::new("t")),
            cache.clone(),
            counter,
        );

        let key = QueryKey::Documents(DocumentTab::All);
        cache.invalidate(key);
        let scheduled = queue.recv().await.unwrap();
        worker.refetch(scheduled).await;

        assert_eq!(cache.error(key), Some("could not load documents".to_string()));
        assert!(!cache.is_stale(key));
    }
}
