use crate::cache::{QueryCache, QueryKey};
use crate::tabs::DocumentTab;
use docflow_auth::SessionToken;
use futures::StreamExt;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::sync::watch;
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message,
};
use url::Url;
use uuid::Uuid;

/// A websocket payload naming a cache domain to invalidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// a document changed hands between agencies
    Transits,
    /// a document was created or changed lifecycle state
    Documents,
    /// the user's notification list changed
    Notifications,
    /// anything else; carried for trace logging, never acted on
    Unrecognized(String),
}

impl From<&str> for Trigger {
    fn from(value: &str) -> Self {
        match value {
            "transits" => Trigger::Transits,
            "documents" => Trigger::Documents,
            "notifications" => Trigger::Notifications,
            other => Trigger::Unrecognized(other.to_string()),
        }
    }
}

impl Trigger {
    /// The query keys a trigger marks stale
    pub fn affected_keys(&self) -> Vec<QueryKey> {
        match self {
            Trigger::Documents => vec![
                QueryKey::Documents(DocumentTab::All),
                QueryKey::Documents(DocumentTab::Dispatch),
                QueryKey::Documents(DocumentTab::Received),
                QueryKey::Documents(DocumentTab::Completed),
            ],
            Trigger::Transits => vec![
                QueryKey::Documents(DocumentTab::IncomingTransit),
                QueryKey::Documents(DocumentTab::OutgoingTransit),
            ],
            Trigger::Notifications => vec![QueryKey::Notifications],
            Trigger::Unrecognized(_) => vec![],
        }
    }
}

/// An error which can occur while running the invalidation relay
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("invalid api base url: {0}")]
    InvalidBaseUrl(String),
    #[error("cannot derive a socket url from scheme {0}")]
    UnsupportedScheme(String),
    #[error("gave up reconnecting after {failures} consecutive failures")]
    RetriesExhausted { failures: u32 },
}

/// Derive the registry socket url from its http base: swap the scheme
/// http→ws / https→wss and pass the access token as a query parameter.
pub fn derive_socket_url(api_base: &str, token: &SessionToken) -> Result<Url, RelayError> {
    let mut url =
        Url::parse(api_base).map_err(|_| RelayError::InvalidBaseUrl(api_base.to_string()))?;

    let scheme = match url.scheme() {
        "http" => "ws",
        "https" => "wss",
        other => return Err(RelayError::UnsupportedScheme(other.to_string())),
    };
    url.set_scheme(scheme)
        .map_err(|_| RelayError::InvalidBaseUrl(api_base.to_string()))?;
    url.query_pairs_mut().append_pair("token", token.expose());

    Ok(url)
}

/// Reconnection policy for the relay socket
#[derive(Debug, Clone, Copy)]
pub struct ReconnectPolicy {
    pub initial_delay: Duration,
    pub max_delay: Duration,
    /// circuit breaker: stop the relay after this many consecutive failures
    pub max_consecutive_failures: u32,
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(30),
            max_consecutive_failures: 10,
        }
    }
}

/// Exponential backoff with a delay cap and a consecutive-failure budget
#[derive(Debug)]
pub struct Backoff {
    policy: ReconnectPolicy,
    consecutive_failures: u32,
}

impl Backoff {
    pub fn new(policy: ReconnectPolicy) -> Self {
        Self {
            policy,
            consecutive_failures: 0,
        }
    }

    /// The delay before the next attempt, or None once the breaker trips
    pub fn next_delay(&mut self) -> Option<Duration> {
        if self.consecutive_failures >= self.policy.max_consecutive_failures {
            return None;
        }
        // clamp the exponent so the shift cannot overflow before min() applies
        let exponent = self.consecutive_failures.min(16);
        let delay = self
            .policy
            .initial_delay
            .saturating_mul(2u32.saturating_pow(exponent))
            .min(self.policy.max_delay);
        self.consecutive_failures += 1;
        Some(delay)
    }

    /// A successful connection resets the failure count
    pub fn reset(&mut self) {
        self.consecutive_failures = 0;
    }
}

enum ListenOutcome {
    Closed,
    Shutdown,
}

/// Keeps document tables fresh when the registry reports state changes
/// out-of-band.
///
/// One relay per authenticated session. On every text frame naming a known
/// [Trigger] the affected query caches are marked stale; anything else is
/// ignored. The socket is reopened on close with exponential backoff until
/// the breaker trips. The owner stops the relay through the shutdown signal,
/// and rebuilds it when the access token changes.
pub struct InvalidationRelay {
    url: Url,
    cache: Arc<QueryCache>,
    policy: ReconnectPolicy,
    shutdown: watch::Receiver<bool>,
}

impl InvalidationRelay {
    pub fn new(
        api_base: &str,
        token: &SessionToken,
        cache: Arc<QueryCache>,
        policy: ReconnectPolicy,
        shutdown: watch::Receiver<bool>,
    ) -> Result<Self, RelayError> {
        Ok(Self {
            url: derive_socket_url(api_base, token)?,
            cache,
            policy,
            shutdown,
        })
    }

    /// The derived socket url this relay connects to
    pub fn socket_url(&self) -> &Url {
        &self.url
    }

    /// Run until shutdown is signalled or the reconnect budget is spent
    #[tracing::instrument(skip(self), fields(host = %self.url.host_str().unwrap_or("<none>")))]
    pub async fn run(self) -> Result<(), RelayError> {
        let InvalidationRelay {
            url,
            cache,
            policy,
            mut shutdown,
        } = self;
        let mut backoff = Backoff::new(policy);

        loop {
            tokio::select! {
                _ = shutdown_signal(&mut shutdown) => return Ok(()),
                connected = connect_async(url.as_str()) => match connected {
                    Ok((stream, _)) => {
                        backoff.reset();
                        let connection_id = Uuid::new_v4();
                        tracing::info!(%connection_id, "invalidation relay connected");
                        if let ListenOutcome::Shutdown =
                            listen(stream, &cache, &mut shutdown, connection_id).await
                        {
                            return Ok(());
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = ?e, "invalidation relay failed to connect");
                    }
                }
            }

            let Some(delay) = backoff.next_delay() else {
                return Err(RelayError::RetriesExhausted {
                    failures: policy.max_consecutive_failures,
                });
            };

            tokio::select! {
                _ = shutdown_signal(&mut shutdown) => return Ok(()),
                _ = tokio::time::sleep(delay) => {}
            }
        }
    }
}

async fn listen(
    mut stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
    cache: &QueryCache,
    shutdown: &mut watch::Receiver<bool>,
    connection_id: Uuid,
) -> ListenOutcome {
    loop {
        tokio::select! {
            _ = shutdown_signal(shutdown) => return ListenOutcome::Shutdown,
            message = stream.next() => match message {
                Some(Ok(Message::Text(text))) => apply_trigger(cache, text.as_str()),
                Some(Ok(Message::Close(_))) => {
                    tracing::debug!(%connection_id, "relay socket closed");
                    return ListenOutcome::Closed;
                }
                // pings and pongs are handled by tungstenite; binary
                // frames are not part of the trigger contract
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    tracing::warn!(error = ?e, %connection_id, "relay socket error");
                    return ListenOutcome::Closed;
                }
                None => return ListenOutcome::Closed,
            }
        }
    }
}

fn apply_trigger(cache: &QueryCache, raw: &str) {
    match Trigger::from(raw.trim()) {
        Trigger::Unrecognized(value) => {
            tracing::trace!(trigger = %value, "ignoring unrecognized trigger");
        }
        trigger => {
            for key in trigger.affected_keys() {
                cache.invalidate(key);
            }
        }
    }
}

async fn shutdown_signal(rx: &mut watch::Receiver<bool>) {
    while !*rx.borrow() {
        // a dropped sender means the owner is gone; treat it as shutdown
        if rx.changed().await.is_err() {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::SinkExt;

    #[test]
    fn socket_url_swaps_scheme_and_appends_token() {
        let token = SessionToken::new("abc123");

        let url = derive_socket_url("http://registry.local:8080", &token).unwrap();
        assert_eq!(url.as_str(), "ws://registry.local:8080/?token=abc123");

        let url = derive_socket_url("https://registry.example.com/api", &token).unwrap();
        assert_eq!(url.as_str(), "wss://registry.example.com/api?token=abc123");
    }

    #[test]
    fn socket_url_rejects_non_http_schemes() {
        let token = SessionToken::new("t");
        assert!(matches!(
            derive_socket_url("ftp://registry.local", &token),
            Err(RelayError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            derive_socket_url("not a url", &token),
            Err(RelayError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn backoff_doubles_to_the_cap() {
        let mut backoff = Backoff::new(ReconnectPolicy {
            initial_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(30),
            max_consecutive_failures: 10,
        });

        let delays: Vec<Duration> = std::iter::from_fn(|| backoff.next_delay()).collect();
        assert_eq!(delays.len(), 10);
        assert_eq!(delays[0], Duration::from_millis(500));
        assert_eq!(delays[1], Duration::from_secs(1));
        assert_eq!(delays[2], Duration::from_secs(2));
        assert_eq!(delays[6], Duration::from_secs(30));
        assert_eq!(delays[9], Duration::from_secs(30));
    }

    #[test]
    fn backoff_resets_after_success() {
        let mut backoff = Backoff::new(ReconnectPolicy::default());
        backoff.next_delay();
        backoff.next_delay();
        backoff.reset();
        assert_eq!(backoff.next_delay(), Some(Duration::from_millis(500)));
    }

    #[test]
    fn trigger_key_mapping() {
        assert_eq!(Trigger::from("documents").affected_keys().len(), 4);
        assert_eq!(
            Trigger::from("transits").affected_keys(),
            vec![
                QueryKey::Documents(DocumentTab::IncomingTransit),
                QueryKey::Documents(DocumentTab::OutgoingTransit),
            ]
        );
        assert_eq!(
            Trigger::from("notifications").affected_keys(),
            vec![QueryKey::Notifications]
        );
        assert!(Trigger::from("reindex").affected_keys().is_empty());
    }

    #[tokio::test]
    async fn trigger_frames_invalidate_affected_queries_once() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            let mut ws = tokio_tungstenite::accept_async(socket).await.unwrap();
            // an unknown trigger first: it must cause no invalidation
            ws.send(Message::text("reindex")).await.unwrap();
            ws.send(Message::text("transits")).await.unwrap();
            // a repeat collapses into the pending re-fetch
            ws.send(Message::text("transits")).await.unwrap();
            ws.close(None).await.ok();
        });

        let (cache, mut refetch_rx) = QueryCache::new();
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let relay = InvalidationRelay::new(
            &format!("http://{addr}"),
            &SessionToken::new("t"),
            cache.clone(),
            ReconnectPolicy::default(),
            shutdown_rx,
        )
        .unwrap();
        let handle = tokio::spawn(relay.run());

        let mut keys = vec![
            refetch_rx.recv().await.unwrap(),
            refetch_rx.recv().await.unwrap(),
        ];
        keys.sort_by_key(|k| format!("{k:?}"));
        assert_eq!(
            keys,
            vec![
                QueryKey::Documents(DocumentTab::IncomingTransit),
                QueryKey::Documents(DocumentTab::OutgoingTransit),
            ]
        );
        // the unknown trigger and the repeated one scheduled nothing further
        assert!(refetch_rx.try_recv().is_err());

        shutdown_tx.send(true).unwrap();
        assert!(handle.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn breaker_trips_after_the_failure_budget() {
        let (cache, _refetch_rx) = QueryCache::new();
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);

        // nothing listens on this port; every connect attempt fails
        let relay = InvalidationRelay::new(
            "http://127.0.0.1:1",
            &SessionToken::new("t"),
            cache,
            ReconnectPolicy {
                initial_delay: Duration::from_millis(1),
                max_delay: Duration::from_millis(2),
                max_consecutive_failures: 3,
            },
            shutdown_rx,
        )
        .unwrap();

        match relay.run().await {
            Err(RelayError::RetriesExhausted { failures }) => assert_eq!(failures, 3),
            other => panic!("expected retries-exhausted, got {other:?}"),
        }
    }
}
