use model::Notification;
use tokio::sync::watch;

/// Sidebar visibility, shared by the navigation chrome and whatever toggles
/// it.
///
/// A plain struct the caller constructs and passes around (by `Arc` where
/// shared); deliberately not a global. Views subscribe to re-render on
/// change.
#[derive(Debug)]
pub struct NavStore {
    visible: watch::Sender<bool>,
}

impl NavStore {
    pub fn new(visible: bool) -> Self {
        Self {
            visible: watch::channel(visible).0,
        }
    }

    pub fn show(&self) {
        self.visible.send_replace(true);
    }

    pub fn hide(&self) {
        self.visible.send_replace(false);
    }

    pub fn toggle(&self) {
        self.visible.send_modify(|v| *v = !*v);
    }

    pub fn is_visible(&self) -> bool {
        *self.visible.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.visible.subscribe()
    }
}

impl Default for NavStore {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Unseen-notification count behind the badge in the header.
///
/// Derived from the notifications query result whenever it resolves; the
/// counter itself never talks to the network.
#[derive(Debug, Default)]
pub struct NotificationCounter {
    unseen: watch::Sender<usize>,
}

impl NotificationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the badge from the latest notifications payload
    pub fn observe(&self, notifications: &[Notification]) {
        let unseen = notifications.iter().filter(|n| !n.seen).count();
        self.unseen.send_replace(unseen);
    }

    pub fn count(&self) -> usize {
        *self.unseen.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.unseen.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(id: i64, seen: bool) -> Notification {
        Notification {
            notification_id: id,
            message: format!("document {id} moved"),
            document_id: Some(id),
            seen,
            created_at: None,
        }
    }

    #[test]
    fn nav_store_toggles_and_notifies() {
        let nav = NavStore::default();
        let mut sub = nav.subscribe();
        assert!(nav.is_visible());

        nav.toggle();
        assert!(!nav.is_visible());
        assert!(sub.has_changed().unwrap());

        nav.show();
        assert!(nav.is_visible());
        nav.hide();
        assert!(!nav.is_visible());
    }

    #[test]
    fn counter_tracks_unseen_only() {
        let counter = NotificationCounter::new();
        counter.observe(&[
            notification(1, false),
            notification(2, true),
            notification(3, false),
        ]);
        assert_eq!(counter.count(), 2);

        counter.observe(&[notification(1, true), notification(2, true)]);
        assert_eq!(counter.count(), 0);
    }
}
