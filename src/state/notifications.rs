// Notification manager.
// Ordered notification list plus a derived unread counter. Read marks
// are pure in-memory reductions by whole-record replacement; `refresh`
// re-fetches authoritative state.

use log::warn;

use crate::api::endpoints::SocialApi;
use crate::api::types::NotificationItem;

/// Manager for the notification list.
pub struct NotificationManager<A> {
    api: A,
    items: Vec<NotificationItem>,
    unread_count: usize,
    pub last_error: Option<String>,
}

impl<A: SocialApi> NotificationManager<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            items: Vec::new(),
            unread_count: 0,
            last_error: None,
        }
    }

    pub fn notifications(&self) -> &[NotificationItem] {
        &self.items
    }

    pub fn unread_count(&self) -> usize {
        self.unread_count
    }

    /// Replace the list wholesale and recompute the unread count.
    pub fn set_notifications(&mut self, items: Vec<NotificationItem>) {
        self.items = items;
        self.recount();
    }

    /// Fetch the full list (not paginated). Failure leaves the current
    /// list in place.
    pub async fn refresh(&mut self) {
        match self.api.fetch_notifications().await {
            Ok(items) => {
                self.set_notifications(items);
                self.last_error = None;
            }
            Err(err) => {
                warn!("notification refresh failed: {}", err);
                self.last_error = Some(err.to_string());
            }
        }
    }

    /// Mark one notification read. Unknown ids are a no-op.
    pub fn mark_as_read(&mut self, id: &str) {
        if let Some(index) = self.items.iter().position(|n| n.id == id) {
            self.items[index] = self.items[index].as_read();
            self.recount();
        }
    }

    /// Mark every notification read.
    pub fn mark_all_as_read(&mut self) {
        self.items = self.items.iter().map(NotificationItem::as_read).collect();
        self.recount();
    }

    fn recount(&mut self) {
        self.unread_count = self.items.iter().filter(|n| !n.is_read).count();
    }
}
