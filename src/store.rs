//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the
//! notification state shared between the topbar badge and the panel; task
//! and project collections stay view-local because each page refetches its
//! own copy.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Notification;

/// Shared notification state with field-level reactivity.
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Latest notifications, newest first.
    pub notifications: Vec<Notification>,
    /// Unread badge count, polled independently of the list.
    pub unread_count: u32,
}

/// Type alias for the store.
pub type AppStore = Store<AppState>;

/// Get the app store from context.
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the notification list from a fetch.
pub fn store_set_notifications(store: &AppStore, notifications: Vec<Notification>) {
    store.notifications().set(notifications);
}

/// Replace the unread badge count from a poll.
pub fn store_set_unread(store: &AppStore, count: u32) {
    store.unread_count().set(count);
}

/// Optimistically mark one notification read and drop the badge count.
pub fn store_mark_read(store: &AppStore, notification_id: &str) {
    let mut was_unread = false;
    if let Some(n) = store
        .notifications()
        .write()
        .iter_mut()
        .find(|n| n.id == notification_id)
    {
        was_unread = !n.read;
        n.read = true;
    }
    if was_unread {
        store.unread_count().update(|c| *c = c.saturating_sub(1));
    }
}

/// Optimistically mark everything read.
pub fn store_mark_all_read(store: &AppStore) {
    store
        .notifications()
        .write()
        .iter_mut()
        .for_each(|n| n.read = true);
    store.unread_count().set(0);
}

/// Optimistically remove one notification.
pub fn store_remove_notification(store: &AppStore, notification_id: &str) {
    let mut removed_unread = false;
    store.notifications().write().retain(|n| {
        if n.id == notification_id {
            removed_unread = !n.read;
            false
        } else {
            true
        }
    });
    if removed_unread {
        store.unread_count().update(|c| *c = c.saturating_sub(1));
    }
}

/// Drop every already-read notification from the list.
pub fn store_remove_read(store: &AppStore) {
    store.notifications().write().retain(|n| !n.read);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_notification(id: &str, read: bool) -> Notification {
        Notification {
            id: id.to_string(),
            title: format!("Notification {id}"),
            message: String::new(),
            read,
            created_at: String::new(),
        }
    }

    fn make_store(items: Vec<Notification>) -> AppStore {
        let unread = items.iter().filter(|n| !n.read).count() as u32;
        Store::new(AppState {
            notifications: items,
            unread_count: unread,
        })
    }

    #[test]
    fn mark_read_decrements_the_badge_exactly_once() {
        let store = make_store(vec![
            make_notification("n1", false),
            make_notification("n2", true),
        ]);
        store_mark_read(&store, "n1");
        assert_eq!(store.unread_count().get(), 0);
        // already read: a second click leaves the badge alone
        store_mark_read(&store, "n1");
        assert_eq!(store.unread_count().get(), 0);
        assert!(store.notifications().get().iter().all(|n| n.read));
    }

    #[test]
    fn removing_an_unread_notification_adjusts_the_badge() {
        let store = make_store(vec![
            make_notification("n1", false),
            make_notification("n2", true),
        ]);
        store_remove_notification(&store, "n2");
        assert_eq!(store.unread_count().get(), 1);
        store_remove_notification(&store, "n1");
        assert_eq!(store.unread_count().get(), 0);
        assert!(store.notifications().get().is_empty());
    }

    #[test]
    fn remove_read_keeps_unread_items_and_the_badge() {
        let store = make_store(vec![
            make_notification("n1", false),
            make_notification("n2", true),
            make_notification("n3", true),
        ]);
        store_remove_read(&store);
        let remaining = store.notifications().get();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, "n1");
        assert_eq!(store.unread_count().get(), 1);
    }
}
