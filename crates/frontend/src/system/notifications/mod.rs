//! Client-side notification center
//!
//! Unread order notifications are polled from the backend every 30 seconds
//! and mirrored to localStorage so the bell survives reloads. Only the 50
//! newest entries are kept.
//! TODO: switch to server-sent events once the backend grows a stream
//! endpoint; polling is the contract today.

use contracts::domain::notification::Notification;
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::window;

use crate::shared::api_utils;

const STORAGE_KEY: &str = "notifications";
const POLL_PERIOD_MS: u32 = 30_000;
const KEEP_NEWEST: usize = 50;

async fn fetch_unread(token: &str) -> Result<Vec<Notification>, String> {
    api_utils::get_json("/notifications/unread", token).await
}

/// Fold freshly fetched notifications into the known list: already-known
/// ids are skipped, new ones go to the front, and the list is capped.
fn merge_new(known: &[Notification], incoming: Vec<Notification>) -> Vec<Notification> {
    let mut merged: Vec<Notification> = incoming
        .into_iter()
        .filter(|candidate| !known.iter().any(|n| n.id == candidate.id))
        .collect();
    merged.extend_from_slice(known);
    merged.truncate(KEEP_NEWEST);
    merged
}

#[derive(Clone, Copy)]
pub struct NotificationCenter {
    notifications: RwSignal<Vec<Notification>>,
    poller: StoredValue<Option<Interval>, LocalStorage>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self {
            notifications: RwSignal::new(load()),
            poller: StoredValue::new_local(None),
        }
    }

    pub fn notifications(&self) -> ReadSignal<Vec<Notification>> {
        self.notifications.read_only()
    }

    pub fn unread_count(&self) -> Signal<usize> {
        let notifications = self.notifications;
        Signal::derive(move || notifications.with(|all| all.iter().filter(|n| !n.read).count()))
    }

    /// Start the 30 s poll. Restarting replaces the previous interval, so
    /// at most one poller runs per browser context.
    pub fn start_polling(&self, token: String) {
        let this = *self;
        self.stop_polling();
        let interval = Interval::new(POLL_PERIOD_MS, move || {
            let token = token.clone();
            spawn_local(async move {
                match fetch_unread(&token).await {
                    Ok(incoming) => this.absorb(incoming),
                    Err(e) => log::debug!("bildirimler alınamadı: {}", e),
                }
            });
        });
        self.poller.set_value(Some(interval));
    }

    pub fn stop_polling(&self) {
        self.poller.update_value(|slot| {
            if let Some(interval) = slot.take() {
                interval.cancel();
            }
        });
    }

    pub fn mark_as_read(&self, id: &str, token: Option<String>) {
        self.notifications.update(|all| {
            if let Some(found) = all.iter_mut().find(|n| n.id == id) {
                found.read = true;
            }
        });
        self.persist();

        // Best effort; the local flag is already set.
        if let Some(token) = token {
            let id = id.to_string();
            spawn_local(async move {
                let path = format!("/notifications/read?notificationId={}", id);
                if let Err(e) = api_utils::post_empty(&path, &token).await {
                    log::debug!("bildirim okundu bilgisi gönderilemedi: {}", e);
                }
            });
        }
    }

    pub fn mark_all_read(&self) {
        self.notifications.update(|all| {
            for notification in all.iter_mut() {
                notification.read = true;
            }
        });
        self.persist();
    }

    pub fn clear(&self) {
        self.notifications.set(Vec::new());
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }

    fn absorb(&self, incoming: Vec<Notification>) {
        if incoming.is_empty() {
            return;
        }
        self.notifications
            .update(|all| *all = merge_new(all, incoming));
        self.persist();
    }

    fn persist(&self) {
        let Some(storage) = local_storage() else {
            return;
        };
        let json = self
            .notifications
            .with_untracked(|all| serde_json::to_string(all).unwrap_or_default());
        let _ = storage.set_item(STORAGE_KEY, &json);
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn load() -> Vec<Notification> {
    let Some(storage) = local_storage() else {
        return Vec::new();
    };
    storage
        .get_item(STORAGE_KEY)
        .ok()
        .flatten()
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(id: &str) -> Notification {
        Notification {
            id: id.to_string(),
            order_id: None,
            message: format!("sipariş {}", id),
            account_id: None,
            delivery_branch_id: None,
            created_at: "2026-08-07T00:00:00Z".to_string(),
            read: false,
        }
    }

    #[test]
    fn merge_skips_known_ids_and_prepends_new() {
        let known = vec![notification("a"), notification("b")];
        let merged = merge_new(&known, vec![notification("b"), notification("c")]);
        let ids: Vec<&str> = merged.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn merge_caps_at_newest_fifty() {
        let known: Vec<Notification> = (0..KEEP_NEWEST)
            .map(|i| notification(&format!("k{}", i)))
            .collect();
        let merged = merge_new(&known, vec![notification("new")]);
        assert_eq!(merged.len(), KEEP_NEWEST);
        assert_eq!(merged[0].id, "new");
        assert!(!merged.iter().any(|n| n.id == format!("k{}", KEEP_NEWEST - 1)));
    }
}
