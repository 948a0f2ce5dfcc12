//! Topbar
//!
//! User chip plus the notification bell. The unread count refreshes on
//! mount and every 30 seconds; the interval handle is dropped on cleanup
//! so no timer outlives this view. Opening the panel refreshes the list on
//! demand. Per-notification actions are optimistic: mutate the store
//! first, call the API, resynchronize from the server on failure.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::console_error;
use crate::context::use_auth;
use crate::storage;
use crate::store::{
    store_mark_all_read, store_mark_read, store_remove_notification, store_remove_read,
    store_set_notifications, store_set_unread, use_app_store, AppStateStoreFields,
};
use crate::toast::use_toasts;

const POLL_MS: u32 = 30_000;
const PANEL_LIMIT: u32 = 10;

#[component]
pub fn Topbar() -> impl IntoView {
    let auth = use_auth();
    let store = use_app_store();
    let toasts = use_toasts();

    let (panel_open, set_panel_open) = signal(false);
    let (panel_loading, set_panel_loading) = signal(false);

    let fetch_unread = move || {
        spawn_local(async move {
            match api::notifications::unread_count().await {
                Ok(resp) if resp.success => store_set_unread(&store, resp.unread_count),
                Ok(_) => {}
                Err(err) => console_error(&format!("unread count poll failed: {err}")),
            }
        });
    };

    let fetch_notifications = move || {
        set_panel_loading.set(true);
        spawn_local(async move {
            match api::notifications::list(PANEL_LIMIT).await {
                Ok(resp) if resp.success => store_set_notifications(&store, resp.notifications),
                Ok(_) => {}
                Err(err) => console_error(&format!("notification fetch failed: {err}")),
            }
            set_panel_loading.set(false);
        });
    };

    // initial badge + poll, cancelled when this view unmounts
    fetch_unread();
    let poll = StoredValue::new_local(Some(Interval::new(POLL_MS, move || fetch_unread())));
    on_cleanup(move || poll.set_value(None));

    let toggle_panel = move |_| {
        let opening = !panel_open.get();
        set_panel_open.set(opening);
        if opening {
            fetch_notifications();
        }
    };

    let mark_read = move |id: String| {
        store_mark_read(&store, &id);
        spawn_local(async move {
            match api::notifications::mark_read(&id).await {
                Ok(resp) if resp.success => {}
                other => {
                    if let Err(err) = other {
                        console_error(&format!("mark read failed: {err}"));
                    }
                    toasts.error("Failed to mark notification as read");
                    fetch_notifications();
                    fetch_unread();
                }
            }
        });
    };

    let mark_all_read = move |_| {
        store_mark_all_read(&store);
        spawn_local(async move {
            match api::notifications::mark_all_read().await {
                Ok(resp) if resp.success => toasts.success("All notifications marked as read"),
                _ => {
                    toasts.error("Failed to mark all as read");
                    fetch_notifications();
                    fetch_unread();
                }
            }
        });
    };

    let clear_read = move |_| {
        store_remove_read(&store);
        spawn_local(async move {
            match api::notifications::delete_read().await {
                Ok(resp) if resp.success => {}
                _ => {
                    toasts.error("Failed to clear read notifications");
                    fetch_notifications();
                }
            }
        });
    };

    let remove_notification = move |id: String| {
        store_remove_notification(&store, &id);
        spawn_local(async move {
            match api::notifications::delete(&id).await {
                Ok(resp) if resp.success => {}
                _ => {
                    toasts.error("Failed to delete notification");
                    fetch_notifications();
                    fetch_unread();
                }
            }
        });
    };

    let badge = move || {
        let count = store.unread_count().get();
        if count > 9 {
            "9+".to_string()
        } else {
            count.to_string()
        }
    };

    let user_name = move || auth.user().map(|u| u.name).unwrap_or_else(|| "User".into());
    let initial = move || {
        user_name()
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "U".into())
    };

    view! {
        <header class="topbar">
            <div class="topbar-spacer"></div>

            <div class="topbar-bell">
                <button class="bell-button" on:click=toggle_panel>
                    "🔔"
                    {move || {
                        (store.unread_count().get() > 0)
                            .then(|| view! { <span class="bell-badge">{badge()}</span> })
                    }}
                </button>

                {move || {
                    panel_open
                        .get()
                        .then(|| {
                            view! {
                                <div class="notification-panel">
                                    <div class="panel-header">
                                        <h3>
                                            "Notifications "
                                            {move || {
                                                let count = store.unread_count().get();
                                                (count > 0).then(|| format!("({count})"))
                                            }}
                                        </h3>
                                        <button class="panel-action" on:click=mark_all_read>
                                            "Mark all read"
                                        </button>
                                        <button class="panel-action" on:click=clear_read>
                                            "Clear read"
                                        </button>
                                    </div>
                                    {move || {
                                        if panel_loading.get() {
                                            view! { <p class="panel-empty">"Loading..."</p> }
                                                .into_any()
                                        } else if store.notifications().get().is_empty() {
                                            view! { <p class="panel-empty">"No notifications."</p> }
                                                .into_any()
                                        } else {
                                            store
                                                .notifications()
                                                .get()
                                                .into_iter()
                                                .map(|notification| {
                                                    let read_id = notification.id.clone();
                                                    let delete_id = notification.id.clone();
                                                    view! {
                                                        <div
                                                            class="notification-item"
                                                            class:unread=!notification.read
                                                            on:click=move |_| mark_read(read_id.clone())
                                                        >
                                                            <div class="notification-body">
                                                                <p class="notification-title">
                                                                    {notification.title.clone()}
                                                                </p>
                                                                <p class="notification-message">
                                                                    {notification.message.clone()}
                                                                </p>
                                                            </div>
                                                            <button
                                                                class="notification-delete"
                                                                on:click=move |ev| {
                                                                    ev.stop_propagation();
                                                                    remove_notification(delete_id.clone());
                                                                }
                                                            >
                                                                "×"
                                                            </button>
                                                        </div>
                                                    }
                                                })
                                                .collect_view()
                                                .into_any()
                                        }
                                    }}
                                </div>
                            }
                        })
                }}
            </div>

            <div class="topbar-user">
                {move || match storage::avatar() {
                    Some(data_url) => {
                        view! { <img class="avatar" src=data_url alt="avatar"/> }.into_any()
                    }
                    None => view! { <div class="avatar avatar-initial">{initial()}</div> }.into_any(),
                }}
                <span class="topbar-name">{user_name}</span>
            </div>
        </header>
    }
}
