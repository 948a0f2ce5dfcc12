//! Transient Notifications
//!
//! Auto-dismissing success/error toasts, provided via context the same way
//! the auth state is. Each push schedules its own removal.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a toast stays on screen.
const TOAST_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Toast queue provided via context.
#[derive(Clone, Copy)]
pub struct Toasts {
    toasts: ReadSignal<Vec<Toast>>,
    set_toasts: WriteSignal<Vec<Toast>>,
    next_id: StoredValue<u32>,
}

impl Toasts {
    pub fn new(toasts: (ReadSignal<Vec<Toast>>, WriteSignal<Vec<Toast>>)) -> Self {
        Self {
            toasts: toasts.0,
            set_toasts: toasts.1,
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id.wrapping_add(1));
        self.set_toasts.update(|toasts| {
            toasts.push(Toast { id, kind, message });
        });

        let set_toasts = self.set_toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_MS).await;
            set_toasts.update(|toasts| toasts.retain(|t| t.id != id));
        });
    }
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

/// Renders the toast stack in a fixed corner.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<Toasts>().toasts;
    view! {
        <div class="toast-stack">
            {move || {
                toasts
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let kind_class = match toast.kind {
                            ToastKind::Success => "toast toast-success",
                            ToastKind::Error => "toast toast-error",
                        };
                        view! { <div class=kind_class>{toast.message}</div> }
                    })
                    .collect_view()
            }}
        </div>
    }
}
