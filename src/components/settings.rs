//! Settings
//!
//! Profile edits go through the API; theme and avatar are purely local
//! preferences persisted to localStorage.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::console_error;
use crate::context::use_auth;
use crate::storage;
use crate::toast::use_toasts;

use super::ThemeSignal;

fn input_value(ev: &web_sys::Event) -> String {
    ev.target()
        .and_then(|t| t.dyn_ref::<web_sys::HtmlInputElement>().map(|i| i.value()))
        .unwrap_or_default()
}

#[component]
pub fn Settings() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let theme = use_context::<ThemeSignal>();

    let current = auth.user();
    let (name, set_name) = signal(current.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let (email, set_email) = signal(current.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let (avatar_url, set_avatar_url) = signal(storage::avatar().unwrap_or_default());
    let (saving, set_saving) = signal(false);

    let save_profile = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = name.get().trim().to_string();
        let email = email.get().trim().to_string();
        if name.is_empty() || email.is_empty() {
            toasts.error("Name and email are required");
            return;
        }
        set_saving.set(true);
        spawn_local(async move {
            let update = api::users::ProfileUpdate {
                name: name.clone(),
                email: email.clone(),
            };
            match api::users::update_profile(&update).await {
                Ok(resp) if resp.success => {
                    auth.apply_profile(name, email);
                    toasts.success("Profile updated");
                }
                other => {
                    if let Err(err) = other {
                        console_error(&format!("profile update failed: {err}"));
                    }
                    toasts.error("Failed to update profile");
                }
            }
            set_saving.set(false);
        });
    };

    let set_theme = move |value: &str| {
        storage::save_theme(value);
        if let Some(theme) = theme {
            theme.0.set(value.to_string());
        }
    };

    let save_avatar = move |_| {
        let url = avatar_url.get().trim().to_string();
        if url.is_empty() {
            storage::clear_avatar();
            toasts.success("Avatar cleared");
        } else {
            storage::save_avatar(&url);
            toasts.success("Avatar saved");
        }
    };

    view! {
        <div class="settings-page">
            <h1>"Settings"</h1>

            <section class="settings-section">
                <h2>"Profile"</h2>
                <form class="settings-form" on:submit=save_profile>
                    <label>
                        "Name"
                        <input
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(input_value(&ev))
                        />
                    </label>
                    <label>
                        "Email"
                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(input_value(&ev))
                        />
                    </label>
                    <button
                        class="btn btn-primary"
                        type="submit"
                        prop:disabled=move || saving.get()
                    >
                        {move || if saving.get() { "Saving..." } else { "Save profile" }}
                    </button>
                </form>
            </section>

            <section class="settings-section">
                <h2>"Appearance"</h2>
                <div class="theme-picker">
                    <button class="btn" on:click=move |_| set_theme("light")>"Light"</button>
                    <button class="btn" on:click=move |_| set_theme("dark")>"Dark"</button>
                </div>
            </section>

            <section class="settings-section">
                <h2>"Avatar"</h2>
                <p class="settings-hint">
                    "Paste an image URL, or leave it empty to fall back to your initial."
                </p>
                <div class="avatar-form">
                    <input
                        type="text"
                        placeholder="https://..."
                        prop:value=move || avatar_url.get()
                        on:input=move |ev| set_avatar_url.set(input_value(&ev))
                    />
                    <button class="btn" on:click=save_avatar>"Save avatar"</button>
                </div>
            </section>
        </div>
    }
}
