//! Signup Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::route::{self, Route};
use crate::toast::use_toasts;

fn input_value(ev: &web_sys::Event) -> String {
    ev.target()
        .and_then(|t| t.dyn_ref::<web_sys::HtmlInputElement>().map(|i| i.value()))
        .unwrap_or_default()
}

#[component]
pub fn Signup() -> impl IntoView {
    let toasts = use_toasts();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name_value = name.get();
        let email_value = email.get();
        let password_value = password.get();
        if name_value.is_empty() || email_value.is_empty() || password_value.is_empty() {
            toasts.error("Please fill in all fields");
            return;
        }
        set_submitting.set(true);
        spawn_local(async move {
            let registration = api::auth::Registration {
                name: name_value,
                email: email_value,
                password: password_value,
            };
            match api::auth::register(&registration).await {
                Ok(resp) if resp.success => {
                    toasts.success("Account created, you can sign in now");
                    route::navigate(&Route::Login);
                }
                Ok(resp) => {
                    toasts.error(resp.message.unwrap_or_else(|| "Signup failed".to_string()));
                }
                Err(err) => toasts.error(err.user_message()),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=submit>
                <h1>"Create account"</h1>

                <label class="field">
                    <span>"Full name"</span>
                    <input
                        type="text"
                        prop:value=move || name.get()
                        prop:disabled=move || submitting.get()
                        on:input=move |ev| set_name.set(input_value(&ev))
                    />
                </label>

                <label class="field">
                    <span>"Email address"</span>
                    <input
                        type="email"
                        prop:value=move || email.get()
                        prop:disabled=move || submitting.get()
                        on:input=move |ev| set_email.set(input_value(&ev))
                    />
                </label>

                <label class="field">
                    <span>"Password"</span>
                    <input
                        type="password"
                        prop:value=move || password.get()
                        prop:disabled=move || submitting.get()
                        on:input=move |ev| set_password.set(input_value(&ev))
                    />
                </label>

                <button type="submit" class="btn btn-primary" prop:disabled=move || submitting.get()>
                    {move || if submitting.get() { "Creating..." } else { "Sign up" }}
                </button>

                <p class="auth-switch">
                    "Already registered? "
                    <a href=Route::Login.href()>"Sign in"</a>
                </p>
            </form>
        </div>
    }
}
