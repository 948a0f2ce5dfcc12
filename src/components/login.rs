//! Login Page
//!
//! Credential form with the optional admin access key. Login failures stay
//! on the page as a toast; success routes to the role's dashboard.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::context::use_auth;
use crate::route::{self, Route};
use crate::session::LoginOutcome;
use crate::toast::use_toasts;

fn input_value(ev: &web_sys::Event) -> String {
    ev.target()
        .and_then(|t| t.dyn_ref::<web_sys::HtmlInputElement>().map(|i| i.value()))
        .unwrap_or_default()
}

#[component]
pub fn Login() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (access_key, set_access_key) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get();
        let password_value = password.get();
        if email_value.is_empty() || password_value.is_empty() {
            toasts.error("Please enter email and password");
            return;
        }
        let key = access_key.get();
        set_submitting.set(true);
        spawn_local(async move {
            let credentials = api::auth::Credentials {
                email: email_value,
                password: password_value,
                access_key: (!key.is_empty()).then_some(key),
            };
            match auth.login(credentials).await {
                LoginOutcome::Success { user, .. } => {
                    toasts.success(format!("Welcome back, {}!", user.name));
                    route::navigate(&Route::home_for(user.role));
                }
                LoginOutcome::Failure(message) => toasts.error(message),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=submit>
                <h1>"Sign in"</h1>
                <p class="auth-subtitle">"Use your organization credentials to continue"</p>

                <label class="field">
                    <span>"Email address"</span>
                    <input
                        type="email"
                        placeholder="name@company.com"
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

                <label class="field">
                    <span>"Access key (admins only)"</span>
                    <input
                        type="password"
                        prop:value=move || access_key.get()
                        prop:disabled=move || submitting.get()
                        on:input=move |ev| set_access_key.set(input_value(&ev))
                    />
                </label>

                <button type="submit" class="btn btn-primary" prop:disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                </button>

                <p class="auth-switch">
                    "No account yet? "
                    <a href=Route::Signup.href()>"Sign up"</a>
                </p>
            </form>
        </div>
    }
}
