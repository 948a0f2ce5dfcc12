//! Landing Page

use leptos::prelude::*;

use crate::route::Route;

#[component]
pub fn Landing() -> impl IntoView {
    view! {
        <div class="landing">
            <p class="landing-kicker">"Task Management System"</p>
            <h1>"Secure workspace access"</h1>
            <p class="landing-copy">
                "Manage assigned tasks, deadlines, and execution flow based on your role."
            </p>
            <div class="landing-actions">
                <a class="btn btn-primary" href=Route::Login.href()>"Sign in"</a>
                <a class="btn" href=Route::Signup.href()>"Create account"</a>
            </div>
        </div>
    }
}
