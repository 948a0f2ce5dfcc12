//! Fallback Pages

use leptos::prelude::*;

use crate::route::Route;

#[component]
pub fn Unauthorized() -> impl IntoView {
    view! {
        <div class="fallback-page">
            <h1>"403 - Unauthorized"</h1>
            <p>"You don't have permission to access this page."</p>
            <a class="fallback-link" href=Route::Login.href()>"Go to Login"</a>
        </div>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="fallback-page">
            <h1>"404 - Page not found"</h1>
            <p>"The page you are looking for does not exist."</p>
            <a class="fallback-link" href=Route::Landing.href()>"Back to home"</a>
        </div>
    }
}
