//! Protected Route Component
//!
//! Gates a subtree on the session: renders nothing but a placeholder while
//! the boot-time restore runs, the children once access is granted, and
//! otherwise redirects to the login or unauthorized view. Protected
//! content never flashes before the restore completes.

use leptos::prelude::*;

use crate::context::use_auth;
use crate::models::Role;
use crate::route::{self, Route};
use crate::session::{check_access, Access};

#[component]
pub fn Protected(roles: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let access = Memo::new(move |_| check_access(&auth.session(), roles));

    Effect::new(move |_| match access.get() {
        Access::NotLoggedIn => route::navigate(&Route::Login),
        Access::Forbidden => route::navigate(&Route::Unauthorized),
        Access::Loading | Access::Granted => {}
    });

    view! {
        {move || match access.get() {
            Access::Granted => children().into_any(),
            Access::Loading => {
                view! {
                    <div class="route-loading">
                        <p>"Loading..."</p>
                    </div>
                }
                .into_any()
            }
            Access::NotLoggedIn | Access::Forbidden => ().into_any(),
        }}
    }
}
