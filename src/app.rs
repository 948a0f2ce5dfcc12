//! App Root
//!
//! Provides the auth, toast, and notification contexts, keeps the current
//! route in a signal fed by `hashchange`, and switches between the public
//! pages and the three guarded role areas.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

use crate::components::{
    AdminPageView, EmployeePageView, Landing, Layout, LeaderPageView, Login, NotFound, Protected,
    Signup, Unauthorized,
};
use crate::context::AuthContext;
use crate::models::Role;
use crate::route::{self, Route, ADMIN_ONLY, EMPLOYEE_ONLY, LEADER_ONLY};
use crate::store::AppState;
use crate::toast::{ToastHost, Toasts};

#[component]
pub fn App() -> impl IntoView {
    let auth = AuthContext::new(signal(None), signal(true));
    provide_context(auth);
    provide_context(Toasts::new(signal(Vec::new())));
    provide_context(Store::new(AppState::default()));

    let (route, set_route) = signal(route::current());
    if let Some(window) = web_sys::window() {
        let listener = Closure::<dyn FnMut()>::new(move || set_route.set(route::current()));
        let _ = window
            .add_event_listener_with_callback("hashchange", listener.as_ref().unchecked_ref());
        // stays alive for the whole session
        listener.forget();
    }

    spawn_local(async move { auth.restore_session().await });

    view! {
        <ToastHost/>
        {move || match route.get() {
            Route::Landing => view! { <Landing/> }.into_any(),
            Route::Login => view! { <Login/> }.into_any(),
            Route::Signup => view! { <Signup/> }.into_any(),
            Route::Unauthorized => view! { <Unauthorized/> }.into_any(),
            Route::NotFound => view! { <NotFound/> }.into_any(),

            Route::Employee(page) => {
                let page = StoredValue::new(page);
                view! {
                    <Protected roles=EMPLOYEE_ONLY>
                        <Layout role=Role::Employee>
                            <EmployeePageView page=page.get_value()/>
                        </Layout>
                    </Protected>
                }
                .into_any()
            }

            Route::Leader(page) => view! {
                <Protected roles=LEADER_ONLY>
                    <Layout role=Role::Leader>
                        <LeaderPageView page=page/>
                    </Layout>
                </Protected>
            }
            .into_any(),

            Route::Admin(page) => view! {
                <Protected roles=ADMIN_ONLY>
                    <Layout role=Role::Admin>
                        <AdminPageView page=page/>
                    </Layout>
                </Protected>
            }
            .into_any(),
        }}
    }
}
