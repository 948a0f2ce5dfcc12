//! Role-Aware Sidebar

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_auth;
use crate::models::Role;
use crate::route::{self, AdminPage, EmployeePage, LeaderPage, Route};

fn links_for(role: Role) -> Vec<(&'static str, Route)> {
    match role {
        Role::Employee => vec![
            ("Dashboard", Route::Employee(EmployeePage::Dashboard)),
            ("Tasks", Route::Employee(EmployeePage::Tasks)),
            ("Teams", Route::Employee(EmployeePage::Teams)),
            ("Calendar", Route::Employee(EmployeePage::Calendar)),
            ("Settings", Route::Employee(EmployeePage::Settings)),
        ],
        Role::Leader => vec![
            ("Dashboard", Route::Leader(LeaderPage::Dashboard)),
            ("Projects", Route::Leader(LeaderPage::Projects)),
            ("Tasks", Route::Leader(LeaderPage::Tasks)),
            ("Teams", Route::Leader(LeaderPage::Teams)),
            ("Calendar", Route::Leader(LeaderPage::Calendar)),
            ("Settings", Route::Leader(LeaderPage::Settings)),
        ],
        Role::Admin => vec![
            ("Dashboard", Route::Admin(AdminPage::Dashboard)),
            ("Projects", Route::Admin(AdminPage::Projects)),
            ("Leaders", Route::Admin(AdminPage::Leaders)),
            ("Calendar", Route::Admin(AdminPage::Calendar)),
            ("Settings", Route::Admin(AdminPage::Settings)),
        ],
    }
}

#[component]
pub fn Sidebar(role: Role) -> impl IntoView {
    let auth = use_auth();

    let logout = move |_| {
        spawn_local(async move {
            auth.logout().await;
            route::navigate(&Route::Login);
        });
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">"TaskHub"</div>
            <nav class="sidebar-nav">
                {links_for(role)
                    .into_iter()
                    .map(|(label, target)| {
                        view! { <a class="sidebar-link" href=target.href()>{label}</a> }
                    })
                    .collect_view()}
            </nav>
            <button class="sidebar-logout" on:click=logout>"Log out"</button>
        </aside>
    }
}
