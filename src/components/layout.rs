//! Role Area Layouts
//!
//! Shell (sidebar + topbar) shared by the three role areas, plus the
//! per-area page switches.

use leptos::prelude::*;

use crate::models::Role;
use crate::route::{AdminPage, EmployeePage, LeaderPage};
use crate::storage;

use super::{
    AdminDashboard, CalendarPage, Dashboard, Leaders, ProjectScope, Projects, Settings, Sidebar,
    TaskBoardPage, TaskDetails, TaskScope, Teams, Topbar,
};

/// Live theme name, provided by `Layout` so the settings page can switch
/// it without a reload.
#[derive(Clone, Copy)]
pub struct ThemeSignal(pub RwSignal<String>);

#[component]
pub fn Layout(role: Role, children: Children) -> impl IntoView {
    let theme = ThemeSignal(RwSignal::new(storage::theme()));
    provide_context(theme);
    view! {
        <div class=move || format!("app-shell theme-{}", theme.0.get())>
            <Sidebar role=role/>
            <div class="app-main">
                <Topbar/>
                <main class="page">{children()}</main>
            </div>
        </div>
    }
}

#[component]
pub fn EmployeePageView(page: EmployeePage) -> impl IntoView {
    match page {
        EmployeePage::Dashboard => view! { <Dashboard/> }.into_any(),
        EmployeePage::Tasks => view! { <TaskBoardPage scope=TaskScope::Mine/> }.into_any(),
        EmployeePage::TaskDetails(id) => view! { <TaskDetails task_id=id/> }.into_any(),
        EmployeePage::Teams => view! { <Teams/> }.into_any(),
        EmployeePage::Calendar => view! { <CalendarPage/> }.into_any(),
        EmployeePage::Settings => view! { <Settings/> }.into_any(),
    }
}

#[component]
pub fn LeaderPageView(page: LeaderPage) -> impl IntoView {
    match page {
        LeaderPage::Dashboard => view! { <Dashboard/> }.into_any(),
        LeaderPage::Projects => view! { <Projects scope=ProjectScope::Mine/> }.into_any(),
        LeaderPage::Tasks => view! { <TaskBoardPage scope=TaskScope::All/> }.into_any(),
        LeaderPage::Teams => view! { <Teams/> }.into_any(),
        LeaderPage::Calendar => view! { <CalendarPage/> }.into_any(),
        LeaderPage::Settings => view! { <Settings/> }.into_any(),
    }
}

#[component]
pub fn AdminPageView(page: AdminPage) -> impl IntoView {
    match page {
        AdminPage::Dashboard => view! { <AdminDashboard/> }.into_any(),
        AdminPage::Projects => view! { <Projects scope=ProjectScope::All/> }.into_any(),
        AdminPage::Leaders => view! { <Leaders/> }.into_any(),
        AdminPage::Calendar => view! { <CalendarPage/> }.into_any(),
        AdminPage::Settings => view! { <Settings/> }.into_any(),
    }
}
