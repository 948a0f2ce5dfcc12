//! Admin Dashboard
//!
//! Org-wide counters from the stats endpoint.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::console_error;
use crate::models::DashboardStats;
use crate::toast::use_toasts;

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let toasts = use_toasts();

    let (stats, set_stats) = signal(DashboardStats::default());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::users::dashboard_stats().await {
                Ok(resp) if resp.success => set_stats.set(resp.stats),
                Ok(_) => toasts.error("Failed to load statistics"),
                Err(err) => {
                    console_error(&format!("stats fetch failed: {err}"));
                    toasts.error("Failed to load statistics");
                }
            }
            set_loading.set(false);
        });
    });

    let cards = move || {
        stats.with(|s| {
            vec![
                ("Total users", s.total_users),
                ("Leaders", s.total_leaders),
                ("Projects", s.total_projects),
                ("Tasks", s.total_tasks),
                ("Completed tasks", s.completed_tasks),
            ]
        })
    };

    view! {
        <div class="dashboard">
            <h1>"Organization overview"</h1>

            {move || {
                if loading.get() {
                    view! { <p class="page-loading">"Loading statistics..."</p> }.into_any()
                } else {
                    view! {
                        <div class="stat-grid">
                            {cards()
                                .into_iter()
                                .map(|(title, value)| {
                                    view! {
                                        <div class="stat-card">
                                            <p class="stat-title">{title}</p>
                                            <p class="stat-value">{value}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
