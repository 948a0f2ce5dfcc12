//! Dashboard
//!
//! Greeting, status-bucket counters, and the next few upcoming deadlines
//! for the current user's tasks.

use chrono::{Local, Timelike};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::console_error;
use crate::context::use_auth;
use crate::deadlines::{self, TaskBuckets};
use crate::toast::use_toasts;

fn greeting() -> &'static str {
    let hour = Local::now().hour();
    if hour < 12 {
        "Good morning"
    } else if hour < 17 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();

    let (buckets, set_buckets) = signal(TaskBuckets::default());
    let (loading, set_loading) = signal(true);

    let fetch_tasks = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::tasks::my_tasks().await {
                Ok(resp) if resp.success => {
                    set_buckets.set(deadlines::categorize_tasks(
                        &resp.tasks,
                        deadlines::today_local(),
                        deadlines::local_offset(),
                    ));
                }
                Ok(_) => toasts.error("Failed to load tasks"),
                Err(err) => {
                    console_error(&format!("dashboard fetch failed: {err}"));
                    toasts.error("Failed to load tasks");
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| fetch_tasks());

    let stats = move || {
        buckets.with(|b| {
            vec![
                ("Total tasks", b.total()),
                ("In progress", b.in_progress.len()),
                ("Completed", b.completed.len()),
                ("Overdue", b.overdue.len()),
            ]
        })
    };

    let upcoming = move || {
        buckets.with(|b| {
            deadlines::upcoming_deadlines(
                b,
                deadlines::today_local(),
                deadlines::local_offset(),
                3,
            )
        })
    };

    view! {
        <div class="dashboard">
            <h1>
                {move || {
                    let name = auth.user().map(|u| u.name).unwrap_or_else(|| "User".into());
                    format!("{}, {}!", greeting(), name)
                }}
            </h1>

            {move || {
                if loading.get() {
                    view! { <p class="page-loading">"Loading tasks..."</p> }.into_any()
                } else {
                    view! {
                        <div class="stat-grid">
                            {stats()
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

                        <section class="upcoming">
                            <h2>"Upcoming deadlines"</h2>
                            {move || {
                                let entries = upcoming();
                                if entries.is_empty() {
                                    view! { <p class="empty-hint">"Nothing due soon."</p> }
                                        .into_any()
                                } else {
                                    entries
                                        .into_iter()
                                        .map(|task| {
                                            let due = deadlines::display_date(
                                                &task.due_date,
                                                deadlines::local_offset(),
                                            );
                                            let project = task
                                                .project
                                                .as_ref()
                                                .map(|p| p.name.clone())
                                                .unwrap_or_else(|| "No project".into());
                                            view! {
                                                <div class="upcoming-item">
                                                    <div>
                                                        <p class="upcoming-title">{task.title.clone()}</p>
                                                        <p class="upcoming-project">{project}</p>
                                                    </div>
                                                    <span class="upcoming-due">{due}</span>
                                                </div>
                                            }
                                        })
                                        .collect_view()
                                        .into_any()
                                }
                            }}
                        </section>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
