//! Teams
//!
//! Read-only roster of the current user's team.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::console_error;
use crate::models::UserRef;
use crate::toast::use_toasts;

#[component]
pub fn Teams() -> impl IntoView {
    let toasts = use_toasts();

    let (team, set_team) = signal(Vec::<UserRef>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::users::my_team().await {
                Ok(resp) if resp.success => set_team.set(resp.team),
                Ok(_) => toasts.error("Failed to load team"),
                Err(err) => {
                    console_error(&format!("team fetch failed: {err}"));
                    toasts.error("Failed to load team");
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="teams-page">
            <h1>"My team"</h1>

            {move || {
                if loading.get() {
                    view! { <p class="page-loading">"Loading team..."</p> }.into_any()
                } else if team.with(|t| t.is_empty()) {
                    view! { <p class="empty-hint">"You are not part of a team yet."</p> }
                        .into_any()
                } else {
                    view! {
                        <div class="team-grid">
                            {team
                                .get()
                                .into_iter()
                                .map(|member| {
                                    let initial = member
                                        .name
                                        .chars()
                                        .next()
                                        .map(|c| c.to_uppercase().to_string())
                                        .unwrap_or_else(|| "?".into());
                                    view! {
                                        <div class="team-card">
                                            <div class="avatar avatar-initial">{initial}</div>
                                            <div>
                                                <p class="team-name">{member.name.clone()}</p>
                                                <p class="team-email">{member.email.clone()}</p>
                                                {(!member.domain.is_empty())
                                                    .then(|| {
                                                        view! {
                                                            <span class="badge domain-badge">
                                                                {member.domain.clone()}
                                                            </span>
                                                        }
                                                    })}
                                            </div>
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
