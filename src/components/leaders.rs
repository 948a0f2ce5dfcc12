//! Leaders
//!
//! Admin list of leader accounts. Removal is optimistic: the row
//! disappears immediately and comes back via refetch if the delete fails.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::console_error;
use crate::models::User;
use crate::toast::use_toasts;

#[component]
pub fn Leaders() -> impl IntoView {
    let toasts = use_toasts();

    let (leaders, set_leaders) = signal(Vec::<User>::new());
    let (loading, set_loading) = signal(true);

    let fetch_leaders = move || {
        spawn_local(async move {
            match api::users::leaders().await {
                Ok(resp) if resp.success => set_leaders.set(resp.leaders),
                Ok(_) => toasts.error("Failed to load leaders"),
                Err(err) => {
                    console_error(&format!("leader fetch failed: {err}"));
                    toasts.error("Failed to load leaders");
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| fetch_leaders());

    let remove_leader = move |user_id: String| {
        set_leaders.update(|leaders| leaders.retain(|l| l.id != user_id));
        spawn_local(async move {
            match api::users::delete(&user_id).await {
                Ok(resp) if resp.success => toasts.success("Leader removed"),
                other => {
                    if let Err(err) = other {
                        console_error(&format!("leader delete failed: {err}"));
                    }
                    toasts.error("Failed to remove leader");
                    fetch_leaders();
                }
            }
        });
    };

    view! {
        <div class="leaders-page">
            <h1>"Leaders"</h1>

            {move || {
                if loading.get() {
                    view! { <p class="page-loading">"Loading leaders..."</p> }.into_any()
                } else if leaders.with(|l| l.is_empty()) {
                    view! { <p class="empty-hint">"No leaders registered."</p> }.into_any()
                } else {
                    view! {
                        <table class="leaders-table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Email"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {leaders
                                    .get()
                                    .into_iter()
                                    .map(|leader| {
                                        let id = leader.id.clone();
                                        view! {
                                            <tr>
                                                <td>{leader.name.clone()}</td>
                                                <td>{leader.email.clone()}</td>
                                                <td>
                                                    <button
                                                        class="btn btn-danger"
                                                        on:click=move |_| remove_leader(id.clone())
                                                    >
                                                        "Remove"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
