//! Task Details
//!
//! Full view of a single task with its comment thread. Posting a comment
//! is optimistic: the comment appears in the thread immediately with the
//! current user as author, and the thread is replaced with the server's
//! copy once the POST resolves. On failure the task is refetched.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::console_error;
use crate::context::use_auth;
use crate::deadlines;
use crate::models::{Comment, Task, UserRef};
use crate::route::{EmployeePage, Route};
use crate::toast::use_toasts;

#[component]
pub fn TaskDetails(task_id: String) -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let task_id = StoredValue::new(task_id);

    let (task, set_task) = signal(None::<Task>);
    let (loading, set_loading) = signal(true);
    let (comment_text, set_comment_text) = signal(String::new());

    let fetch_task = move || {
        spawn_local(async move {
            match api::tasks::get(&task_id.get_value()).await {
                Ok(resp) if resp.success => set_task.set(resp.task),
                Ok(_) => set_task.set(None),
                Err(err) => {
                    console_error(&format!("task fetch failed: {err}"));
                    set_task.set(None);
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| fetch_task());

    let submit_comment = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = comment_text.get().trim().to_string();
        if text.is_empty() {
            return;
        }

        // show the comment right away, attributed to the current user
        let author = auth.user().map(|u| UserRef {
            id: u.id,
            name: u.name,
            email: u.email,
            ..Default::default()
        });
        set_task.update(|t| {
            if let Some(t) = t {
                t.comments.push(Comment {
                    author,
                    text: text.clone(),
                    created_at: String::new(),
                });
            }
        });
        set_comment_text.set(String::new());

        spawn_local(async move {
            match api::tasks::add_comment(&task_id.get_value(), &text).await {
                Ok(resp) if resp.success => {
                    // adopt the server's copy of the thread
                    if let Some(fresh) = resp.task {
                        set_task.set(Some(fresh));
                    }
                }
                other => {
                    if let Err(err) = other {
                        console_error(&format!("comment post failed: {err}"));
                    }
                    toasts.error("Failed to add comment");
                    fetch_task();
                }
            }
        });
    };

    let on_input = move |ev: web_sys::Event| {
        if let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_ref::<web_sys::HtmlTextAreaElement>().cloned())
        {
            set_comment_text.set(input.value());
        }
    };

    view! {
        <div class="task-details">
            {move || {
                if loading.get() {
                    return view! { <p class="page-loading">"Loading task..."</p> }.into_any();
                }
                match task.get() {
                    None => {
                        view! {
                            <div class="not-found-card">
                                <h1>"Task not found"</h1>
                                <p>"This task may have been deleted or you no longer have access to it."</p>
                                <a class="btn" href=Route::Employee(EmployeePage::Tasks).href()>
                                    "Back to tasks"
                                </a>
                            </div>
                        }
                            .into_any()
                    }
                    Some(task) => {
                        let due = deadlines::display_date(&task.due_date, deadlines::local_offset());
                        let start = deadlines::display_date(&task.start_date, deadlines::local_offset());
                        let project = task
                            .project
                            .as_ref()
                            .map(|p| p.name.clone())
                            .unwrap_or_else(|| "No project".into());
                        let assigned_by = task
                            .assigned_by
                            .as_ref()
                            .map(|u| u.name.clone())
                            .unwrap_or_else(|| "Unknown".into());
                        view! {
                            <a class="back-link" href=Route::Employee(EmployeePage::Tasks).href()>
                                "← Back to tasks"
                            </a>

                            <div class="details-card">
                                <div class="details-head">
                                    <h1>{task.title.clone()}</h1>
                                    <div class="task-badges">
                                        <span class=format!("badge priority-{}", task.priority.as_str())>
                                            {task.priority.label()}
                                        </span>
                                        <span class=format!("badge status-{}", task.status.as_str())>
                                            {task.status.label()}
                                        </span>
                                    </div>
                                </div>

                                <p class="details-description">{task.description.clone()}</p>

                                <dl class="details-meta">
                                    <dt>"Project"</dt>
                                    <dd>{project}</dd>
                                    <dt>"Assigned by"</dt>
                                    <dd>{assigned_by}</dd>
                                    <dt>"Assigned to"</dt>
                                    <dd>
                                        {task
                                            .assigned_to
                                            .iter()
                                            .map(|m| m.name.clone())
                                            .collect::<Vec<_>>()
                                            .join(", ")}
                                    </dd>
                                    <dt>"Start date"</dt>
                                    <dd>{start}</dd>
                                    <dt>"Due date"</dt>
                                    <dd>{due}</dd>
                                </dl>
                            </div>

                            <section class="comments">
                                <h2>{format!("Comments ({})", task.comments.len())}</h2>
                                {if task.comments.is_empty() {
                                    view! { <p class="empty-hint">"No comments yet."</p> }.into_any()
                                } else {
                                    task.comments
                                        .iter()
                                        .map(|comment| {
                                            let author = comment
                                                .author
                                                .as_ref()
                                                .map(|a| a.name.clone())
                                                .unwrap_or_else(|| "Unknown".into());
                                            let when = deadlines::display_date(
                                                &comment.created_at,
                                                deadlines::local_offset(),
                                            );
                                            view! {
                                                <div class="comment">
                                                    <div class="comment-head">
                                                        <span class="comment-author">{author}</span>
                                                        <span class="comment-date">{when}</span>
                                                    </div>
                                                    <p class="comment-text">{comment.text.clone()}</p>
                                                </div>
                                            }
                                        })
                                        .collect_view()
                                        .into_any()
                                }}

                                <form class="comment-form" on:submit=submit_comment>
                                    <textarea
                                        placeholder="Write a comment..."
                                        prop:value=move || comment_text.get()
                                        on:input=on_input
                                    ></textarea>
                                    <button class="btn btn-primary" type="submit">
                                        "Add comment"
                                    </button>
                                </form>
                            </section>
                        }
                            .into_any()
                    }
                }
            }}
        </div>
    }
}
