//! Task Board
//!
//! Status-bucketed task overview with optimistic status changes: the card
//! moves to its new section immediately, then the PATCH goes out. On
//! failure the whole board is refetched, discarding the optimistic move.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::board::TaskBoard;
use crate::console_error;
use crate::deadlines::{self, Bucket};
use crate::models::{Task, TaskStatus};
use crate::route::{EmployeePage, Route};
use crate::toast::use_toasts;

use super::AssignTaskForm;

/// Which task collection the board shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskScope {
    /// Tasks assigned to the current user.
    Mine,
    /// Every visible task (leader view; includes the blocked status).
    All,
}

#[component]
pub fn TaskBoardPage(scope: TaskScope) -> impl IntoView {
    let toasts = use_toasts();

    let (board, set_board) = signal(TaskBoard::default());
    let (loading, set_loading) = signal(true);
    let (assigning, set_assigning) = signal(false);

    let fetch_tasks = move || {
        set_loading.set(true);
        spawn_local(async move {
            let result = match scope {
                TaskScope::Mine => api::tasks::my_tasks().await,
                TaskScope::All => api::tasks::all(&[]).await,
            };
            match result {
                Ok(resp) if resp.success => {
                    set_board.update(|b| {
                        b.replace(
                            &resp.tasks,
                            deadlines::today_local(),
                            deadlines::local_offset(),
                        )
                    });
                }
                Ok(_) => toasts.error("Failed to load tasks"),
                Err(err) => {
                    console_error(&format!("task fetch failed: {err}"));
                    toasts.error("Failed to load tasks");
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| fetch_tasks());

    let change_status = move |task_id: String, new_status: TaskStatus| {
        let applied = set_board
            .try_update(|b| {
                b.begin_status_change(
                    &task_id,
                    new_status,
                    deadlines::today_local(),
                    deadlines::local_offset(),
                )
            })
            .flatten();
        if applied.is_none() {
            return;
        }
        spawn_local(async move {
            match api::tasks::update_status(&task_id, new_status).await {
                Ok(resp) if resp.success => {
                    toasts.success(format!("Task status updated to {}", new_status.label()));
                    set_board.update(|b| b.finish(&task_id));
                }
                other => {
                    if let Err(err) = other {
                        console_error(&format!("status update failed: {err}"));
                    }
                    toasts.error("Failed to update task status");
                    set_board.update(|b| b.finish(&task_id));
                    // discard the optimistic move by refetching everything
                    fetch_tasks();
                }
            }
        });
    };

    let delete_task = move |task_id: String| {
        let removed = set_board.try_update(|b| b.remove(&task_id)).flatten();
        if removed.is_none() {
            return;
        }
        spawn_local(async move {
            match api::tasks::delete(&task_id).await {
                Ok(resp) if resp.success => toasts.success("Task deleted"),
                other => {
                    if let Err(err) = other {
                        console_error(&format!("task delete failed: {err}"));
                    }
                    toasts.error("Failed to delete task");
                    // bring the optimistically removed card back
                    fetch_tasks();
                }
            }
        });
    };

    let section = move |title: &'static str, bucket: Bucket| {
        let tasks = move || {
            board.with(|b| match bucket {
                Bucket::Pending => b.buckets.pending.clone(),
                Bucket::InProgress => b.buckets.in_progress.clone(),
                Bucket::Completed => b.buckets.completed.clone(),
                Bucket::Overdue => b.buckets.overdue.clone(),
            })
        };
        view! {
            <section class="board-section">
                <div class="section-header">
                    <h2>{title}</h2>
                    <span class="section-count">{move || tasks().len()}</span>
                </div>
                {move || {
                    let entries = tasks();
                    if entries.is_empty() {
                        view! { <p class="empty-hint">"No tasks in this section"</p> }.into_any()
                    } else {
                        entries
                            .into_iter()
                            .map(|task| {
                                view! {
                                    <TaskCard
                                        task=task
                                        scope=scope
                                        change_status=change_status
                                        on_delete=delete_task
                                        board=board
                                    />
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </section>
        }
    };

    view! {
        <div class="board-page">
            <div class="board-header">
                <div>
                    <h1>"Task overview"</h1>
                    <p>"Review and manage assigned tasks."</p>
                </div>
                <div class="board-actions">
                    {(scope == TaskScope::All)
                        .then(|| {
                            view! {
                                <button
                                    class="btn btn-primary"
                                    on:click=move |_| set_assigning.update(|a| *a = !*a)
                                >
                                    {move || if assigning.get() { "Close form" } else { "Assign task" }}
                                </button>
                            }
                        })}
                    <button class="btn" on:click=move |_| fetch_tasks() prop:disabled=move || loading.get()>
                        "Refresh"
                    </button>
                </div>
            </div>

            {move || {
                assigning
                    .get()
                    .then(|| {
                        view! {
                            <AssignTaskForm on_saved=move || {
                                set_assigning.set(false);
                                fetch_tasks();
                            }/>
                        }
                    })
            }}

            {move || {
                if loading.get() {
                    view! { <p class="page-loading">"Loading tasks..."</p> }.into_any()
                } else {
                    view! {
                        {section("Pending tasks", Bucket::Pending)}
                        {section("In progress", Bucket::InProgress)}
                        {section("Completed tasks", Bucket::Completed)}
                        {section("Overdue", Bucket::Overdue)}
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn TaskCard<F, D>(
    task: Task,
    scope: TaskScope,
    change_status: F,
    on_delete: D,
    board: ReadSignal<TaskBoard>,
) -> impl IntoView
where
    F: Fn(String, TaskStatus) + Copy + 'static,
    D: Fn(String) + Copy + 'static,
{
    let task_id = task.id.clone();
    let select_id = task.id.clone();
    let delete_id = task.id.clone();
    let updating = move || board.with(|b| b.is_updating(&task_id));

    let statuses: &[TaskStatus] = match scope {
        TaskScope::Mine => &[
            TaskStatus::Pending,
            TaskStatus::InProgress,
            TaskStatus::Completed,
        ],
        TaskScope::All => &[
            TaskStatus::Pending,
            TaskStatus::InProgress,
            TaskStatus::Completed,
            TaskStatus::Blocked,
        ],
    };

    let on_select = move |ev: web_sys::Event| {
        let value = ev
            .target()
            .and_then(|t| t.dyn_ref::<web_sys::HtmlSelectElement>().map(|s| s.value()))
            .unwrap_or_default();
        change_status(select_id.clone(), TaskStatus::parse(&value));
    };

    let due = deadlines::display_date(&task.due_date, deadlines::local_offset());
    let start = deadlines::display_date(&task.start_date, deadlines::local_offset());
    let project = task
        .project
        .as_ref()
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "No project".into());
    // the details route lives in the employee area only
    let details = (scope == TaskScope::Mine)
        .then(|| Route::Employee(EmployeePage::TaskDetails(task.id.clone())));
    let current_status = task.status;

    view! {
        <div class="task-card">
            <div class="task-card-head">
                <h3>{task.title.clone()}</h3>
                <div class="task-badges">
                    <span class=format!("badge priority-{}", task.priority.as_str())>
                        {task.priority.label()}
                    </span>
                    <span class=format!("badge status-{}", task.status.as_str())>
                        {task.status.label()}
                    </span>
                </div>
            </div>

            <p class="task-project">{project}</p>
            {(!task.description.is_empty())
                .then(|| view! { <p class="task-description">{task.description.clone()}</p> })}

            {(!task.assigned_to.is_empty())
                .then(|| {
                    view! {
                        <p class="task-assignees">
                            "Assigned to: "
                            {task
                                .assigned_to
                                .iter()
                                .map(|m| m.name.clone())
                                .collect::<Vec<_>>()
                                .join(", ")}
                        </p>
                    }
                })}

            <div class="task-dates">
                <span>{format!("Start: {start}")}</span>
                <span>{format!("Due: {due}")}</span>
            </div>

            <div class="task-actions">
                {details
                    .map(|route| {
                        view! { <a class="btn btn-primary" href=route.href()>"View details"</a> }
                    })}
                <select on:change=on_select prop:disabled=updating>
                    {statuses
                        .iter()
                        .map(|status| {
                            view! {
                                <option
                                    value=status.as_str()
                                    prop:selected=*status == current_status
                                >
                                    {status.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                {(scope == TaskScope::All)
                    .then(|| {
                        view! {
                            <button
                                class="btn btn-danger"
                                on:click=move |_| on_delete(delete_id.clone())
                            >
                                "Delete"
                            </button>
                        }
                    })}
            </div>
        </div>
    }
}
