//! Assign Task Form
//!
//! Leader-only inline form on the task board: pick one of the leader's own
//! projects, assign any of that project's team members, set dates and a
//! priority. Switching projects clears the member selection since the
//! roster changes with it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::console_error;
use crate::deadlines;
use crate::models::{Priority, Project};
use crate::toast::use_toasts;

const PRIORITIES: [Priority; 4] = [
    Priority::Low,
    Priority::Medium,
    Priority::High,
    Priority::Urgent,
];

fn input_value(ev: &web_sys::Event) -> String {
    ev.target()
        .and_then(|t| t.dyn_ref::<web_sys::HtmlInputElement>().map(|i| i.value()))
        .unwrap_or_default()
}

fn select_value(ev: &web_sys::Event) -> String {
    ev.target()
        .and_then(|t| t.dyn_ref::<web_sys::HtmlSelectElement>().map(|s| s.value()))
        .unwrap_or_default()
}

#[component]
pub fn AssignTaskForm<F>(on_saved: F) -> impl IntoView
where
    F: Fn() + Copy + 'static,
{
    let toasts = use_toasts();

    let (projects, set_projects) = signal(Vec::<Project>::new());
    let (project_id, set_project_id) = signal(String::new());
    let (members, set_members) = signal(Vec::<String>::new());
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (start_date, set_start_date) =
        signal(deadlines::today_local().format("%Y-%m-%d").to_string());
    let (due_date, set_due_date) = signal(String::new());
    let (priority, set_priority) = signal(Priority::Medium);
    let (saving, set_saving) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::projects::my_projects().await {
                Ok(resp) if resp.success => set_projects.set(resp.projects),
                Ok(_) => toasts.error("Failed to load projects"),
                Err(err) => {
                    console_error(&format!("project fetch failed: {err}"));
                    toasts.error("Failed to load projects");
                }
            }
        });
    });

    // roster of the currently selected project
    let team = move || {
        projects.with(|ps| {
            ps.iter()
                .find(|p| p.id == project_id.get())
                .map(|p| p.team_members.clone())
                .unwrap_or_default()
        })
    };

    let select_project = move |ev: web_sys::Event| {
        set_project_id.set(select_value(&ev));
        set_members.set(Vec::new());
    };

    let toggle_member = move |id: String| {
        set_members.update(|m| {
            if let Some(pos) = m.iter().position(|x| *x == id) {
                m.remove(pos);
            } else {
                m.push(id);
            }
        });
    };

    let toggle_all = move |_| {
        let all: Vec<String> = team().iter().map(|m| m.id.clone()).collect();
        set_members.update(|m| {
            if m.len() == all.len() {
                m.clear();
            } else {
                *m = all;
            }
        });
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if title.with(|t| t.trim().is_empty()) {
            toasts.error("Please enter a task title");
            return;
        }
        if project_id.with(|p| p.is_empty()) {
            toasts.error("Please select a project");
            return;
        }
        if members.with(|m| m.is_empty()) {
            toasts.error("Please assign at least one team member");
            return;
        }
        if due_date.with(|d| d.is_empty()) {
            toasts.error("Please select a due date");
            return;
        }
        let body = api::tasks::NewTask {
            title: title.get().trim().to_string(),
            description: description.get(),
            project: project_id.get(),
            assigned_to: members.get(),
            start_date: start_date.get(),
            due_date: due_date.get(),
            priority: priority.get(),
        };
        set_saving.set(true);
        spawn_local(async move {
            match api::tasks::create(&body).await {
                Ok(resp) if resp.success => {
                    toasts.success("Task created and assigned");
                    on_saved();
                }
                other => {
                    if let Err(err) = other {
                        console_error(&format!("task create failed: {err}"));
                    }
                    toasts.error("Failed to create task");
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <form class="assign-form" on:submit=submit>
            <h2>"Assign a new task"</h2>

            <label class="field">
                <span>"Task title"</span>
                <input
                    type="text"
                    placeholder="What needs to be done?"
                    prop:value=move || title.get()
                    prop:disabled=move || saving.get()
                    on:input=move |ev| set_title.set(input_value(&ev))
                />
            </label>

            <label class="field">
                <span>"Project"</span>
                <select on:change=select_project prop:disabled=move || saving.get()>
                    <option value="" prop:selected=move || project_id.with(|p| p.is_empty())>
                        "Choose a project..."
                    </option>
                    {move || {
                        projects
                            .get()
                            .into_iter()
                            .map(|project| {
                                let pid = project.id.clone();
                                view! {
                                    <option
                                        value=project.id.clone()
                                        prop:selected=move || project_id.get() == pid
                                    >
                                        {format!("{} - {}", project.name, project.domain)}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </label>

            <label class="field">
                <span>"Description"</span>
                <textarea
                    placeholder="Provide detailed instructions..."
                    prop:value=move || description.get()
                    prop:disabled=move || saving.get()
                    on:input=move |ev| {
                        if let Some(area) = ev
                            .target()
                            .and_then(|t| t.dyn_ref::<web_sys::HtmlTextAreaElement>().cloned())
                        {
                            set_description.set(area.value());
                        }
                    }
                ></textarea>
            </label>

            <div class="field-row">
                <label class="field">
                    <span>"Start date"</span>
                    <input
                        type="date"
                        prop:value=move || start_date.get()
                        prop:disabled=move || saving.get()
                        on:input=move |ev| set_start_date.set(input_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Due date"</span>
                    <input
                        type="date"
                        min=move || start_date.get()
                        prop:value=move || due_date.get()
                        prop:disabled=move || saving.get()
                        on:input=move |ev| set_due_date.set(input_value(&ev))
                    />
                </label>
            </div>

            <div class="field">
                <span>"Priority"</span>
                <div class="priority-picker">
                    {PRIORITIES
                        .iter()
                        .map(|p| {
                            let p = *p;
                            view! {
                                <button
                                    type="button"
                                    class="priority-option"
                                    class:active=move || priority.get() == p
                                    prop:disabled=move || saving.get()
                                    on:click=move |_| set_priority.set(p)
                                >
                                    {p.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="field">
                <div class="members-header">
                    <span>
                        "Assign team members "
                        {move || {
                            let total = team().len();
                            (total > 0)
                                .then(|| {
                                    format!("({}/{} selected)", members.with(|m| m.len()), total)
                                })
                        }}
                    </span>
                    {move || {
                        (!team().is_empty())
                            .then(|| {
                                view! {
                                    <button type="button" class="panel-action" on:click=toggle_all>
                                        {move || {
                                            if members.with(|m| m.len()) == team().len() {
                                                "Deselect all"
                                            } else {
                                                "Select all"
                                            }
                                        }}
                                    </button>
                                }
                            })
                    }}
                </div>
                <div class="member-list">
                    {move || {
                        let options = team();
                        if project_id.with(|p| p.is_empty()) {
                            view! { <p class="empty-hint">"Select a project first"</p> }.into_any()
                        } else if options.is_empty() {
                            view! {
                                <p class="empty-hint">
                                    "No team members in this project. Add team members first."
                                </p>
                            }
                                .into_any()
                        } else {
                            options
                                .into_iter()
                                .map(|member| {
                                    let check_id = member.id.clone();
                                    let toggle_id = member.id.clone();
                                    let secondary = if member.domain.is_empty() {
                                        member.email.clone()
                                    } else {
                                        member.domain.clone()
                                    };
                                    view! {
                                        <label class="member-option">
                                            <input
                                                type="checkbox"
                                                prop:checked=move || {
                                                    members.with(|m| m.contains(&check_id))
                                                }
                                                prop:disabled=move || saving.get()
                                                on:change=move |_| toggle_member(toggle_id.clone())
                                            />
                                            <span class="member-name">{member.name.clone()}</span>
                                            <span class="member-domain">{secondary}</span>
                                        </label>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>
            </div>

            <button class="btn btn-primary" type="submit" prop:disabled=move || saving.get()>
                {move || if saving.get() { "Creating task..." } else { "Confirm and assign" }}
            </button>
        </form>
    }
}
