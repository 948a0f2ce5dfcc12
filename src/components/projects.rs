//! Projects
//!
//! Leader view lists the leader's own projects and edits their rosters;
//! admin view lists every project and can create or delete them. Roster
//! edits and deletes are optimistic with a refetch on failure.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::console_error;
use crate::deadlines;
use crate::models::{Project, User, UserRef};
use crate::toast::use_toasts;

/// Which project collection the page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectScope {
    /// Projects led by the current user (leader view, roster editing).
    Mine,
    /// Every project (admin view, create and delete).
    All,
}

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
pub fn Projects(scope: ProjectScope) -> impl IntoView {
    let toasts = use_toasts();

    let (projects, set_projects) = signal(Vec::<Project>::new());
    let (loading, set_loading) = signal(true);
    let (team, set_team) = signal(Vec::<UserRef>::new());
    let (leaders, set_leaders) = signal(Vec::<User>::new());

    let fetch_projects = move || {
        spawn_local(async move {
            let result = match scope {
                ProjectScope::Mine => api::projects::my_projects().await,
                ProjectScope::All => api::projects::all().await,
            };
            match result {
                Ok(resp) if resp.success => set_projects.set(resp.projects),
                Ok(_) => toasts.error("Failed to load projects"),
                Err(err) => {
                    console_error(&format!("project fetch failed: {err}"));
                    toasts.error("Failed to load projects");
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        fetch_projects();
        match scope {
            // roster candidates for the add-member select
            ProjectScope::Mine => spawn_local(async move {
                match api::users::my_team().await {
                    Ok(resp) if resp.success => set_team.set(resp.team),
                    Ok(_) => {}
                    Err(err) => console_error(&format!("team fetch failed: {err}")),
                }
            }),
            // leader choices for the create form
            ProjectScope::All => spawn_local(async move {
                match api::users::leaders().await {
                    Ok(resp) if resp.success => set_leaders.set(resp.leaders),
                    Ok(_) => {}
                    Err(err) => console_error(&format!("leader fetch failed: {err}")),
                }
            }),
        }
    });

    let add_member = move |project_id: String, member_id: String| {
        if member_id.is_empty() {
            return;
        }
        let member = team.with(|t| t.iter().find(|m| m.id == member_id).cloned());
        let Some(member) = member else { return };
        set_projects.update(|projects| {
            if let Some(project) = projects.iter_mut().find(|p| p.id == project_id) {
                if !project.team_members.iter().any(|m| m.id == member_id) {
                    project.team_members.push(member);
                }
            }
        });
        spawn_local(async move {
            match api::projects::add_team_member(&project_id, &member_id).await {
                Ok(resp) if resp.success => toasts.success("Team member added"),
                other => {
                    if let Err(err) = other {
                        console_error(&format!("add member failed: {err}"));
                    }
                    toasts.error("Failed to add team member");
                    fetch_projects();
                }
            }
        });
    };

    let remove_member = move |project_id: String, member_id: String| {
        set_projects.update(|projects| {
            if let Some(project) = projects.iter_mut().find(|p| p.id == project_id) {
                project.team_members.retain(|m| m.id != member_id);
            }
        });
        spawn_local(async move {
            match api::projects::remove_team_member(&project_id, &member_id).await {
                Ok(resp) if resp.success => toasts.success("Team member removed"),
                other => {
                    if let Err(err) = other {
                        console_error(&format!("remove member failed: {err}"));
                    }
                    toasts.error("Failed to remove team member");
                    fetch_projects();
                }
            }
        });
    };

    let delete_project = move |project_id: String| {
        set_projects.update(|projects| projects.retain(|p| p.id != project_id));
        spawn_local(async move {
            match api::projects::delete(&project_id).await {
                Ok(resp) if resp.success => toasts.success("Project deleted"),
                other => {
                    if let Err(err) = other {
                        console_error(&format!("project delete failed: {err}"));
                    }
                    toasts.error("Failed to delete project");
                    fetch_projects();
                }
            }
        });
    };

    let project_card = move |project: Project| {
        let deadline = deadlines::display_date(&project.deadline, deadlines::local_offset());
        let leader = project
            .leader
            .as_ref()
            .map(|l| l.name.clone())
            .unwrap_or_else(|| "Unassigned".into());
        let progress = project.progress.clamp(0.0, 100.0);
        let card_id = project.id.clone();
        let select_id = project.id.clone();
        let delete_id = project.id.clone();
        let members = project.team_members.clone();

        view! {
            <div class="project-card">
                <div class="project-head">
                    <h3>{project.name.clone()}</h3>
                    <span class=format!("badge status-{}", project.status.as_str())>
                        {project.status.label()}
                    </span>
                </div>
                <p class="project-description">{project.description.clone()}</p>
                <dl class="project-meta">
                    <dt>"Domain"</dt>
                    <dd>{project.domain.clone()}</dd>
                    <dt>"Leader"</dt>
                    <dd>{leader}</dd>
                    <dt>"Deadline"</dt>
                    <dd>{deadline}</dd>
                </dl>

                <div class="progress-track">
                    <div class="progress-fill" style=format!("width: {progress}%")></div>
                </div>
                <p class="progress-label">{format!("{progress:.0}% complete")}</p>

                <div class="project-team">
                    <h4>{format!("Team ({})", members.len())}</h4>
                    {members
                        .iter()
                        .map(|member| {
                            let member_id = member.id.clone();
                            let project_id = card_id.clone();
                            view! {
                                <span class="team-chip">
                                    {member.name.clone()}
                                    {(scope == ProjectScope::Mine)
                                        .then(|| {
                                            view! {
                                                <button
                                                    class="chip-remove"
                                                    on:click=move |_| remove_member(
                                                        project_id.clone(),
                                                        member_id.clone(),
                                                    )
                                                >
                                                    "×"
                                                </button>
                                            }
                                        })}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>

                {(scope == ProjectScope::Mine)
                    .then(|| {
                        let project_id = select_id.clone();
                        let current: Vec<String> =
                            project.team_members.iter().map(|m| m.id.clone()).collect();
                        view! {
                            <select
                                class="member-select"
                                on:change=move |ev| add_member(
                                    project_id.clone(),
                                    select_value(&ev),
                                )
                            >
                                <option value="" prop:selected=true>"Add team member..."</option>
                                {move || {
                                    team.get()
                                        .into_iter()
                                        .filter(|m| !current.contains(&m.id))
                                        .map(|m| {
                                            view! { <option value=m.id.clone()>{m.name.clone()}</option> }
                                        })
                                        .collect_view()
                                }}
                            </select>
                        }
                    })}

                {(scope == ProjectScope::All)
                    .then(|| {
                        view! {
                            <button
                                class="btn btn-danger"
                                on:click=move |_| delete_project(delete_id.clone())
                            >
                                "Delete project"
                            </button>
                        }
                    })}
            </div>
        }
    };

    view! {
        <div class="projects-page">
            <div class="projects-header">
                <h1>"Projects"</h1>
                {(scope == ProjectScope::All)
                    .then(|| view! { <CreateProjectForm leaders=leaders on_created=fetch_projects/> })}
            </div>

            {move || {
                if loading.get() {
                    view! { <p class="page-loading">"Loading projects..."</p> }.into_any()
                } else if projects.with(|p| p.is_empty()) {
                    view! { <p class="empty-hint">"No projects yet."</p> }.into_any()
                } else {
                    projects
                        .get()
                        .into_iter()
                        .map(project_card)
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn CreateProjectForm<F>(leaders: ReadSignal<Vec<User>>, on_created: F) -> impl IntoView
where
    F: Fn() + Copy + Send + 'static,
{
    let toasts = use_toasts();

    let (open, set_open) = signal(false);
    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (domain, set_domain) = signal(String::new());
    let (leader, set_leader) = signal(String::new());
    let (deadline, set_deadline) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if name.with(|n| n.trim().is_empty()) || leader.with(|l| l.is_empty()) {
            toasts.error("Project name and leader are required");
            return;
        }
        let body = api::projects::NewProject {
            name: name.get().trim().to_string(),
            description: description.get(),
            domain: domain.get(),
            leader: leader.get(),
            deadline: deadline.get(),
        };
        spawn_local(async move {
            match api::projects::create(&body).await {
                Ok(resp) if resp.success => {
                    toasts.success("Project created");
                    set_open.set(false);
                    set_name.set(String::new());
                    set_description.set(String::new());
                    set_domain.set(String::new());
                    set_leader.set(String::new());
                    set_deadline.set(String::new());
                    on_created();
                }
                other => {
                    if let Err(err) = other {
                        console_error(&format!("project create failed: {err}"));
                    }
                    toasts.error("Failed to create project");
                }
            }
        });
    };

    view! {
        <div class="create-project">
            <button class="btn btn-primary" on:click=move |_| set_open.update(|o| *o = !*o)>
                {move || if open.get() { "Cancel" } else { "New project" }}
            </button>

            {move || {
                open.get()
                    .then(|| {
                        view! {
                            <form class="project-form" on:submit=submit>
                                <input
                                    type="text"
                                    placeholder="Project name"
                                    prop:value=move || name.get()
                                    on:input=move |ev| set_name.set(input_value(&ev))
                                />
                                <input
                                    type="text"
                                    placeholder="Description"
                                    prop:value=move || description.get()
                                    on:input=move |ev| set_description.set(input_value(&ev))
                                />
                                <input
                                    type="text"
                                    placeholder="Domain"
                                    prop:value=move || domain.get()
                                    on:input=move |ev| set_domain.set(input_value(&ev))
                                />
                                <select on:change=move |ev| set_leader.set(select_value(&ev))>
                                    <option value="">"Select a leader..."</option>
                                    {move || {
                                        leaders
                                            .get()
                                            .into_iter()
                                            .map(|l| {
                                                view! {
                                                    <option value=l.id.clone()>{l.name.clone()}</option>
                                                }
                                            })
                                            .collect_view()
                                    }}
                                </select>
                                <input
                                    type="date"
                                    prop:value=move || deadline.get()
                                    on:input=move |ev| set_deadline.set(input_value(&ev))
                                />
                                <button class="btn btn-primary" type="submit">"Create"</button>
                            </form>
                        }
                    })
            }}
        </div>
    }
}
