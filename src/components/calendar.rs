//! Calendar
//!
//! Month grid over the union of task due dates and project deadlines. Days
//! carrying at least one deadline get a dot; selecting a day lists its
//! deadlines and the personal notes pinned to it. Notes live only in
//! localStorage.

use chrono::{Datelike, NaiveDate};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::console_error;
use crate::context::use_auth;
use crate::deadlines::{self, DeadlineSource};
use crate::models::{Project, Role, Task};
use crate::storage::{self, CalendarNote};
use crate::toast::use_toasts;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Cells for a Sunday-first month grid: leading `None` padding up to the
/// first weekday, then one `Some(date)` per day of the month.
fn month_grid(year: i32, month: u32) -> Vec<Option<NaiveDate>> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let (next_y, next_m) = next_month(year, month);
    let days = NaiveDate::from_ymd_opt(next_y, next_m, 1)
        .map(|next_first| (next_first - first).num_days() as u32)
        .unwrap_or(0);

    let mut cells = Vec::with_capacity(42);
    cells.extend(std::iter::repeat(None).take(first.weekday().num_days_from_sunday() as usize));
    cells.extend((1..=days).map(|day| NaiveDate::from_ymd_opt(year, month, day)));
    cells
}

fn month_label(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_default()
}

#[component]
pub fn CalendarPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();

    let today = deadlines::today_local();
    let (month, set_month) = signal((today.year(), today.month()));
    let (selected, set_selected) = signal(Some(today));

    let (tasks, set_tasks) = signal(Vec::<Task>::new());
    let (projects, set_projects) = signal(Vec::<Project>::new());
    let (notes, set_notes) = signal(storage::calendar_notes());
    let (note_text, set_note_text) = signal(String::new());

    // admin sees every deadline, everyone else their own slice
    let fetch_all = move || {
        let admin = auth.user().map(|u| u.role) == Some(Role::Admin);
        spawn_local(async move {
            let result = if admin {
                api::tasks::all(&[]).await
            } else {
                api::tasks::my_tasks().await
            };
            match result {
                Ok(resp) if resp.success => set_tasks.set(resp.tasks),
                Ok(_) => toasts.error("Failed to load tasks"),
                Err(err) => {
                    console_error(&format!("calendar task fetch failed: {err}"));
                    toasts.error("Failed to load tasks");
                }
            }
        });
        spawn_local(async move {
            let result = if admin {
                api::projects::all().await
            } else {
                api::projects::my_projects().await
            };
            match result {
                Ok(resp) if resp.success => set_projects.set(resp.projects),
                Ok(_) => toasts.error("Failed to load projects"),
                Err(err) => {
                    console_error(&format!("calendar project fetch failed: {err}"));
                    toasts.error("Failed to load projects");
                }
            }
        });
    };

    Effect::new(move |_| fetch_all());

    let add_note = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(date) = selected.get() else { return };
        let text = note_text.get().trim().to_string();
        if text.is_empty() {
            return;
        }
        set_notes.update(|notes| {
            let id = notes.iter().map(|n| n.id).max().unwrap_or(0) + 1;
            notes.push(CalendarNote {
                id,
                date: date.format("%Y-%m-%d").to_string(),
                text,
            });
            storage::save_calendar_notes(notes);
        });
        set_note_text.set(String::new());
    };

    let remove_note = move |id: u64| {
        set_notes.update(|notes| {
            notes.retain(|n| n.id != id);
            storage::save_calendar_notes(notes);
        });
    };

    let on_note_input = move |ev: web_sys::Event| {
        if let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_ref::<web_sys::HtmlInputElement>().cloned())
        {
            set_note_text.set(input.value());
        }
    };

    let day_cell = move |date: NaiveDate| {
        let dot = tasks.with(|t| {
            projects.with(|p| deadlines::has_deadlines(t, p, date, deadlines::local_offset()))
        });
        let is_today = date == deadlines::today_local();
        let is_selected = selected.get() == Some(date);
        view! {
            <button
                class="calendar-day"
                class:today=is_today
                class:selected=is_selected
                on:click=move |_| set_selected.set(Some(date))
            >
                <span class="day-number">{date.day()}</span>
                {dot.then(|| view! { <span class="day-dot"></span> })}
            </button>
        }
    };

    let selected_panel = move || {
        let Some(date) = selected.get() else {
            return view! { <p class="empty-hint">"Select a day to see its deadlines."</p> }
                .into_any();
        };
        let entries = tasks.with(|t| {
            projects.with(|p| deadlines::deadlines_for_date(t, p, date, deadlines::local_offset()))
        });
        let date_key = date.format("%Y-%m-%d").to_string();
        let day_notes: Vec<CalendarNote> = notes
            .get()
            .into_iter()
            .filter(|n| n.date == date_key)
            .collect();

        view! {
            <h2>{date.format("%B %d, %Y").to_string()}</h2>

            <section class="day-deadlines">
                <h3>"Deadlines"</h3>
                {if entries.is_empty() {
                    view! { <p class="empty-hint">"Nothing due on this day."</p> }.into_any()
                } else {
                    entries
                        .into_iter()
                        .map(|entry| {
                            let kind = match entry.source {
                                DeadlineSource::Task => "Task",
                                DeadlineSource::Project => "Project",
                            };
                            view! {
                                <div class="deadline-entry">
                                    <div class="entry-head">
                                        <span class=format!(
                                            "badge source-{}",
                                            kind.to_lowercase(),
                                        )>{kind}</span>
                                        <span class="entry-title">{entry.title.clone()}</span>
                                    </div>
                                    <p class="entry-context">{entry.context.clone()}</p>
                                    <p class="entry-status">{entry.status.clone()}</p>
                                    {entry
                                        .assigned_by
                                        .clone()
                                        .map(|by| {
                                            view! {
                                                <p class="entry-assigner">
                                                    {format!("Assigned by {by}")}
                                                </p>
                                            }
                                        })}
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </section>

            <section class="day-notes">
                <h3>"Notes"</h3>
                {if day_notes.is_empty() {
                    view! { <p class="empty-hint">"No notes for this day."</p> }.into_any()
                } else {
                    day_notes
                        .into_iter()
                        .map(|note| {
                            let id = note.id;
                            view! {
                                <div class="note-item">
                                    <p>{note.text.clone()}</p>
                                    <button class="note-delete" on:click=move |_| remove_note(id)>
                                        "×"
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
                <form class="note-form" on:submit=add_note>
                    <input
                        type="text"
                        placeholder="Add a note..."
                        prop:value=move || note_text.get()
                        on:input=on_note_input
                    />
                    <button class="btn" type="submit">"Add"</button>
                </form>
            </section>
        }
        .into_any()
    };

    view! {
        <div class="calendar-page">
            <div class="calendar-header">
                <h1>"Calendar"</h1>
                <div class="month-nav">
                    <button
                        class="btn"
                        on:click=move |_| set_month.update(|(y, m)| (*y, *m) = prev_month(*y, *m))
                    >
                        "‹"
                    </button>
                    <span class="month-label">
                        {move || {
                            let (y, m) = month.get();
                            month_label(y, m)
                        }}
                    </span>
                    <button
                        class="btn"
                        on:click=move |_| set_month.update(|(y, m)| (*y, *m) = next_month(*y, *m))
                    >
                        "›"
                    </button>
                </div>
            </div>

            <div class="calendar-body">
                <div class="calendar-grid">
                    {WEEKDAYS
                        .iter()
                        .map(|day| view! { <span class="weekday">{*day}</span> })
                        .collect_view()}
                    {move || {
                        let (y, m) = month.get();
                        month_grid(y, m)
                            .into_iter()
                            .map(|cell| match cell {
                                Some(date) => day_cell(date).into_any(),
                                None => view! { <span class="calendar-day blank"></span> }.into_any(),
                            })
                            .collect_view()
                    }}
                </div>

                <aside class="calendar-side">{selected_panel}</aside>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_pads_to_first_weekday() {
        // 2026-01-01 is a Thursday
        let cells = month_grid(2026, 1);
        assert_eq!(cells.iter().take_while(|c| c.is_none()).count(), 4);
        assert_eq!(cells[4], NaiveDate::from_ymd_opt(2026, 1, 1));
        assert_eq!(cells.iter().filter(|c| c.is_some()).count(), 31);
    }

    #[test]
    fn grid_handles_leap_february() {
        let cells = month_grid(2028, 2);
        assert_eq!(cells.iter().filter(|c| c.is_some()).count(), 29);
        assert_eq!(
            cells.last().copied().flatten(),
            NaiveDate::from_ymd_opt(2028, 2, 29)
        );
    }

    #[test]
    fn month_stepping_wraps_year_boundaries() {
        assert_eq!(prev_month(2026, 1), (2025, 12));
        assert_eq!(next_month(2025, 12), (2026, 1));
        assert_eq!(next_month(2026, 6), (2026, 7));
    }

    #[test]
    fn month_label_names_the_month() {
        assert_eq!(month_label(2026, 1), "January 2026");
    }
}
