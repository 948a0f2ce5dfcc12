//! Deadline Aggregation Engine
//!
//! Turns the two independently fetched collections (tasks, projects) into
//! the status buckets, upcoming lists, and date-indexed views the dashboard
//! and calendar render. Everything here is parameterized on `today` and a
//! fixed UTC offset so behavior is deterministic under test; wasm callers
//! pass [`today_local`] / [`local_offset`].
//!
//! Date comparisons are by local calendar day only. A due timestamp is
//! converted into the viewer's offset and reduced to year-month-day before
//! any comparison, so a task due `23:30Z` still shows on the day the user
//! expects on the western side of the date line.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, Offset};

use crate::models::{Priority, Project, Task, TaskStatus};

/// Status/overdue category a task is displayed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Pending,
    InProgress,
    Completed,
    Overdue,
}

/// Mutually exclusive partition of a task collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskBuckets {
    pub pending: Vec<Task>,
    pub in_progress: Vec<Task>,
    pub completed: Vec<Task>,
    pub overdue: Vec<Task>,
}

impl TaskBuckets {
    pub fn total(&self) -> usize {
        self.pending.len() + self.in_progress.len() + self.completed.len() + self.overdue.len()
    }

    pub fn bucket_of(&self, task_id: &str) -> Option<Bucket> {
        let found = |tasks: &[Task]| tasks.iter().any(|t| t.id == task_id);
        if found(&self.pending) {
            Some(Bucket::Pending)
        } else if found(&self.in_progress) {
            Some(Bucket::InProgress)
        } else if found(&self.completed) {
            Some(Bucket::Completed)
        } else if found(&self.overdue) {
            Some(Bucket::Overdue)
        } else {
            None
        }
    }

    fn push(&mut self, bucket: Bucket, task: Task) {
        match bucket {
            Bucket::Pending => self.pending.push(task),
            Bucket::InProgress => self.in_progress.push(task),
            Bucket::Completed => self.completed.push(task),
            Bucket::Overdue => self.overdue.push(task),
        }
    }
}

/// Today's date in the viewer's timezone.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// The viewer's current UTC offset.
pub fn local_offset() -> FixedOffset {
    Local::now().offset().fix()
}

/// Reduce a wire date to the calendar day it falls on in `offset`.
///
/// Accepts an RFC 3339 timestamp (converted into `offset` first) or a bare
/// `YYYY-MM-DD` string (taken verbatim). Returns `None` for anything else;
/// callers treat an unparseable date as "no deadline".
pub fn local_due_date(raw: &str, offset: FixedOffset) -> Option<NaiveDate> {
    if raw.is_empty() {
        return None;
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&offset).date_naive());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Bucket a single task: overdue wins over the status mapping whenever the
/// task is not completed and its due day has passed. Unknown status falls
/// back to pending rather than dropping the task.
pub fn bucket_for(task: &Task, today: NaiveDate, offset: FixedOffset) -> Bucket {
    let due = local_due_date(&task.due_date, offset);
    if task.status != TaskStatus::Completed && due.is_some_and(|d| d < today) {
        return Bucket::Overdue;
    }
    match task.status {
        TaskStatus::Pending | TaskStatus::Blocked | TaskStatus::Unknown => Bucket::Pending,
        TaskStatus::InProgress => Bucket::InProgress,
        TaskStatus::Completed => Bucket::Completed,
    }
}

/// Partition `tasks` into the four display buckets. Every task lands in
/// exactly one bucket.
pub fn categorize_tasks(tasks: &[Task], today: NaiveDate, offset: FixedOffset) -> TaskBuckets {
    let mut buckets = TaskBuckets::default();
    for task in tasks {
        buckets.push(bucket_for(task, today, offset), task.clone());
    }
    buckets
}

/// Pending and in-progress tasks due today or later, ascending by due date,
/// truncated to `limit`. Ties keep their input order.
pub fn upcoming_deadlines(
    buckets: &TaskBuckets,
    today: NaiveDate,
    offset: FixedOffset,
    limit: usize,
) -> Vec<Task> {
    let mut upcoming: Vec<(NaiveDate, Task)> = buckets
        .pending
        .iter()
        .chain(buckets.in_progress.iter())
        .filter_map(|task| {
            let due = local_due_date(&task.due_date, offset)?;
            (due >= today).then(|| (due, task.clone()))
        })
        .collect();
    upcoming.sort_by_key(|(due, _)| *due);
    upcoming.truncate(limit);
    upcoming.into_iter().map(|(_, task)| task).collect()
}

/// Short human form of a wire date for cards, e.g. `Mar 02, 2026`.
/// Unparseable input is shown as-is.
pub fn display_date(raw: &str, offset: FixedOffset) -> String {
    local_due_date(raw, offset)
        .map(|d| d.format("%b %d, %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Where a calendar entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineSource {
    Task,
    Project,
}

/// One row in the per-date deadline list. Task entries carry priority and
/// assigner; project entries carry their domain as context.
#[derive(Debug, Clone, PartialEq)]
pub struct DeadlineEntry {
    pub id: String,
    pub title: String,
    pub context: String,
    pub description: String,
    pub priority: Option<Priority>,
    pub status: String,
    pub assigned_by: Option<String>,
    pub source: DeadlineSource,
}

/// Union of task and project deadlines falling on `date` (local calendar
/// day). Tasks first, then projects; a task and a project sharing a date
/// both appear. Pure over its inputs.
pub fn deadlines_for_date(
    tasks: &[Task],
    projects: &[Project],
    date: NaiveDate,
    offset: FixedOffset,
) -> Vec<DeadlineEntry> {
    let task_entries = tasks
        .iter()
        .filter(|task| local_due_date(&task.due_date, offset) == Some(date))
        .map(|task| DeadlineEntry {
            id: task.id.clone(),
            title: task.title.clone(),
            context: task
                .project
                .as_ref()
                .map(|p| p.name.clone())
                .unwrap_or_else(|| "No project".to_string()),
            description: task.description.clone(),
            priority: Some(task.priority),
            status: task.status.label().to_string(),
            assigned_by: task.assigned_by.as_ref().map(|u| u.name.clone()),
            source: DeadlineSource::Task,
        });

    let project_entries = projects
        .iter()
        .filter(|project| local_due_date(&project.deadline, offset) == Some(date))
        .map(|project| DeadlineEntry {
            id: project.id.clone(),
            title: project.name.clone(),
            context: project.domain.clone(),
            description: project.description.clone(),
            priority: None,
            status: project.status.as_str().to_string(),
            assigned_by: None,
            source: DeadlineSource::Project,
        });

    task_entries.chain(project_entries).collect()
}

/// Existence check for the calendar dot; short-circuits without building
/// the entry list.
pub fn has_deadlines(
    tasks: &[Task],
    projects: &[Project],
    date: NaiveDate,
    offset: FixedOffset,
) -> bool {
    tasks
        .iter()
        .any(|task| local_due_date(&task.due_date, offset) == Some(date))
        || projects
            .iter()
            .any(|project| local_due_date(&project.deadline, offset) == Some(date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProjectStatus, UserRef};

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_task(id: &str, status: TaskStatus, due: &str) -> Task {
        Task {
            id: id.to_string(),
            title: format!("Task {id}"),
            description: String::new(),
            project: None,
            assigned_by: Some(UserRef {
                id: "u1".into(),
                name: "Lena".into(),
                ..Default::default()
            }),
            assigned_to: Vec::new(),
            start_date: String::new(),
            due_date: due.to_string(),
            priority: Priority::Medium,
            status,
            comments: Vec::new(),
        }
    }

    fn make_project(id: &str, deadline: &str) -> Project {
        Project {
            id: id.to_string(),
            name: format!("Project {id}"),
            description: String::new(),
            domain: "web".into(),
            leader: None,
            team_members: Vec::new(),
            deadline: deadline.to_string(),
            status: ProjectStatus::Active,
            progress: 0.0,
        }
    }

    #[test]
    fn categorize_partitions_exactly() {
        let tasks = vec![
            make_task("a", TaskStatus::Pending, "2026-03-10"),
            make_task("b", TaskStatus::InProgress, "2026-03-11"),
            make_task("c", TaskStatus::Completed, "2026-02-01"),
            make_task("d", TaskStatus::InProgress, "2026-02-01"),
            make_task("e", TaskStatus::Unknown, "2026-03-12"),
            make_task("f", TaskStatus::Pending, "not-a-date"),
        ];
        let buckets = categorize_tasks(&tasks, date(2026, 3, 1), utc());

        assert_eq!(buckets.total(), tasks.len());
        for task in &tasks {
            assert!(buckets.bucket_of(&task.id).is_some(), "task {} dropped", task.id);
        }
        assert_eq!(buckets.bucket_of("a"), Some(Bucket::Pending));
        assert_eq!(buckets.bucket_of("b"), Some(Bucket::InProgress));
        assert_eq!(buckets.bucket_of("c"), Some(Bucket::Completed));
        assert_eq!(buckets.bucket_of("d"), Some(Bucket::Overdue));
        // unknown status and unparseable date both fall back to pending
        assert_eq!(buckets.bucket_of("e"), Some(Bucket::Pending));
        assert_eq!(buckets.bucket_of("f"), Some(Bucket::Pending));
    }

    #[test]
    fn overdue_takes_precedence_over_in_progress() {
        let tasks = vec![make_task("late", TaskStatus::InProgress, "2026-02-20")];
        let buckets = categorize_tasks(&tasks, date(2026, 3, 1), utc());
        assert!(buckets.in_progress.is_empty());
        assert_eq!(buckets.bucket_of("late"), Some(Bucket::Overdue));
    }

    #[test]
    fn completed_past_due_is_not_overdue() {
        let tasks = vec![make_task("done", TaskStatus::Completed, "2026-02-20")];
        let buckets = categorize_tasks(&tasks, date(2026, 3, 1), utc());
        assert_eq!(buckets.bucket_of("done"), Some(Bucket::Completed));
    }

    #[test]
    fn due_today_is_not_overdue() {
        let tasks = vec![make_task("today", TaskStatus::Pending, "2026-03-01")];
        let buckets = categorize_tasks(&tasks, date(2026, 3, 1), utc());
        assert_eq!(buckets.bucket_of("today"), Some(Bucket::Pending));
    }

    #[test]
    fn upcoming_is_sorted_bounded_and_future_only() {
        let today = date(2026, 3, 1);
        let tasks = vec![
            make_task("far", TaskStatus::Pending, "2026-03-20"),
            make_task("near", TaskStatus::InProgress, "2026-03-02"),
            make_task("mid", TaskStatus::Pending, "2026-03-10"),
            make_task("past", TaskStatus::Pending, "2026-02-01"),
            make_task("done", TaskStatus::Completed, "2026-03-03"),
        ];
        let buckets = categorize_tasks(&tasks, today, utc());
        let upcoming = upcoming_deadlines(&buckets, today, utc(), 3);

        assert_eq!(upcoming.len(), 3);
        let ids: Vec<&str> = upcoming.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["near", "mid", "far"]);

        let dues: Vec<NaiveDate> = upcoming
            .iter()
            .filter_map(|t| local_due_date(&t.due_date, utc()))
            .collect();
        assert!(dues.windows(2).all(|w| w[0] <= w[1]));
        assert!(dues.iter().all(|d| *d >= today));

        let limited = upcoming_deadlines(&buckets, today, utc(), 1);
        assert_eq!(limited.len(), 1);
        assert_eq!(limited[0].id, "near");
    }

    #[test]
    fn utc_timestamp_near_midnight_buckets_to_local_day() {
        // 23:30Z on Jan 23 is 18:30 on Jan 23 at UTC-5: the deadline must
        // show under the 23rd, not the 24th.
        let west5 = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(
            local_due_date("2026-01-23T23:30:00Z", west5),
            Some(date(2026, 1, 23))
        );
        // at UTC+2 the same instant has already rolled into the 24th
        let east2 = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(
            local_due_date("2026-01-23T23:30:00Z", east2),
            Some(date(2026, 1, 24))
        );
        // bare dates are taken verbatim, independent of offset
        assert_eq!(local_due_date("2026-01-23", west5), Some(date(2026, 1, 23)));
        assert_eq!(local_due_date("", west5), None);
        assert_eq!(local_due_date("garbage", west5), None);
    }

    #[test]
    fn deadlines_for_date_merges_both_sources() {
        let west5 = FixedOffset::west_opt(5 * 3600).unwrap();
        let tasks = vec![
            make_task("t1", TaskStatus::Pending, "2026-01-23T23:30:00Z"),
            make_task("t2", TaskStatus::Pending, "2026-01-24T12:00:00Z"),
        ];
        let projects = vec![make_project("p1", "2026-01-23")];

        let entries = deadlines_for_date(&tasks, &projects, date(2026, 1, 23), west5);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, "t1");
        assert_eq!(entries[0].source, DeadlineSource::Task);
        assert_eq!(entries[0].assigned_by.as_deref(), Some("Lena"));
        assert_eq!(entries[1].id, "p1");
        assert_eq!(entries[1].source, DeadlineSource::Project);
        assert!(entries[1].priority.is_none());
    }

    #[test]
    fn deadlines_for_date_is_idempotent() {
        let tasks = vec![make_task("t1", TaskStatus::Pending, "2026-01-23")];
        let projects = vec![make_project("p1", "2026-01-23")];
        let first = deadlines_for_date(&tasks, &projects, date(2026, 1, 23), utc());
        let second = deadlines_for_date(&tasks, &projects, date(2026, 1, 23), utc());
        assert_eq!(first, second);
        // source collections untouched
        assert_eq!(tasks[0].id, "t1");
        assert_eq!(projects[0].id, "p1");
    }

    #[test]
    fn has_deadlines_matches_the_full_list() {
        let tasks = vec![make_task("t1", TaskStatus::Pending, "2026-01-23")];
        let projects = vec![make_project("p1", "2026-02-10")];
        for day in [date(2026, 1, 23), date(2026, 2, 10), date(2026, 3, 1)] {
            assert_eq!(
                has_deadlines(&tasks, &projects, day, utc()),
                !deadlines_for_date(&tasks, &projects, day, utc()).is_empty()
            );
        }
    }

    #[test]
    fn partial_data_is_treated_as_empty() {
        let tasks = vec![make_task("t1", TaskStatus::Pending, "2026-01-23")];
        assert!(has_deadlines(&tasks, &[], date(2026, 1, 23), utc()));
        assert!(!has_deadlines(&[], &[], date(2026, 1, 23), utc()));
        assert!(deadlines_for_date(&[], &[], date(2026, 1, 23), utc()).is_empty());
    }
}
