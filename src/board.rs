//! Task Board Coordinator
//!
//! Pure core of the optimistic status-change flow: the board moves a task
//! between buckets immediately, the caller fires the API request, and on
//! failure the whole board is replaced from a fresh fetch. One mutation per
//! task may be in flight at a time; a second change on the same task is
//! refused until the first resolves.

use std::collections::HashSet;

use chrono::{FixedOffset, NaiveDate};

use crate::deadlines::{bucket_for, categorize_tasks, Bucket, TaskBuckets};
use crate::models::{Task, TaskStatus};

/// Result of an accepted optimistic move.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusChange {
    pub previous: TaskStatus,
    pub from: Bucket,
    pub to: Bucket,
}

#[derive(Debug, Clone, Default)]
pub struct TaskBoard {
    pub buckets: TaskBuckets,
    in_flight: HashSet<String>,
}

impl TaskBoard {
    pub fn from_tasks(tasks: &[Task], today: NaiveDate, offset: FixedOffset) -> Self {
        Self {
            buckets: categorize_tasks(tasks, today, offset),
            in_flight: HashSet::new(),
        }
    }

    /// Whether a server mutation for this task is still pending.
    pub fn is_updating(&self, task_id: &str) -> bool {
        self.in_flight.contains(task_id)
    }

    /// Apply a status change locally, before the server confirms it.
    ///
    /// Returns `None` without touching the board when the task is unknown,
    /// already has a mutation in flight, or already shows the requested
    /// status. Otherwise the task moves to the bucket its new status and
    /// due date imply (overdue precedence included) and is marked in
    /// flight.
    pub fn begin_status_change(
        &mut self,
        task_id: &str,
        new_status: TaskStatus,
        today: NaiveDate,
        offset: FixedOffset,
    ) -> Option<StatusChange> {
        if self.in_flight.contains(task_id) {
            return None;
        }
        let from = self.buckets.bucket_of(task_id)?;
        let mut task = self.take(task_id, from)?;
        if task.status == new_status {
            // no-op change; put it back untouched
            self.put(from, task);
            return None;
        }
        let previous = task.status;
        task.status = new_status;
        let to = bucket_for(&task, today, offset);
        self.put(to, task);
        self.in_flight.insert(task_id.to_string());
        Some(StatusChange { previous, from, to })
    }

    /// Clear the in-flight marker once the server responded.
    pub fn finish(&mut self, task_id: &str) {
        self.in_flight.remove(task_id);
    }

    /// Drop a task from the board ahead of a server delete. Refused while a
    /// mutation for it is still in flight; rollback is [`replace`] from a
    /// refetch, as with status changes.
    ///
    /// [`replace`]: TaskBoard::replace
    pub fn remove(&mut self, task_id: &str) -> Option<Task> {
        if self.in_flight.contains(task_id) {
            return None;
        }
        let bucket = self.buckets.bucket_of(task_id)?;
        self.take(task_id, bucket)
    }

    /// Replace the board from an authoritative fetch. This is the rollback
    /// path: any optimistic state not reflected by the server is gone.
    pub fn replace(&mut self, tasks: &[Task], today: NaiveDate, offset: FixedOffset) {
        self.buckets = categorize_tasks(tasks, today, offset);
    }

    fn take(&mut self, task_id: &str, bucket: Bucket) -> Option<Task> {
        let tasks = self.bucket_mut(bucket);
        let pos = tasks.iter().position(|t| t.id == task_id)?;
        Some(tasks.remove(pos))
    }

    fn put(&mut self, bucket: Bucket, task: Task) {
        self.bucket_mut(bucket).push(task);
    }

    fn bucket_mut(&mut self, bucket: Bucket) -> &mut Vec<Task> {
        match bucket {
            Bucket::Pending => &mut self.buckets.pending,
            Bucket::InProgress => &mut self.buckets.in_progress,
            Bucket::Completed => &mut self.buckets.completed,
            Bucket::Overdue => &mut self.buckets.overdue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

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
            assigned_by: None,
            assigned_to: Vec::new(),
            start_date: String::new(),
            due_date: due.to_string(),
            priority: Priority::Medium,
            status,
            comments: Vec::new(),
        }
    }

    #[test]
    fn completing_an_overdue_task_moves_it_exactly_once() {
        // due yesterday, still in progress: starts out overdue
        let today = date(2026, 3, 2);
        let tasks = vec![make_task("t1", TaskStatus::InProgress, "2026-03-01")];
        let mut board = TaskBoard::from_tasks(&tasks, today, utc());
        assert_eq!(board.buckets.bucket_of("t1"), Some(Bucket::Overdue));

        let change = board
            .begin_status_change("t1", TaskStatus::Completed, today, utc())
            .unwrap();
        assert_eq!(change.from, Bucket::Overdue);
        assert_eq!(change.to, Bucket::Completed);
        assert_eq!(change.previous, TaskStatus::InProgress);

        assert_eq!(board.buckets.bucket_of("t1"), Some(Bucket::Completed));
        assert_eq!(board.buckets.total(), 1);
        assert!(board.buckets.overdue.is_empty());
    }

    #[test]
    fn reopening_a_past_due_task_lands_in_overdue() {
        let today = date(2026, 3, 2);
        let tasks = vec![make_task("t1", TaskStatus::Completed, "2026-03-01")];
        let mut board = TaskBoard::from_tasks(&tasks, today, utc());
        assert_eq!(board.buckets.bucket_of("t1"), Some(Bucket::Completed));

        let change = board
            .begin_status_change("t1", TaskStatus::InProgress, today, utc())
            .unwrap();
        assert_eq!(change.to, Bucket::Overdue);
        assert_eq!(board.buckets.bucket_of("t1"), Some(Bucket::Overdue));
    }

    #[test]
    fn second_change_on_same_task_is_refused_until_finish() {
        let today = date(2026, 3, 2);
        let tasks = vec![make_task("t1", TaskStatus::Pending, "2026-03-10")];
        let mut board = TaskBoard::from_tasks(&tasks, today, utc());

        assert!(board
            .begin_status_change("t1", TaskStatus::InProgress, today, utc())
            .is_some());
        assert!(board.is_updating("t1"));
        assert!(board
            .begin_status_change("t1", TaskStatus::Completed, today, utc())
            .is_none());

        board.finish("t1");
        assert!(!board.is_updating("t1"));
        assert!(board
            .begin_status_change("t1", TaskStatus::Completed, today, utc())
            .is_some());
    }

    #[test]
    fn unknown_task_and_noop_change_leave_board_untouched() {
        let today = date(2026, 3, 2);
        let tasks = vec![make_task("t1", TaskStatus::Pending, "2026-03-10")];
        let mut board = TaskBoard::from_tasks(&tasks, today, utc());

        assert!(board
            .begin_status_change("missing", TaskStatus::Completed, today, utc())
            .is_none());
        assert!(board
            .begin_status_change("t1", TaskStatus::Pending, today, utc())
            .is_none());
        assert!(!board.is_updating("t1"));
        assert_eq!(board.buckets.bucket_of("t1"), Some(Bucket::Pending));
    }

    #[test]
    fn failed_mutation_rolls_back_via_replace() {
        let today = date(2026, 3, 2);
        let server_tasks = vec![
            make_task("t1", TaskStatus::Pending, "2026-03-10"),
            make_task("t2", TaskStatus::InProgress, "2026-03-11"),
        ];
        let mut board = TaskBoard::from_tasks(&server_tasks, today, utc());

        // optimistic move that the server will reject
        board
            .begin_status_change("t1", TaskStatus::Completed, today, utc())
            .unwrap();
        assert_eq!(board.buckets.bucket_of("t1"), Some(Bucket::Completed));

        // failure handling: refetch and replace wholesale
        board.replace(&server_tasks, today, utc());
        board.finish("t1");

        let fresh = TaskBoard::from_tasks(&server_tasks, today, utc());
        assert_eq!(board.buckets, fresh.buckets);
        assert_eq!(board.buckets.bucket_of("t1"), Some(Bucket::Pending));
    }

    #[test]
    fn removing_a_task_empties_its_bucket_until_rollback() {
        let today = date(2026, 3, 2);
        let tasks = vec![
            make_task("t1", TaskStatus::Pending, "2026-03-10"),
            make_task("t2", TaskStatus::InProgress, "2026-03-11"),
        ];
        let mut board = TaskBoard::from_tasks(&tasks, today, utc());

        let removed = board.remove("t1").unwrap();
        assert_eq!(removed.id, "t1");
        assert_eq!(board.buckets.bucket_of("t1"), None);
        assert_eq!(board.buckets.total(), 1);
        assert!(board.remove("t1").is_none());

        // failed delete: the refetch brings the task back
        board.replace(&tasks, today, utc());
        assert_eq!(board.buckets.bucket_of("t1"), Some(Bucket::Pending));
    }

    #[test]
    fn remove_is_refused_while_a_status_change_is_in_flight() {
        let today = date(2026, 3, 2);
        let tasks = vec![make_task("t1", TaskStatus::Pending, "2026-03-10")];
        let mut board = TaskBoard::from_tasks(&tasks, today, utc());

        board
            .begin_status_change("t1", TaskStatus::InProgress, today, utc())
            .unwrap();
        assert!(board.remove("t1").is_none());
        board.finish("t1");
        assert!(board.remove("t1").is_some());
    }

    #[test]
    fn transitions_are_not_workflow_ordered() {
        // any-to-any is allowed locally; the backend owns any policy
        let today = date(2026, 3, 2);
        let tasks = vec![make_task("t1", TaskStatus::Completed, "2026-03-10")];
        let mut board = TaskBoard::from_tasks(&tasks, today, utc());
        let change = board
            .begin_status_change("t1", TaskStatus::Pending, today, utc())
            .unwrap();
        assert_eq!(change.to, Bucket::Pending);
    }
}
