//! Task endpoints.

use serde::Serialize;

use super::ApiError;
use crate::models::{Ack, Priority, TaskResponse, TaskStatus, TasksResponse};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub project: String,
    pub assigned_to: Vec<String>,
    pub start_date: String,
    pub due_date: String,
    pub priority: Priority,
}

#[derive(Serialize)]
struct StatusBody {
    status: TaskStatus,
}

#[derive(Serialize)]
struct CommentBody<'a> {
    text: &'a str,
}

/// Tasks assigned to the current user.
pub async fn my_tasks() -> Result<TasksResponse, ApiError> {
    super::get("/tasks/my-tasks").await
}

/// All visible tasks, optionally filtered (`status`, `project`, ...).
pub async fn all(filters: &[(&str, &str)]) -> Result<TasksResponse, ApiError> {
    super::get_with_query("/tasks", filters).await
}

pub async fn get(task_id: &str) -> Result<TaskResponse, ApiError> {
    super::get(&format!("/tasks/{task_id}")).await
}

pub async fn create(task: &NewTask) -> Result<TaskResponse, ApiError> {
    super::post("/tasks", task).await
}

pub async fn update_status(task_id: &str, status: TaskStatus) -> Result<Ack, ApiError> {
    super::patch(&format!("/tasks/{task_id}/status"), &StatusBody { status }).await
}

pub async fn delete(task_id: &str) -> Result<Ack, ApiError> {
    super::delete(&format!("/tasks/{task_id}")).await
}

pub async fn add_comment(task_id: &str, text: &str) -> Result<TaskResponse, ApiError> {
    super::post(&format!("/tasks/{task_id}/comments"), &CommentBody { text }).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_serializes_with_wire_field_names() {
        let body = NewTask {
            title: "Design auth flow".into(),
            description: String::new(),
            project: "p1".into(),
            assigned_to: vec!["u2".into()],
            start_date: "2026-03-01".into(),
            due_date: "2026-03-05".into(),
            priority: Priority::High,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["assignedTo"][0], "u2");
        assert_eq!(json["startDate"], "2026-03-01");
        assert_eq!(json["dueDate"], "2026-03-05");
        assert_eq!(json["priority"], "high");
    }
}
