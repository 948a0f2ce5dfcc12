//! Frontend Models
//!
//! Typed representations of the REST API payloads. Every endpoint response
//! is decoded into one of these structs at the API boundary so malformed
//! server data fails fast instead of leaking into view logic.

use serde::{Deserialize, Serialize, Serializer};

/// Account role, as reported by `/auth/me` and `/auth/login`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Leader,
    Employee,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Leader => "leader",
            Role::Employee => "employee",
        }
    }
}

/// Authenticated user identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Lightweight user reference embedded in tasks and projects.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserRef {
    #[serde(alias = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub email: String,
}

/// Project reference embedded in a task.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectRef {
    #[serde(alias = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub domain: String,
}

/// Task workflow status. The backend sends lowercase strings; `in progress`
/// (with a space) appears in older records and maps to the same variant.
/// Anything unrecognized decodes to `Unknown`, which downstream
/// categorization treats as pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    #[serde(alias = "in progress")]
    InProgress,
    Completed,
    Blocked,
    #[serde(other)]
    Unknown,
}

impl TaskStatus {
    /// Wire value sent back to the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending | TaskStatus::Unknown => "pending",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Blocked => "blocked",
        }
    }

    /// Parse a wire or form value; unrecognized input maps to `Unknown`,
    /// mirroring deserialization.
    pub fn parse(value: &str) -> TaskStatus {
        match value {
            "pending" => TaskStatus::Pending,
            "in-progress" | "in progress" => TaskStatus::InProgress,
            "completed" => TaskStatus::Completed,
            "blocked" => TaskStatus::Blocked,
            _ => TaskStatus::Unknown,
        }
    }

    /// Human-readable label for cards and badges.
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending | TaskStatus::Unknown => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
            TaskStatus::Blocked => "Blocked",
        }
    }
}

impl Serialize for TaskStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
    #[serde(other)]
    Unspecified,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium | Priority::Unspecified => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium | Priority::Unspecified => "Medium",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
        }
    }

    /// Parse a form value; unrecognized input maps to `Unspecified`.
    pub fn parse(value: &str) -> Priority {
        match value {
            "low" => Priority::Low,
            "medium" => Priority::Medium,
            "high" => Priority::High,
            "urgent" => Priority::Urgent,
            _ => Priority::Unspecified,
        }
    }
}

impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

/// Comment on a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(default)]
    pub author: Option<UserRef>,
    pub text: String,
    #[serde(default)]
    pub created_at: String,
}

/// Task as returned by the tasks endpoints. Dates stay in their wire form
/// (RFC 3339 timestamp or bare `YYYY-MM-DD`); the deadline engine owns
/// converting them to local calendar days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub project: Option<ProjectRef>,
    #[serde(default)]
    pub assigned_by: Option<UserRef>,
    #[serde(default)]
    pub assigned_to: Vec<UserRef>,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub priority: Priority,
    pub status: TaskStatus,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// Project lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Active,
    Completed,
    OnHold,
    #[serde(other)]
    Unknown,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active | ProjectStatus::Unknown => "active",
            ProjectStatus::Completed => "completed",
            ProjectStatus::OnHold => "on-hold",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Active | ProjectStatus::Unknown => "Active",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::OnHold => "On hold",
        }
    }
}

impl Serialize for ProjectStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Project as returned by the projects endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub leader: Option<UserRef>,
    #[serde(default)]
    pub team_members: Vec<UserRef>,
    #[serde(default)]
    pub deadline: String,
    pub status: ProjectStatus,
    #[serde(default)]
    pub progress: f64,
}

/// Notification item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub created_at: String,
}

/// Admin dashboard counters from `/users/dashboard/stats`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_users: u32,
    #[serde(default)]
    pub total_leaders: u32,
    #[serde(default)]
    pub total_projects: u32,
    #[serde(default)]
    pub total_tasks: u32,
    #[serde(default)]
    pub completed_tasks: u32,
}

// ========================
// Response Envelopes
// ========================
//
// Every wrapper returns the decoded envelope as-is; callers branch on
// `success` themselves.

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MeResponse {
    pub success: bool,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TasksResponse {
    pub success: bool,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaskResponse {
    pub success: bool,
    #[serde(default)]
    pub task: Option<Task>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectsResponse {
    pub success: bool,
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectResponse {
    pub success: bool,
    #[serde(default)]
    pub project: Option<Project>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UsersResponse {
    pub success: bool,
    #[serde(default)]
    pub users: Vec<User>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LeadersResponse {
    pub success: bool,
    #[serde(default)]
    pub leaders: Vec<User>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TeamResponse {
    pub success: bool,
    #[serde(default)]
    pub team: Vec<UserRef>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatsResponse {
    pub success: bool,
    #[serde(default)]
    pub stats: DashboardStats,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NotificationsResponse {
    pub success: bool,
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnreadCountResponse {
    pub success: bool,
    #[serde(default)]
    pub unread_count: u32,
}

/// Generic acknowledgement for state-changing calls.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Ack {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_decodes_from_backend_shape() {
        let json = r#"{
            "_id": "t1",
            "title": "Design auth flow",
            "project": { "_id": "p1", "name": "Platform redesign", "domain": "web" },
            "assignedBy": { "_id": "u1", "name": "Lena" },
            "assignedTo": [{ "_id": "u2", "name": "Avery", "domain": "frontend" }],
            "startDate": "2026-01-10T08:00:00Z",
            "dueDate": "2026-01-23T23:30:00Z",
            "priority": "high",
            "status": "in-progress"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, "t1");
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.project.unwrap().name, "Platform redesign");
        assert!(task.comments.is_empty());
    }

    #[test]
    fn legacy_space_separated_status_decodes() {
        let task: Task =
            serde_json::from_str(r#"{"_id":"t2","title":"x","status":"in progress"}"#).unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);
    }

    #[test]
    fn unrecognized_status_decodes_to_unknown() {
        let task: Task =
            serde_json::from_str(r#"{"_id":"t3","title":"x","status":"archived"}"#).unwrap();
        assert_eq!(task.status, TaskStatus::Unknown);
        // re-serializes as the defensive default
        assert_eq!(serde_json::to_string(&task.status).unwrap(), "\"pending\"");
    }

    #[test]
    fn login_response_decodes_with_and_without_user() {
        let ok: LoginResponse = serde_json::from_str(
            r#"{"success":true,"token":"jwt","user":{"_id":"u1","name":"A","email":"a@b.c","role":"admin"}}"#,
        )
        .unwrap();
        assert!(ok.success);
        assert_eq!(ok.user.unwrap().role, Role::Admin);

        let failed: LoginResponse =
            serde_json::from_str(r#"{"success":false,"message":"Invalid credentials"}"#).unwrap();
        assert!(!failed.success);
        assert_eq!(failed.message.as_deref(), Some("Invalid credentials"));
        assert!(failed.user.is_none());
    }

    #[test]
    fn status_and_priority_parse_form_values() {
        assert_eq!(TaskStatus::parse("in-progress"), TaskStatus::InProgress);
        assert_eq!(TaskStatus::parse("in progress"), TaskStatus::InProgress);
        assert_eq!(TaskStatus::parse("archived"), TaskStatus::Unknown);
        assert_eq!(Priority::parse("urgent"), Priority::Urgent);
        assert_eq!(Priority::parse(""), Priority::Unspecified);
    }

    #[test]
    fn unread_count_uses_camel_case_wire_name() {
        let resp: UnreadCountResponse =
            serde_json::from_str(r#"{"success":true,"unreadCount":4}"#).unwrap();
        assert_eq!(resp.unread_count, 4);
    }
}
