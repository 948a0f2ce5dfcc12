//! Project endpoints.

use serde::Serialize;

use super::ApiError;
use crate::models::{Ack, ProjectResponse, ProjectsResponse};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub domain: String,
    pub leader: String,
    pub deadline: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MemberBody<'a> {
    member_id: &'a str,
}

/// Projects the current user belongs to.
pub async fn my_projects() -> Result<ProjectsResponse, ApiError> {
    super::get("/projects/my-projects").await
}

pub async fn all() -> Result<ProjectsResponse, ApiError> {
    super::get("/projects").await
}

pub async fn get(project_id: &str) -> Result<ProjectResponse, ApiError> {
    super::get(&format!("/projects/{project_id}")).await
}

pub async fn create(project: &NewProject) -> Result<ProjectResponse, ApiError> {
    super::post("/projects", project).await
}

pub async fn update(project_id: &str, project: &NewProject) -> Result<ProjectResponse, ApiError> {
    super::put(&format!("/projects/{project_id}"), project).await
}

pub async fn delete(project_id: &str) -> Result<Ack, ApiError> {
    super::delete(&format!("/projects/{project_id}")).await
}

pub async fn add_team_member(project_id: &str, member_id: &str) -> Result<Ack, ApiError> {
    super::post(
        &format!("/projects/{project_id}/team"),
        &MemberBody { member_id },
    )
    .await
}

pub async fn remove_team_member(project_id: &str, member_id: &str) -> Result<Ack, ApiError> {
    super::delete(&format!("/projects/{project_id}/team/{member_id}")).await
}
