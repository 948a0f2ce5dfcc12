//! User endpoints.

use serde::Serialize;

use super::ApiError;
use crate::models::{Ack, LeadersResponse, StatsResponse, TeamResponse, UsersResponse};

#[derive(Debug, Clone, Serialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
}

/// Admin dashboard counters.
pub async fn dashboard_stats() -> Result<StatsResponse, ApiError> {
    super::get("/users/dashboard/stats").await
}

pub async fn leaders() -> Result<LeadersResponse, ApiError> {
    super::get("/users/leaders").await
}

/// Team members of the current user's leader (or of the leader themself).
pub async fn my_team() -> Result<TeamResponse, ApiError> {
    super::get("/users/my-team").await
}

pub async fn all(filters: &[(&str, &str)]) -> Result<UsersResponse, ApiError> {
    super::get_with_query("/users", filters).await
}

pub async fn update_profile(update: &ProfileUpdate) -> Result<Ack, ApiError> {
    super::put("/users/updateProfile", update).await
}

pub async fn delete(user_id: &str) -> Result<Ack, ApiError> {
    super::delete(&format!("/users/{user_id}")).await
}
