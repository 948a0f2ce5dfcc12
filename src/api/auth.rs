//! Auth endpoints.

use serde::Serialize;

use super::ApiError;
use crate::models::{Ack, LoginResponse, MeResponse};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub async fn login(credentials: &Credentials) -> Result<LoginResponse, ApiError> {
    super::post("/auth/login", credentials).await
}

pub async fn register(data: &Registration) -> Result<Ack, ApiError> {
    super::post("/auth/register", data).await
}

pub async fn me() -> Result<MeResponse, ApiError> {
    super::get("/auth/me").await
}

pub async fn logout() -> Result<Ack, ApiError> {
    super::post_empty("/auth/logout").await
}
