//! Notification endpoints.

use super::ApiError;
use crate::models::{Ack, NotificationsResponse, UnreadCountResponse};

/// Latest notifications, newest first.
pub async fn list(limit: u32) -> Result<NotificationsResponse, ApiError> {
    let limit = limit.to_string();
    super::get_with_query("/notifications", &[("limit", limit.as_str()), ("sort", "-createdAt")])
        .await
}

pub async fn unread_count() -> Result<UnreadCountResponse, ApiError> {
    super::get("/notifications/unread/count").await
}

pub async fn mark_read(notification_id: &str) -> Result<Ack, ApiError> {
    super::patch_empty(&format!("/notifications/{notification_id}/read")).await
}

pub async fn mark_all_read() -> Result<Ack, ApiError> {
    super::patch_empty("/notifications/read-all").await
}

pub async fn delete(notification_id: &str) -> Result<Ack, ApiError> {
    super::delete(&format!("/notifications/{notification_id}")).await
}

/// Remove every already-read notification.
pub async fn delete_read() -> Result<Ack, ApiError> {
    super::delete("/notifications/read").await
}
