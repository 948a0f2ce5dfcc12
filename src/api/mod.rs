//! REST API Wrappers
//!
//! Frontend bindings to the backend, one module per resource root. Each
//! wrapper decodes the response body into a typed envelope and returns it
//! as-is; callers branch on the envelope's `success` flag. HTTP-level and
//! transport failures surface as [`ApiError`].

pub mod auth;
pub mod notifications;
pub mod projects;
pub mod tasks;
pub mod users;

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::storage;

/// Base path of the backend; same-origin, proxied in development.
pub const API_BASE: &str = "/api";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response; `message` is the server's when it sent one.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// Transport-level failure (offline, DNS, aborted request).
    #[error("network error: {0}")]
    Network(String),
    /// Body did not match the documented shape.
    #[error("unexpected response from server: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message suitable for a toast: the server's own wording when
    /// available, a generic line otherwise.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server { message, .. } => message.clone(),
            ApiError::Network(_) => "Could not reach the server".to_string(),
            ApiError::Decode(_) => "Unexpected response from server".to_string(),
        }
    }
}

/// Error payload shape used by the backend for non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

fn request(method: Method, path: &str) -> RequestBuilder {
    let mut builder = Client::new().request(method, format!("{API_BASE}{path}"));
    if let Some(token) = storage::token() {
        builder = builder.bearer_auth(token);
    }
    builder
}

async fn send<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
    let response = builder
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));
        return Err(ApiError::Server {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

pub(crate) async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    send(request(Method::GET, path)).await
}

pub(crate) async fn get_with_query<T: DeserializeOwned>(
    path: &str,
    query: &[(&str, &str)],
) -> Result<T, ApiError> {
    send(request(Method::GET, path).query(query)).await
}

pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    send(request(Method::POST, path).json(body)).await
}

pub(crate) async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    send(request(Method::POST, path)).await
}

pub(crate) async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    send(request(Method::PUT, path).json(body)).await
}

pub(crate) async fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    send(request(Method::PATCH, path).json(body)).await
}

pub(crate) async fn patch_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    send(request(Method::PATCH, path)).await
}

pub(crate) async fn delete<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    send(request(Method::DELETE, path)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_prefers_backend_message() {
        let err = ApiError::Server {
            status: 403,
            message: "Access key required".into(),
        };
        assert_eq!(err.user_message(), "Access key required");
        assert_eq!(err.to_string(), "Access key required");
    }

    #[test]
    fn transport_and_decode_errors_fall_back_to_generic_text() {
        assert_eq!(
            ApiError::Network("timeout".into()).user_message(),
            "Could not reach the server"
        );
        assert_eq!(
            ApiError::Decode("missing field".into()).user_message(),
            "Unexpected response from server"
        );
    }

    #[test]
    fn error_body_decodes_with_optional_message() {
        let with: ErrorBody = serde_json::from_str(r#"{"message":"nope"}"#).unwrap();
        assert_eq!(with.message.as_deref(), Some("nope"));
        let without: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(without.message.is_none());
    }
}
