//! The response envelope shared by every endpoint.
//!
//! Success and error responses alike serialize as
//! `{code, message, status, body, timestamp, path, version}`. The request path
//! is read from [`REQUEST_PATH`], which the outermost middleware sets for the
//! lifetime of each request.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// API version reported in every envelope.
pub const API_VERSION: &str = "v1";

tokio::task_local! {
    /// Path of the request currently being served.
    pub static REQUEST_PATH: String;
}

/// The path of the in-flight request, or an empty string outside a request scope.
pub fn current_path() -> String {
    REQUEST_PATH.try_with(Clone::clone).unwrap_or_default()
}

/// Serialized envelope.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub code: &'static str,
    pub message: String,
    pub status: u16,
    pub body: T,
    pub timestamp: String,
    pub path: String,
    pub version: &'static str,
}

impl<T: Serialize> Envelope<T> {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>, body: T) -> Self {
        Self {
            code,
            message: message.into(),
            status: status.as_u16(),
            body,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            path: current_path(),
            version: API_VERSION,
        }
    }

    /// Pair the envelope with its HTTP status.
    pub fn into_http(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Successful handler output: an HTTP status, a message and a payload.
///
/// ```ignore
/// Ok(ApiResponse::created(industry))
/// ```
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    status: StatusCode,
    message: String,
    body: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 with the default message.
    pub fn ok(body: T) -> Self {
        Self::with_status(StatusCode::OK, "Success", body)
    }

    /// 201 for newly created resources.
    pub fn created(body: T) -> Self {
        Self::with_status(StatusCode::CREATED, "Created", body)
    }

    pub fn with_status(status: StatusCode, message: impl Into<String>, body: T) -> Self {
        Self {
            status,
            message: message.into(),
            body,
        }
    }

    /// Replace the human-readable message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl ApiResponse<()> {
    /// 200 with a `null` body, used by DELETE endpoints.
    pub fn deleted(entity: &str) -> Self {
        Self::with_status(StatusCode::OK, format!("{entity} deleted"), ())
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Envelope::new(self.status, success_code(self.status), self.message, self.body).into_http()
    }
}

fn success_code(status: StatusCode) -> &'static str {
    match status {
        StatusCode::CREATED => "CREATED",
        _ => "OK",
    }
}

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;

    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn created_envelope_carries_status_and_path() {
        let response = REQUEST_PATH
            .scope("/api/v1/skills".to_string(), async {
                ApiResponse::created(serde_json::json!({"id": 1})).into_response()
            })
            .await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(json["code"], "CREATED");
        assert_eq!(json["status"], 201);
        assert_eq!(json["body"]["id"], 1);
        assert_eq!(json["path"], "/api/v1/skills");
        assert_eq!(json["version"], "v1");
        assert!(json["timestamp"].as_str().unwrap().ends_with('Z'));
    }

    #[tokio::test]
    async fn deleted_envelope_has_null_body() {
        let json = body_json(ApiResponse::deleted("Post").into_response()).await;
        assert_eq!(json["code"], "OK");
        assert_eq!(json["message"], "Post deleted");
        assert!(json["body"].is_null());
        assert_eq!(json["path"], "");
    }
}
