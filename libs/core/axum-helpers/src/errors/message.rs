//! The `{status, message, timestamp}` payload shared by error and confirmation responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{Local, NaiveDateTime};
use serde::{Serialize, Serializer};
use utoipa::ToSchema;

/// Wire format of [`ApiMessage::timestamp`]: `dd-MM-yyyy hh:mm:ss` on a 12-hour clock.
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %I:%M:%S";

/// Status message returned for failures and for delete confirmations.
///
/// # JSON Example
///
/// ```json
/// {
///   "status": "BAD_REQUEST",
///   "timestamp": "16-10-2026 02:41:07",
///   "message": "Product with id CLN-CDE-BOOK already exists"
/// }
/// ```
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ApiMessage {
    /// Named HTTP status, e.g. `OK` or `BAD_REQUEST`
    #[serde(serialize_with = "serialize_status")]
    #[schema(value_type = String, example = "BAD_REQUEST")]
    pub status: StatusCode,
    /// Local time the message was produced
    #[serde(serialize_with = "serialize_timestamp")]
    #[schema(value_type = String, example = "16-10-2026 02:41:07")]
    pub timestamp: NaiveDateTime,
    /// Human-readable description
    pub message: String,
}

impl ApiMessage {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            timestamp: Local::now().naive_local(),
            message: message.into(),
        }
    }

    pub fn ok(message: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, message)
    }
}

impl IntoResponse for ApiMessage {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// `StatusCode::BAD_REQUEST` -> `"BAD_REQUEST"`; codes without a reason phrase fall back to digits.
pub fn status_name(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => reason
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || c.is_ascii_whitespace() || *c == '-')
            .map(|c| match c {
                ' ' | '-' => '_',
                other => other.to_ascii_uppercase(),
            })
            .collect(),
        None => status.as_str().to_string(),
    }
}

fn serialize_status<S: Serializer>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&status_name(*status))
}

fn serialize_timestamp<S: Serializer>(
    timestamp: &NaiveDateTime,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&timestamp.format(TIMESTAMP_FORMAT))
}
