//! Response envelope shared by every `/books` route:
//! `{ "status": "success" | "fail" | "error", "message"?: ..., "data"?: ... }`.

use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};
use serde::Serialize;

use crate::modules::books::core::book::PayloadError;
use crate::modules::books::core::validation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Fail,
    Error,
}

#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

pub const SERVER_FAILURE: &str = "Terjadi kegagalan pada server";

pub fn success<T: Serialize>(code: StatusCode, message: Option<&str>, data: Option<T>) -> Response {
    let body = Envelope {
        status: Status::Success,
        message: message.map(String::from),
        data,
    };
    (code, Json(body)).into_response()
}

pub fn fail(code: StatusCode, message: impl Into<String>) -> Response {
    let body = Envelope::<()> {
        status: Status::Fail,
        message: Some(message.into()),
        data: None,
    };
    (code, Json(body)).into_response()
}

pub fn error(message: impl Into<String>) -> Response {
    let body = Envelope::<()> {
        status: Status::Error,
        message: Some(message.into()),
        data: None,
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

/// `prefix` names the operation that failed, e.g. "Gagal menambahkan buku".
pub fn validation_failed(prefix: &str, reason: ValidationError) -> Response {
    let reason = match reason {
        ValidationError::MissingName => "Mohon isi nama buku",
        ValidationError::ReadPageExceedsPageCount => {
            "readPage tidak boleh lebih besar dari pageCount"
        }
    };
    fail(StatusCode::BAD_REQUEST, format!("{prefix}. {reason}"))
}

/// A body that did not make it to the handler: missing name or mistyped field.
pub fn payload_rejected(prefix: &str, error: PayloadError) -> Response {
    match error {
        PayloadError::Invalid(reason) => validation_failed(prefix, reason),
        PayloadError::Malformed(e) => fail(StatusCode::BAD_REQUEST, format!("{prefix}. {e}")),
    }
}
