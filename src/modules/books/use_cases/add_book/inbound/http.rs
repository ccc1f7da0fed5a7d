use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode, response::Response,
};
use serde::Serialize;
use serde_json::Value;

use crate::modules::books::adapters::inbound::envelope::{
    error, fail, payload_rejected, success, validation_failed,
};
use crate::modules::books::core::book::BookPayload;
use crate::modules::books::use_cases::errors::ApplicationError;
use crate::shell::state::AppState;

const FAILED: &str = "Gagal menambahkan buku";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddBookResponse {
    pub book_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return fail(
                StatusCode::BAD_REQUEST,
                format!("{FAILED}. {}", rejection.body_text()),
            );
        }
    };
    let payload = match BookPayload::from_json(body) {
        Ok(payload) => payload,
        Err(e) => return payload_rejected(FAILED, e),
    };

    match state.add_book.handle(payload).await {
        Ok(book_id) => success(
            StatusCode::CREATED,
            Some("Buku berhasil ditambahkan"),
            Some(AddBookResponse { book_id }),
        ),
        Err(ApplicationError::Validation(reason)) => {
            tracing::debug!(%reason, "book rejected");
            validation_failed(FAILED, reason)
        }
        Err(e) => {
            tracing::error!(error = %e, "book could not be added");
            error("Buku gagal ditambahkan")
        }
    }
}
