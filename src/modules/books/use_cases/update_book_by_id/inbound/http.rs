use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::Response,
};

use serde_json::Value;

use crate::modules::books::adapters::inbound::envelope::{
    SERVER_FAILURE, error, fail, payload_rejected, success, validation_failed,
};
use crate::modules::books::core::book::BookPayload;
use crate::modules::books::use_cases::errors::ApplicationError;
use crate::shell::state::AppState;

const FAILED: &str = "Gagal memperbarui buku";

pub async fn handle(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
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

    match state.update_book_by_id.handle(&book_id, payload).await {
        Ok(()) => success::<()>(StatusCode::OK, Some("Buku berhasil diperbarui"), None),
        Err(ApplicationError::Validation(reason)) => {
            tracing::debug!(%reason, %book_id, "book update rejected");
            validation_failed(FAILED, reason)
        }
        Err(ApplicationError::NotFound(_)) => fail(
            StatusCode::NOT_FOUND,
            format!("{FAILED}. Id tidak ditemukan"),
        ),
        Err(e) => {
            tracing::error!(error = %e, %book_id, "book could not be updated");
            error(SERVER_FAILURE)
        }
    }
}
