use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};

use crate::modules::books::adapters::inbound::envelope::{SERVER_FAILURE, error, fail, success};
use crate::modules::books::use_cases::errors::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(book_id): Path<String>) -> Response {
    match state.delete_book_by_id.handle(&book_id).await {
        Ok(()) => success::<()>(StatusCode::OK, Some("Buku berhasil dihapus"), None),
        Err(ApplicationError::NotFound(_)) => fail(
            StatusCode::NOT_FOUND,
            "Buku gagal dihapus. Id tidak ditemukan",
        ),
        Err(e) => {
            tracing::error!(error = %e, %book_id, "book could not be deleted");
            error(SERVER_FAILURE)
        }
    }
}
