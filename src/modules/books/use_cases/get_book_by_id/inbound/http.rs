use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use serde::Serialize;

use crate::modules::books::adapters::inbound::envelope::{SERVER_FAILURE, error, fail, success};
use crate::modules::books::core::book::Book;
use crate::modules::books::use_cases::errors::ApplicationError;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct GetBookByIdResponse {
    pub book: Book,
}

pub async fn handle(State(state): State<AppState>, Path(book_id): Path<String>) -> Response {
    match state.get_book_by_id.handle(&book_id).await {
        Ok(book) => success(StatusCode::OK, None, Some(GetBookByIdResponse { book })),
        Err(ApplicationError::NotFound(_)) => fail(StatusCode::NOT_FOUND, "Buku tidak ditemukan"),
        Err(e) => {
            tracing::error!(error = %e, %book_id, "book could not be read");
            error(SERVER_FAILURE)
        }
    }
}
