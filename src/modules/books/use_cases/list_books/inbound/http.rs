use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Response,
};
use serde::Serialize;

use crate::modules::books::adapters::inbound::envelope::{SERVER_FAILURE, error, success};
use crate::modules::books::core::book::BookSummary;
use crate::modules::books::core::filter::ListBooksParams;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ListBooksResponse {
    pub books: Vec<BookSummary>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let params: ListBooksParams = pairs.into_iter().collect();
    match state.list_books.handle(params).await {
        Ok(books) => success(StatusCode::OK, None, Some(ListBooksResponse { books })),
        Err(e) => {
            tracing::error!(error = %e, "books could not be listed");
            error(SERVER_FAILURE)
        }
    }
}
