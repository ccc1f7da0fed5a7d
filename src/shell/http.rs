use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::books::use_cases::add_book::inbound::http as add_http;
use crate::modules::books::use_cases::delete_book_by_id::inbound::http as delete_http;
use crate::modules::books::use_cases::get_book_by_id::inbound::http as get_http;
use crate::modules::books::use_cases::list_books::inbound::http as list_http;
use crate::modules::books::use_cases::update_book_by_id::inbound::http as update_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/books", get(list_http::handle).post(add_http::handle))
        .route(
            "/books/{book_id}",
            get(get_http::handle)
                .put(update_http::handle)
                .delete(delete_http::handle),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
