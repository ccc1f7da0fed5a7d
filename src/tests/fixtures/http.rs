use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::books::adapters::outbound::book_repository_in_memory::InMemoryBookRepository;
use crate::shell::state::AppState;
use crate::tests::fixtures::capabilities::{FixedClock, SequentialIdGenerator};

pub fn make_test_state() -> (Arc<InMemoryBookRepository>, AppState) {
    let repository = Arc::new(InMemoryBookRepository::new());
    let state = AppState::new(
        repository.clone(),
        Arc::new(SequentialIdGenerator::new()),
        Arc::new(FixedClock::default()),
    );
    (repository, state)
}

pub fn make_offline_state() -> AppState {
    let mut repository = InMemoryBookRepository::new();
    repository.toggle_offline();
    AppState::new(
        Arc::new(repository),
        Arc::new(SequentialIdGenerator::new()),
        Arc::new(FixedClock::default()),
    )
}

pub fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::delete(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn put_json(uri: &str, body: &str) -> Request<Body> {
    Request::put(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Runs one request through `app` and decodes the JSON body.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}
