use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::shell::http::router;
use crate::tests::fixtures::http::{delete, get, make_test_state, post_json, put_json, send};

fn body(name: &str, page_count: u32, read_page: u32, reading: bool) -> String {
    json!({
        "name": name,
        "year": 2010,
        "author": "John Doe",
        "summary": "Lorem ipsum dolor sit amet",
        "publisher": "Dicoding Indonesia",
        "pageCount": page_count,
        "readPage": read_page,
        "reading": reading,
    })
    .to_string()
}

fn ids(json: &Value) -> Vec<String> {
    json["data"]["books"]
        .as_array()
        .unwrap()
        .iter()
        .map(|book| book["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn keeps_a_bookshelf_through_its_whole_lifecycle() {
    let (_, state) = make_test_state();
    let app = router(state);

    let (status, created) = send(app.clone(), post_json("/books", &body("A", 100, 100, false))).await;
    assert_eq!(status, StatusCode::CREATED);
    let first = created["data"]["bookId"].as_str().unwrap().to_string();

    let (status, json) = send(app.clone(), post_json("/books", r#"{"name":"","pageCount":10,"readPage":0}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Gagal menambahkan buku. Mohon isi nama buku");

    let (status, json) = send(app.clone(), post_json("/books", r#"{"name":"B","pageCount":50,"readPage":60}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["message"],
        "Gagal menambahkan buku. readPage tidak boleh lebih besar dari pageCount"
    );

    let (_, created) = send(app.clone(), post_json("/books", &body("C", 50, 10, true))).await;
    let second = created["data"]["bookId"].as_str().unwrap().to_string();

    let (status, json) = send(app.clone(), get(&format!("/books/{first}"))).await;
    assert_eq!(status, StatusCode::OK);
    let book = &json["data"]["book"];
    assert_eq!(book["id"], first.as_str());
    assert_eq!(book["name"], "A");
    assert_eq!(book["finished"], true);
    assert_eq!(book["insertedAt"], "2026-10-19");
    assert_eq!(book["updatedAt"], "2026-10-19");

    let (_, json) = send(app.clone(), get("/books")).await;
    assert_eq!(ids(&json), vec![first.clone(), second.clone()]);

    let (_, json) = send(app.clone(), get("/books?reading=1")).await;
    assert_eq!(ids(&json), vec![second.clone()]);

    let (_, json) = send(app.clone(), get("/books?finished=0&reading=0")).await;
    assert_eq!(ids(&json), vec![first.clone()], "reading wins over finished");

    let (_, json) = send(app.clone(), get("/books?name=c&reading=0")).await;
    assert_eq!(ids(&json), vec![second.clone()], "name wins over reading");

    let (status, _) = send(
        app.clone(),
        put_json(&format!("/books/{second}"), &body("C", 50, 50, false)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (_, json) = send(app.clone(), get(&format!("/books/{second}"))).await;
    assert_eq!(json["data"]["book"]["readPage"], 50);
    assert_eq!(json["data"]["book"]["finished"], false);
    assert_eq!(json["data"]["book"]["updatedAt"], "2026-10-19T08:30:00.000Z");

    let (status, _) = send(app.clone(), delete(&format!("/books/{first}"))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = send(app.clone(), get(&format!("/books/{first}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Buku tidak ditemukan");

    let (_, json) = send(app, get("/books")).await;
    assert_eq!(ids(&json), vec![second]);
}
