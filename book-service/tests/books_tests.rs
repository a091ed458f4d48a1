mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;
use serde_json::Value;
use uuid::Uuid;

#[tokio::test]
async fn test_author_creates_book() {
    let app = TestApp::spawn().await;
    let (author_id, access_token) = app.register_and_login("a@x.com", "author").await;

    let book = app.create_book(&access_token, "T", "C").await;

    assert_eq!(book["title"], "T");
    assert_eq!(book["content"], "C");
    assert_eq!(book["author_id"], author_id);
    assert!(book["id"].is_string());
}

#[tokio::test]
async fn test_reader_cannot_create_book() {
    let app = TestApp::spawn().await;
    let (_, access_token) = app.register_and_login("r@x.com", "reader").await;

    let response = app
        .post("/api/v1/books")
        .bearer_auth(&access_token)
        .json(&json!({ "title": "T", "content": "C" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["detail"], "Only authors can create books");
}

#[tokio::test]
async fn test_create_book_rejects_empty_title() {
    let app = TestApp::spawn().await;
    let (_, access_token) = app.register_and_login("a@x.com", "author").await;

    let response = app
        .post("/api/v1/books")
        .bearer_auth(&access_token)
        .json(&json!({ "title": "", "content": "C" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_get_book() {
    let app = TestApp::spawn().await;
    let (_, access_token) = app.register_and_login("a@x.com", "author").await;
    let created = app.create_book(&access_token, "T", "C").await;
    let book_id = created["id"].as_str().unwrap();

    let response = app
        .get(&format!("/api/v1/books/{}", book_id))
        .bearer_auth(&access_token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["id"], *book_id);
    assert_eq!(body["title"], "T");
}

#[tokio::test]
async fn test_get_book_not_found() {
    let app = TestApp::spawn().await;
    let (_, access_token) = app.register_and_login("a@x.com", "author").await;

    let response = app
        .get(&format!("/api/v1/books/{}", Uuid::new_v4()))
        .bearer_auth(&access_token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["detail"], "Book not found");
}

#[tokio::test]
async fn test_get_book_invalid_id() {
    let app = TestApp::spawn().await;
    let (_, access_token) = app.register_and_login("a@x.com", "author").await;

    let response = app
        .get("/api/v1/books/not-a-uuid")
        .bearer_auth(&access_token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_list_books() {
    let app = TestApp::spawn().await;
    let (_, access_token) = app.register_and_login("a@x.com", "author").await;
    app.create_book(&access_token, "First", "C1").await;
    app.create_book(&access_token, "Second", "C2").await;

    let response = app
        .get("/api/v1/books")
        .bearer_auth(&access_token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    let books = body.as_array().expect("Expected a list");
    assert_eq!(books.len(), 2);
}

#[tokio::test]
async fn test_update_book_by_owner() {
    let app = TestApp::spawn().await;
    let (_, access_token) = app.register_and_login("a@x.com", "author").await;
    let created = app.create_book(&access_token, "T", "C").await;
    let book_id = created["id"].as_str().unwrap();

    let response = app
        .put(&format!("/api/v1/books/{}", book_id))
        .bearer_auth(&access_token)
        .json(&json!({ "title": "New title" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["title"], "New title");
    // Fields not in the request are unchanged
    assert_eq!(body["content"], "C");
}

#[tokio::test]
async fn test_update_book_by_non_owner() {
    let app = TestApp::spawn().await;
    let (_, owner_token) = app.register_and_login("a@x.com", "author").await;
    let (_, other_token) = app.register_and_login("b@x.com", "author").await;
    let created = app.create_book(&owner_token, "T", "C").await;
    let book_id = created["id"].as_str().unwrap();

    let response = app
        .put(&format!("/api/v1/books/{}", book_id))
        .bearer_auth(&other_token)
        .json(&json!({ "title": "Hijacked" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["detail"], "Only the author can modify this book");
}

#[tokio::test]
async fn test_update_missing_book_is_not_found_before_forbidden() {
    // Existence is checked before ownership: a nonexistent id is 404 even
    // for a caller who could never own it.
    let app = TestApp::spawn().await;
    let (_, reader_token) = app.register_and_login("r@x.com", "reader").await;

    let response = app
        .put(&format!("/api/v1/books/{}", Uuid::new_v4()))
        .bearer_auth(&reader_token)
        .json(&json!({ "title": "New title" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_book_by_owner() {
    let app = TestApp::spawn().await;
    let (_, access_token) = app.register_and_login("a@x.com", "author").await;
    let created = app.create_book(&access_token, "T", "C").await;
    let book_id = created["id"].as_str().unwrap();

    let response = app
        .delete(&format!("/api/v1/books/{}", book_id))
        .bearer_auth(&access_token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The book is gone
    let lookup = app
        .get(&format!("/api/v1/books/{}", book_id))
        .bearer_auth(&access_token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(lookup.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_book_by_non_owner() {
    let app = TestApp::spawn().await;
    let (_, owner_token) = app.register_and_login("a@x.com", "author").await;
    let (_, other_token) = app.register_and_login("b@x.com", "author").await;
    let created = app.create_book(&owner_token, "T", "C").await;
    let book_id = created["id"].as_str().unwrap();

    let response = app
        .delete(&format!("/api/v1/books/{}", book_id))
        .bearer_auth(&other_token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["detail"], "Only the author can delete this book");
}

#[tokio::test]
async fn test_delete_missing_book_is_not_found() {
    let app = TestApp::spawn().await;
    let (_, access_token) = app.register_and_login("a@x.com", "author").await;

    let response = app
        .delete(&format!("/api/v1/books/{}", Uuid::new_v4()))
        .bearer_auth(&access_token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_my_books() {
    let app = TestApp::spawn().await;
    let (author_id, author_token) = app.register_and_login("a@x.com", "author").await;
    let (_, other_token) = app.register_and_login("b@x.com", "author").await;
    app.create_book(&author_token, "Mine 1", "C").await;
    app.create_book(&author_token, "Mine 2", "C").await;
    app.create_book(&other_token, "Theirs", "C").await;

    let response = app
        .get("/api/v1/books/user")
        .bearer_auth(&author_token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    let books = body.as_array().expect("Expected a list");
    assert_eq!(books.len(), 2);
    for book in books {
        assert_eq!(book["author_id"], author_id);
    }
}

#[tokio::test]
async fn test_list_my_books_as_reader_is_empty() {
    let app = TestApp::spawn().await;
    let (_, author_token) = app.register_and_login("a@x.com", "author").await;
    let (_, reader_token) = app.register_and_login("r@x.com", "reader").await;
    app.create_book(&author_token, "T", "C").await;

    let response = app
        .get("/api/v1/books/user")
        .bearer_auth(&reader_token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body.as_array().unwrap().len(), 0);
}
