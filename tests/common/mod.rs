//! Shared helpers: a test app over a temporary SQLite file, plus
//! request and body utilities.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use roster::{app, AppState, CharacterStore};
use tempfile::TempDir;
use tower::ServiceExt;

/// Build the full router over a fresh database file. The returned
/// `TempDir` must be kept alive for the duration of the test.
pub async fn build_test_app() -> (Router, TempDir) {
    let (store, dir) = build_test_store().await;
    (app(AppState { store }), dir)
}

/// A bare store over a fresh database file, for store-level tests.
pub async fn build_test_store() -> (CharacterStore, TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("test.sqlite");
    let store = CharacterStore::connect(path.to_str().expect("utf-8 path"))
        .await
        .expect("connect");
    store.init().await.expect("init schema");
    (store, dir)
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn post_json(app: &Router, uri: &str, body: &serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: &Router, uri: &str, body: &serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body).await
}

async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    body: &serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A full nine-field request body with the given name.
pub fn character_body(name: &str, class: &str, race: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "character_class": class,
        "race": race,
        "strength": 18,
        "dexterity": 10,
        "constitution": 16,
        "intelligence": 8,
        "wisdom": 10,
        "charisma": 8
    })
}
