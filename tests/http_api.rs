//! End-to-end tests driving the router for both route profiles.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

use hospital_records::api::{create_router, AppState};
use hospital_records::config::Profile;
use hospital_records::records::{FixedClock, RecordAssembler, RecordStore};

fn app(profile: Profile) -> (Router, RecordStore) {
    let store = RecordStore::new();
    let today = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();
    let assembler = RecordAssembler::with_clock(store.clone(), Arc::new(FixedClock(today)));
    let router = create_router(AppState::with_assembler(assembler), profile);
    (router, store)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn create(app: &Router, name: &str, dob: &str, username: &str) -> (StatusCode, Value) {
    let body = json!({ "name": name, "dob": dob, "username": username });
    let request = Request::builder()
        .method("POST")
        .uri("/v1/hospital")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

#[tokio::test]
async fn create_returns_stored_record() {
    let (app, store) = app(Profile::A);

    let (status, body) = create(&app, "John", "29-02-2024", "john@example.com").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": 1,
            "name": "John",
            "dob": "29-02-2024",
            "doj": "14-10-2026",
            "username": "john@example.com",
        })
    );
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn validation_failures_are_bad_requests() {
    let (app, store) = app(Profile::A);

    let cases = [
        ("John123", "01-01-1990", "j@example.com", "Name should contain only alphabets"),
        (
            "John",
            "1990-01-01",
            "j@example.com",
            "Invalid date of birth format. Should be in DD-MM-YYYY format",
        ),
        ("John", "29-02-2023", "j@example.com", "February cannot contain the specified date"),
        ("John", "31-06-2023", "j@example.com", "June cannot contain the specified date"),
        ("John", "01-01-1990", "j..x@example.com", "Invalid email format for username"),
    ];

    for (name, dob, username, message) in cases {
        let (status, body) = create(&app, name, dob, username).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{name} {dob} {username}");
        assert_eq!(body, json!({ "error": message }));
    }
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn missing_fields_are_bad_requests() {
    let (app, store) = app(Profile::B);

    let request = Request::builder()
        .method("POST")
        .uri("/v1/hospital")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"name":"John"}"#))
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "error": "Missing data. Please provide name, date of birth, and username." })
    );
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn duplicate_username_is_rejected() {
    let (app, store) = app(Profile::A);
    create(&app, "John", "01-01-1990", "john@example.com").await;

    let (status, body) = create(&app, "Jane", "02-02-1992", "john@example.com").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Username already exists" }));
    assert_eq!(store.len().await, 1);

    let (status, _) = create(&app, "Jane", "02-02-1992", "John@example.com").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn profile_a_lists_summaries_in_creation_order() {
    let (app, _) = app(Profile::A);
    create(&app, "Ann", "01-01-1990", "ann@example.com").await;
    create(&app, "Bob", "02-02-1991", "bob@example.com").await;
    create(&app, "Cy", "03-03-1992", "cy@example.com").await;

    let (status, first) = get(&app, "/v1/hospitals").await;
    let (_, second) = get(&app, "/v1/hospitals").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        first,
        json!([
            { "id": 1, "name": "Ann", "dob": "01-01-1990", "doj": "14-10-2026" },
            { "id": 2, "name": "Bob", "dob": "02-02-1991", "doj": "14-10-2026" },
            { "id": 3, "name": "Cy", "dob": "03-03-1992", "doj": "14-10-2026" },
        ])
    );
    assert_eq!(first, second);
}

#[tokio::test]
async fn profile_b_lists_full_records() {
    let (app, _) = app(Profile::B);
    create(&app, "Ann", "01-01-1990", "ann@example.com").await;
    create(&app, "Bob", "02-02-1991", "bob@example.com").await;

    let (status, body) = get(&app, "/v1/hospital").await;

    assert_eq!(status, StatusCode::OK);
    let usernames: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["username"].as_str().unwrap())
        .collect();
    assert_eq!(usernames, vec!["ann@example.com", "bob@example.com"]);
}

#[tokio::test]
async fn profile_b_fetches_by_username() {
    let (app, _) = app(Profile::B);
    create(&app, "Ann", "01-01-1990", "ann@example.com").await;

    let (status, body) = get(&app, "/v1/hospital/ann@example.com").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Ann");
    assert_eq!(body["id"], 1);

    let (status, body) = get(&app, "/v1/hospital/nobody@example.com").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "User not found" }));
}

#[tokio::test]
async fn unmatched_route_changes_nothing() {
    let (app, store) = app(Profile::A);
    create(&app, "Ann", "01-01-1990", "ann@example.com").await;

    let request = Request::builder()
        .method("POST")
        .uri("/v1/hospitals")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "name": "Bob", "dob": "02-02-1991", "username": "bob@example.com" })
                .to_string(),
        ))
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({ "error": "Invalid URL. Please check the endpoint and try again." })
    );
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn client_cannot_set_server_fields() {
    let (app, _) = app(Profile::A);

    let request = Request::builder()
        .method("POST")
        .uri("/v1/hospital")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "id": 500,
                "doj": "01-01-1900",
                "name": "Ann",
                "dob": "01-01-1990",
                "username": "ann@example.com",
            })
            .to_string(),
        ))
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["doj"], "14-10-2026");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let (app, _) = app(Profile::A);

    let (status, body) = get(&app, "/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/v1/hospital"].is_object());
}
