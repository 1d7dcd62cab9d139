//! HTTP surface tests over the in-memory store.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use coach_booking::config::Config;
use coach_booking::controllers;
use coach_booking::layout::CoachLayout;
use coach_booking::store::memory::MemSeatStore;
use coach_booking::AppState;

fn app(store: Arc<MemSeatStore>) -> Router {
    let state = AppState::with_store(store, Config::for_tests());
    Router::new().nest("/api", controllers::routes()).with_state(state)
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn seat_chart_snapshot() {
    let store = Arc::new(MemSeatStore::seeded(&CoachLayout::default()));
    store.book_directly(&["2-3"]);
    let app = app(store);

    let response = app
        .oneshot(Request::get("/api/seats").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let seats = body.as_array().unwrap();
    assert_eq!(seats.len(), 87);

    let booked: Vec<&str> = seats
        .iter()
        .filter(|s| s["booked"].as_bool().unwrap())
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    assert_eq!(booked, vec!["2-3"]);

    let exit = seats.iter().find(|s| s["id"] == "4-1").unwrap();
    assert_eq!(exit["category"], "exit");
    assert_eq!(exit["price"], 380.0);
}

#[tokio::test]
async fn unreachable_store_serves_an_empty_chart() {
    let store = Arc::new(MemSeatStore::seeded(&CoachLayout::default()));
    store.set_unavailable(true);
    let app = app(store);

    let response = app
        .oneshot(Request::get("/api/seats").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!([]));
}

#[tokio::test]
async fn allocation_prefers_the_first_contiguous_block() {
    let store = Arc::new(MemSeatStore::seeded(&CoachLayout::default()));
    let app = app(store);

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/seats/allocate",
            json!({"count": 3}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["seats"], json!(["1-1", "1-2", "1-3"]));
    assert_eq!(body["total_price"], 390.0);
}

#[tokio::test]
async fn toggling_a_booked_seat_is_a_conflict() {
    let store = Arc::new(MemSeatStore::seeded(&CoachLayout::default()));
    store.book_directly(&["3-3"]);
    let app = app(store);

    let response = app
        .oneshot(json_request(
            Method::PATCH,
            "/api/seats/toggle",
            json!({"seat_id": "3-3", "selected": []}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn toggle_extends_the_client_selection() {
    let store = Arc::new(MemSeatStore::seeded(&CoachLayout::default()));
    let app = app(store);

    let response = app
        .oneshot(json_request(
            Method::PATCH,
            "/api/seats/toggle",
            json!({"seat_id": "4-1", "selected": ["1-1", "1-2"]}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["selected"], json!(["1-1", "1-2", "4-1"]));
    assert_eq!(body["total_price"], 640.0);
}

#[tokio::test]
async fn toggle_past_the_limit_is_rejected() {
    let store = Arc::new(MemSeatStore::seeded(&CoachLayout::default()));
    let app = app(store);

    let response = app
        .oneshot(json_request(
            Method::PATCH,
            "/api/seats/toggle",
            json!({
                "seat_id": "2-1",
                "selected": ["1-1", "1-2", "1-3", "1-4", "1-5", "1-6", "1-7"]
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn booking_lifecycle_over_http() {
    let store = Arc::new(MemSeatStore::seeded(&CoachLayout::default()));

    let response = app(store.clone())
        .oneshot(json_request(
            Method::POST,
            "/api/bookings",
            json!({"seats": ["1-1", "1-2"], "name": "Asha", "email": "asha@example.com"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response).await;
    assert_eq!(body["seats"], json!(["1-1", "1-2"]));
    assert_eq!(body["price"], 260.0);

    // Same seats again: conflict with the ids spelled out
    let response = app(store.clone())
        .oneshot(json_request(
            Method::POST,
            "/api/bookings",
            json!({"seats": ["1-2", "1-3"], "name": "Ravi", "email": "ravi@example.com"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    assert_eq!(store.bookings().len(), 1);
}

#[tokio::test]
async fn booking_validation_failures_are_bad_requests() {
    let store = Arc::new(MemSeatStore::seeded(&CoachLayout::default()));

    // missing contact details
    let response = app(store.clone())
        .oneshot(json_request(
            Method::POST,
            "/api/bookings",
            json!({"seats": ["1-1"], "name": "", "email": ""}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // empty selection
    let response = app(store.clone())
        .oneshot(json_request(
            Method::POST,
            "/api/bookings",
            json!({"seats": [], "name": "Asha", "email": "asha@example.com"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // a seat that is not on the coach at all
    let response = app(store.clone())
        .oneshot(json_request(
            Method::POST,
            "/api/bookings",
            json!({"seats": ["13-7"], "name": "Asha", "email": "asha@example.com"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert!(store.bookings().is_empty());
}

#[tokio::test]
async fn store_failure_mid_commit_is_a_generic_error() {
    let store = Arc::new(MemSeatStore::seeded(&CoachLayout::default()));
    store.set_fail_writes(true);

    let response = app(store.clone())
        .oneshot(json_request(
            Method::POST,
            "/api/bookings",
            json!({"seats": ["1-1"], "name": "Asha", "email": "asha@example.com"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(store.bookings().is_empty());
}
