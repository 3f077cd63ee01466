mod common;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use metals_backend::app;
use metals_backend::entities::prices;
use sea_orm::{DatabaseBackend, DatabaseConnection, DbErr, MockDatabase};
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::common::test_state;

fn price_app(db: DatabaseConnection) -> Router {
    app(test_state(
        db,
        "http://unused.invalid",
        "http://unused.invalid",
    ))
}

fn post_json(body: String) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/prices/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn add_price_echoes_submitted_record() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![prices::Model {
            id: 1,
            metal: "XAU".to_string(),
            price: 1912.25,
            currency: "USD".to_string(),
        }]])
        .into_connection();

    let request = post_json(json!({"metal": "XAU", "price": 1912.25, "currency": "USD"}).to_string());
    let response = price_app(db).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body).unwrap();

    // Round-trip: the stored record equals the submission, with no
    // storage-internal fields leaking out.
    assert_eq!(
        body,
        json!({"metal": "XAU", "price": 1912.25, "currency": "USD"})
    );
}

#[tokio::test]
async fn missing_field_is_rejected_by_the_framework() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let request = post_json(json!({"metal": "XAU", "currency": "USD"}).to_string());
    let response = price_app(db).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn wrong_field_type_is_rejected_by_the_framework() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let request =
        post_json(json!({"metal": "XAU", "price": "not-a-number", "currency": "USD"}).to_string());
    let response = price_app(db).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn store_failure_surfaces_as_generic_500() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Custom("connection refused".to_string())])
        .into_connection();

    let request = post_json(json!({"metal": "XAU", "price": 1912.25, "currency": "USD"}).to_string());
    let response = price_app(db).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert!(body["detail"].as_str().unwrap().contains("Database error"));
}
