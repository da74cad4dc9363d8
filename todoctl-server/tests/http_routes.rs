//! Router-level tests
//!
//! Most run against a pool pointing at a closed port, which covers input
//! rejection and the "store down" path without a database.

mod common;

use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

use todoctl_server::db::Store;
use todoctl_server::http::{router, AppState, ServerConfig};

fn unreachable_app() -> Router {
    let pool = PgPoolOptions::new()
        .acquire_timeout(Duration::from_millis(300))
        .connect_lazy("postgres://todoctl@127.0.0.1:1/todoctl")
        .expect("lazy pool");
    app(Store::from_pool(pool))
}

fn app(store: Store) -> Router {
    router(AppState { store }, &ServerConfig::default())
}

fn json_request(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_database_down_as_503() {
    let response = unreachable_app()
        .oneshot(empty_request(Method::GET, "/health"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = body_json(response).await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["database"], "down");
}

#[tokio::test]
#[ignore = "requires database"]
async fn health_reports_database_up() {
    let response = app(common::store().await)
        .oneshot(empty_request(Method::GET, "/health"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "up");
}

#[tokio::test]
async fn non_numeric_id_is_400() {
    let response = unreachable_app()
        .oneshot(empty_request(Method::DELETE, "/tasks/abc"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["message"], "id: must be an integer");
}

#[tokio::test]
async fn empty_task_patch_is_400_without_touching_store() {
    let response = unreachable_app()
        .oneshot(json_request(Method::PATCH, "/tasks/5", "{}"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_user_patch_is_400() {
    let response = unreachable_app()
        .oneshot(json_request(Method::PATCH, "/users/5", "{}"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn immutable_task_field_is_rejected_as_json() {
    let response = unreachable_app()
        .oneshot(json_request(Method::PATCH, "/tasks/5", r#"{"user_id": 2}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["error"], "invalid_body");
}

#[tokio::test]
async fn unknown_option_is_rejected_as_json() {
    let response = unreachable_app()
        .oneshot(json_request(Method::PATCH, "/users/5", r#"{"option": "status"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"], "invalid_body");
    assert!(body["message"].as_str().is_some());
}

#[tokio::test]
async fn toggle_mixed_with_fields_is_rejected() {
    let response = unreachable_app()
        .oneshot(json_request(
            Method::PATCH,
            "/users/5",
            r#"{"option": "sort", "name": "renamed"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["error"], "invalid_body");
}

#[tokio::test]
async fn malformed_json_is_400_with_json_body() {
    let response = unreachable_app()
        .oneshot(json_request(Method::POST, "/tasks", "{not json"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "invalid_body");
}

#[tokio::test]
async fn store_down_is_500_not_404() {
    let response = unreachable_app()
        .oneshot(empty_request(Method::GET, "/users"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["error"], "internal_error");

    let response = unreachable_app()
        .oneshot(empty_request(Method::GET, "/tasks/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
#[ignore = "requires database"]
async fn task_lifecycle_over_http() {
    let store = common::store().await;
    let owner = common::user(&store, false, false).await;
    let app = app(store);

    let body = format!(
        r#"{{"user_id": {}, "value": "Call Mom", "due_date": "2023-07-07", "status": false}}"#,
        owner.id
    );
    let response = app
        .clone()
        .oneshot(json_request(Method::POST, "/tasks", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["due_date"], "2023-07-07");
    let id = created["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            Method::PATCH,
            &format!("/tasks/{id}"),
            r#"{"status": true}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], true);

    let response = app
        .clone()
        .oneshot(empty_request(Method::GET, &format!("/tasks/{}", owner.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);

    let response = app
        .clone()
        .oneshot(empty_request(Method::DELETE, &format!("/tasks/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(empty_request(Method::DELETE, &format!("/tasks/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn user_option_toggle_over_http() {
    let store = common::store().await;
    let owner = common::user(&store, false, false).await;
    let app = app(store);

    let response = app
        .clone()
        .oneshot(json_request(
            Method::PATCH,
            &format!("/users/{}", owner.id),
            r#"{"option": "filter"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["filter"], true);
    assert_eq!(body["sort"], false);

    let response = app
        .oneshot(json_request(
            Method::PATCH,
            &format!("/users/{}", i32::MAX),
            r#"{"option": "sort"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
