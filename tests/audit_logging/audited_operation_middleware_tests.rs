use airbyte_notification_audit::audit_logging::interfaces::rest::middleware::audited_operation_middleware::{
    AuditedOperationState, record_operation_outcome,
};
use axum::{
    Json, Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
    middleware,
    response::IntoResponse,
    routing::get,
};
use serde_json::json;
use tower::ServiceExt;

use crate::support::{create_failing_harness, create_harness};

async fn found_source() -> impl IntoResponse {
    (StatusCode::OK, "source-1")
}

async fn missing_source() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "source not found" })),
    )
}

async fn broken_source() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, "stack overflow")
}

fn audited_router(state: AuditedOperationState) -> Router {
    Router::new()
        .route("/sources/found", get(found_source))
        .route("/sources/missing", get(missing_source))
        .route("/sources/broken", get(broken_source))
        .layer(middleware::from_fn_with_state(state, record_operation_outcome))
}

fn get_request(path: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .body(Body::empty())
        .expect("valid request")
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

#[tokio::test]
async fn successful_response_is_recorded_without_error_message() {
    let harness = create_harness();
    let app = audited_router(AuditedOperationState::new(harness.service.clone(), "getSource"));

    let response = app
        .oneshot(get_request("/sources/found"))
        .await
        .expect("infallible");

    assert_eq!(response.status(), StatusCode::OK);
    let entries = harness.sink.entries();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].success());
    assert_eq!(entries[0].error_message(), None);
    assert_eq!(entries[0].action_name(), "getSource");
    assert_eq!(entries[0].summary(), "GET /sources/found");
    assert!(entries[0].is_system_initiated());
}

#[tokio::test]
async fn error_response_is_recorded_with_its_message_and_passed_through() {
    let harness = create_harness();
    let app = audited_router(AuditedOperationState::new(harness.service.clone(), "getSource"));

    let response = app
        .oneshot(get_request("/sources/missing"))
        .await
        .expect("infallible");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(response).await, r#"{"message":"source not found"}"#);
    let entries = harness.sink.entries();
    assert_eq!(entries.len(), 1);
    assert!(!entries[0].success());
    assert_eq!(entries[0].error_message(), Some("source not found"));
}

#[tokio::test]
async fn error_response_without_json_message_falls_back_to_status_reason() {
    let harness = create_harness();
    let app = audited_router(AuditedOperationState::new(harness.service.clone(), "getSource"));

    let response = app
        .oneshot(get_request("/sources/broken"))
        .await
        .expect("infallible");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "stack overflow");
    let entries = harness.sink.entries();
    assert_eq!(entries[0].error_message(), Some("Internal Server Error"));
}

#[tokio::test]
async fn sink_failure_leaves_response_untouched() {
    let harness = create_failing_harness();
    let app = audited_router(AuditedOperationState::new(harness.service.clone(), "getSource"));

    let response = app
        .oneshot(get_request("/sources/found"))
        .await
        .expect("infallible");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "source-1");
    assert!(harness.sink.entries().is_empty());
}
