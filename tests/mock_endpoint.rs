//! In-process tests for the mock workflow endpoint.
//!
//! Requests are dispatched straight into the router with `oneshot`.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use regex::Regex;
use serde_json::{json, Value};
use std::time::{Duration, Instant};
use tower::ServiceExt;
use wfhook::mock::{describe_document, router, MockState, MOCK_PATH};

fn app(delay_ms: u64) -> Router {
    router(MockState::new(Duration::from_millis(delay_ms)))
}

async fn post_raw(app: Router, body: &str) -> (StatusCode, axum::http::HeaderMap, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(MOCK_PATH)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let headers = resp.headers().clone();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, headers, serde_json::from_slice(&bytes).unwrap())
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

#[tokio::test]
async fn post_echoes_body_and_workflow_id() {
    let data = json!({
        "workflowId": "user-signup",
        "email": "user@example.com",
        "tags": ["a", "b"],
        "nested": { "n": 1.5, "flag": null }
    });

    let (status, headers, body) = post_raw(app(0), &data.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers["x-workflow-status"], "completed");
    assert_eq!(headers["x-execution-time"], "0ms");
    assert!(headers["content-type"]
        .to_str()
        .unwrap()
        .starts_with("application/json"));

    assert_eq!(body["success"], true);
    assert_eq!(body["workflowId"], "user-signup");
    assert_eq!(body["message"], "Mock workflow executed successfully");
    assert_eq!(body["receivedData"], data);
    assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn post_without_workflow_id_uses_default() {
    let (status, _, body) = post_raw(app(0), r#"{"email":"x@y.z"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["workflowId"], "test-workflow");
}

#[tokio::test]
async fn post_accepts_non_object_json() {
    let (status, _, body) = post_raw(app(0), "[1,2]").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["receivedData"], json!([1, 2]));
    assert_eq!(body["processedData"]["0"], 1);
    assert_eq!(body["processedData"]["processed"], true);
}

#[tokio::test]
async fn processed_data_is_received_data_plus_three_fields() {
    let data = json!({ "name": "Ada", "count": 3 });
    let (_, _, body) = post_raw(app(0), &data.to_string()).await;

    let mut processed = body["processedData"].as_object().unwrap().clone();
    assert_eq!(processed.remove("processed"), Some(json!(true)));
    assert!(processed.remove("processedAt").unwrap().is_string());
    assert!(processed.remove("mockResult").unwrap().is_string());
    assert_eq!(Value::Object(processed), body["receivedData"]);
}

#[tokio::test]
async fn execution_ids_are_well_formed_and_unique() {
    let re = Regex::new(r"^exec_\d+_[0-9a-z]{9}$").unwrap();
    let app = app(0);

    let (_, _, first) = post_raw(app.clone(), "{}").await;
    let (_, _, second) = post_raw(app, "{}").await;

    let a = first["executionId"].as_str().unwrap();
    let b = second["executionId"].as_str().unwrap();
    assert!(re.is_match(a), "{a}");
    assert!(re.is_match(b), "{b}");
    assert_ne!(a, b);
}

#[tokio::test]
async fn post_waits_for_configured_delay() {
    let started = Instant::now();
    let (status, headers, _) = post_raw(app(100), "{}").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers["x-execution-time"], "100ms");
    assert!(started.elapsed() >= Duration::from_millis(100));
}

#[tokio::test]
async fn malformed_json_returns_500_with_error_body() {
    let (status, _, body) = post_raw(app(0), "{ not json").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Mock workflow execution failed");
    assert!(!body["error"].as_str().unwrap().is_empty());
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn empty_body_returns_500() {
    let (status, _, body) = post_raw(app(0), "").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn get_describes_endpoint_and_is_stable() {
    let app = app(0);
    let (status, first) = get(app.clone(), MOCK_PATH).await;
    let (_, second) = get(app, MOCK_PATH).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(first, second);

    let doc: Value = serde_json::from_slice(&first).unwrap();
    assert_eq!(doc, describe_document());
    assert!(doc["methods"]
        .as_array()
        .unwrap()
        .contains(&json!("POST")));
    assert_eq!(doc["usage"]["contentType"], "application/json");
    assert_eq!(doc["usage"]["url"], MOCK_PATH);
    assert!(doc["usage"]["example"]["workflowId"].is_string());
}

#[tokio::test]
async fn health_is_ok() {
    let (status, body) = get(app(0), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");
}

#[test]
fn mock_path_joins_base_and_workflow() {
    assert_eq!(
        format!("{}/{}", wfhook::mock::MOCK_BASE_PATH, wfhook::mock::MOCK_WORKFLOW_ID),
        MOCK_PATH
    );
}
