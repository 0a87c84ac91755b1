//! Local stand-in for a workflow-automation webhook.
//!
//! `POST /api/workflows/test` accepts any JSON body, waits a fixed delay and
//! answers with a [`MockExecutionResult`]. `GET` on the same path describes
//! the endpoint. Requests are independent; nothing is stored.

pub mod result;

pub use result::MockExecutionResult;

use crate::config::ServerConfig;
use crate::json::iso_now;
use result::FAILURE_MESSAGE;

use anyhow::Context;
use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{HeaderMap, Method, Request, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::{future::Future, net::SocketAddr, time::Duration};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::Span;

/// Base path a client should use to reach the mock as workflow [`MOCK_WORKFLOW_ID`].
pub const MOCK_BASE_PATH: &str = "/api/workflows";
pub const MOCK_WORKFLOW_ID: &str = "test";
/// Path served by the mock endpoint.
pub const MOCK_PATH: &str = "/api/workflows/test";

#[derive(Debug, Clone)]
pub struct MockState {
    /// Simulated processing time per POST
    pub delay: Duration,
}

impl MockState {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockState {
    fn default() -> Self {
        Self::new(ServerConfig::default().delay())
    }
}

/* ---------------- server ---------------- */

pub fn router(state: MockState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(MOCK_PATH, get(describe).post(execute))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &Request<Body>| {
                    tracing::info_span!(
                        "http_request",
                        method = %req.method(),
                        path = %req.uri().path(),
                    )
                })
                .on_response(|res: &Response, latency: Duration, _span: &Span| {
                    tracing::info!(
                        status = res.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "request completed"
                    );
                }),
        )
}

/// Bind `cfg.addr` and serve until Ctrl-C.
pub async fn serve(cfg: &ServerConfig) -> anyhow::Result<()> {
    let socket: SocketAddr = cfg
        .addr
        .parse()
        .with_context(|| format!("Invalid listen address: {}", cfg.addr))?;
    let listener = TcpListener::bind(socket)
        .await
        .with_context(|| format!("Failed to bind {}", socket))?;

    serve_on(listener, MockState::new(cfg.delay()), async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

/// Serve on an already bound listener until `shutdown` resolves.
pub async fn serve_on<F>(listener: TcpListener, state: MockState, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!("mock workflow endpoint listening on http://{}{}", addr, MOCK_PATH);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("mock workflow endpoint stopped");
    Ok(())
}

/* ---------------- endpoints ---------------- */

async fn health() -> &'static str {
    "ok"
}

async fn execute(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    match run_mock(&state, &method, &uri, &headers, &body).await {
        Ok(result) => (
            StatusCode::OK,
            [
                ("x-workflow-status", "completed".to_string()),
                ("x-execution-time", format!("{}ms", state.delay.as_millis())),
            ],
            Json(result),
        )
            .into_response(),

        Err(e) => {
            tracing::error!(error = %e, "mock workflow execution failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "success": false,
                    "error": e.to_string(),
                    "timestamp": iso_now(),
                    "message": FAILURE_MESSAGE,
                })),
            )
                .into_response()
        }
    }
}

async fn run_mock(
    state: &MockState,
    method: &Method,
    uri: &Uri,
    headers: &HeaderMap,
    body: &[u8],
) -> anyhow::Result<MockExecutionResult> {
    let body: Value = serde_json::from_slice(body)?;

    tracing::info!(
        timestamp = %iso_now(),
        method = %method,
        url = %uri,
        headers = ?headers,
        body = %body,
        "mock workflow received request"
    );

    tokio::time::sleep(state.delay).await;

    Ok(MockExecutionResult::for_body(body))
}

async fn describe() -> Json<Value> {
    Json(describe_document())
}

/// Static self-description served on `GET`.
pub fn describe_document() -> Value {
    json!({
        "message": "Mock Workflow Webhook Test Endpoint",
        "description": "This endpoint simulates a workflow-automation webhook for testing purposes",
        "methods": ["POST"],
        "usage": {
            "url": MOCK_PATH,
            "method": "POST",
            "contentType": "application/json",
            "example": {
                "workflowId": "test-workflow",
                "data": {
                    "email": "user@example.com",
                    "action": "user_signup"
                }
            }
        },
        "note": "This is a mock endpoint. Point WEBHOOK_BASE_URL at a real workflow service in production."
    })
}
