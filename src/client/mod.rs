// src/client/mod.rs

//! Outbound workflow trigger client.
//!
//! Every call resolves to a [`WorkflowResponse`] envelope. Configuration,
//! transport, status and decoding failures are all folded into
//! `{ success: false, error }` and logged; nothing is returned as `Err`.

pub mod error;
pub mod payload;
pub mod response;

pub use error::TriggerError;
pub use payload::{TriggerRequest, WorkflowPayload, SOURCE_TAG};
pub use response::WorkflowResponse;

use reqwest::header::USER_AGENT;
use serde_json::Value;
use tokio::task::JoinHandle;

use crate::config::ClientConfig;

/// Triggers workflows by POSTing JSON to `<base-url>/<workflow-id>`.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct WorkflowClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl WorkflowClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// True iff a non-empty webhook base URL is configured.
    pub fn is_configured(&self) -> bool {
        self.config.base_url().is_some()
    }

    /// Trigger one workflow and normalise the outcome into an envelope.
    pub async fn trigger(&self, workflow_id: &str, data: Value) -> WorkflowResponse {
        match self.send(workflow_id, data).await {
            Ok(body) => {
                tracing::debug!(workflow_id, "workflow triggered");
                WorkflowResponse::completed(workflow_id, body)
            }
            Err(err) => {
                tracing::error!(workflow_id, error = %err, "workflow trigger failed");
                WorkflowResponse::failed(workflow_id, err.to_string())
            }
        }
    }

    /// Trigger every request concurrently.
    ///
    /// The output has one envelope per request, in input order, regardless
    /// of completion order. If the batch itself cannot be collected, every
    /// entry becomes the same failure envelope.
    pub async fn trigger_all(&self, requests: Vec<TriggerRequest>) -> Vec<WorkflowResponse> {
        let workflow_ids: Vec<String> = requests.iter().map(|r| r.workflow_id.clone()).collect();

        let handles = requests
            .into_iter()
            .map(|req| {
                let client = self.clone();
                tokio::spawn(async move { client.trigger(&req.workflow_id, req.data).await })
            })
            .collect();

        join_in_order(workflow_ids, handles).await
    }

    async fn send(&self, workflow_id: &str, data: Value) -> Result<Value, TriggerError> {
        let base_url = self.config.base_url().ok_or(TriggerError::NotConfigured)?;
        let url = format!("{}/{}", base_url, workflow_id);

        let payload = WorkflowPayload::new(workflow_id, data);

        let mut request = self
            .http
            .post(&url)
            .header(USER_AGENT, &self.config.user_agent)
            .json(&payload);

        if let Some(timeout) = self.config.timeout() {
            request = request.timeout(timeout);
        }

        let resp = request.send().await?;
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(TriggerError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            });
        }

        resp.json::<Value>().await.map_err(|e| {
            if e.is_decode() {
                TriggerError::Decode(e)
            } else {
                TriggerError::Transport(e)
            }
        })
    }
}

/// Await batch tasks in input order.
///
/// If any task fails to join, every entry becomes the same failure envelope,
/// keyed by its own workflow id.
async fn join_in_order(
    workflow_ids: Vec<String>,
    handles: Vec<JoinHandle<WorkflowResponse>>,
) -> Vec<WorkflowResponse> {
    match futures::future::try_join_all(handles).await {
        Ok(responses) => responses,
        Err(join_err) => {
            let err = TriggerError::from(join_err);
            tracing::error!(count = workflow_ids.len(), error = %err, "workflow batch failed");

            let message = err.to_string();
            workflow_ids
                .iter()
                .map(|id| WorkflowResponse::failed(id, message.clone()))
                .collect()
        }
    }
}
