//! Failures that can occur while triggering a workflow.
//!
//! None of these escape the client: they are rendered into the `error`
//! field of a [`super::WorkflowResponse`].

use thiserror::Error;

use crate::config::ENV_WEBHOOK_BASE_URL;

#[derive(Debug, Error)]
pub enum TriggerError {
    /// No usable webhook base URL; detected before any network call.
    #[error("webhook base URL is not configured (set {})", ENV_WEBHOOK_BASE_URL)]
    NotConfigured,

    /// Connect, send or timeout failure in the HTTP transport.
    #[error("workflow request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote answered with a non-2xx status.
    #[error("workflow request failed: {status} {reason}. {body}")]
    Status {
        status: u16,
        reason: String,
        body: String,
    },

    /// A 2xx response whose body is not JSON.
    #[error("invalid workflow JSON: {0}")]
    Decode(reqwest::Error),

    /// A batch task could not be joined.
    #[error("workflow batch failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
