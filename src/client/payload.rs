use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::json::iso_now;

/// Fixed `source` tag carried by every outbound payload.
pub const SOURCE_TAG: &str = "wfhook";

/// Body POSTed to `<base-url>/<workflow-id>`. Built fresh per call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowPayload {
    pub workflow_id: String,
    pub data: Value,
    pub timestamp: String,
    pub source: String,
}

impl WorkflowPayload {
    pub fn new(workflow_id: impl Into<String>, data: Value) -> Self {
        Self {
            workflow_id: workflow_id.into(),
            data,
            timestamp: iso_now(),
            source: SOURCE_TAG.to_string(),
        }
    }
}

/// One entry of a batch trigger.
///
/// Deserializes from `{ "workflowId": "...", "data": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerRequest {
    pub workflow_id: String,
    #[serde(default)]
    pub data: Value,
}

impl TriggerRequest {
    pub fn new(workflow_id: impl Into<String>, data: Value) -> Self {
        Self {
            workflow_id: workflow_id.into(),
            data,
        }
    }
}
