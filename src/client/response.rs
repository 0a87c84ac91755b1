use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Uniform result of a trigger call, whatever happened on the wire.
///
/// On success `data` holds the parsed response body; on failure `error`
/// holds a message. `workflow_id` always echoes the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowResponse {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_id: Option<String>,
}

impl WorkflowResponse {
    /// Success envelope; `executionId` is lifted from the body when it is a string.
    pub fn completed(workflow_id: &str, body: Value) -> Self {
        let execution_id = body
            .get("executionId")
            .and_then(Value::as_str)
            .map(str::to_string);

        Self {
            success: true,
            data: Some(body),
            error: None,
            execution_id,
            workflow_id: Some(workflow_id.to_string()),
        }
    }

    pub fn failed(workflow_id: &str, error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            execution_id: None,
            workflow_id: Some(workflow_id.to_string()),
        }
    }
}
