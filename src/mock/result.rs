use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::execution_id::ExecutionId;
use crate::json::{iso_now, non_empty_str, spread};

pub const DEFAULT_WORKFLOW_ID: &str = "test-workflow";
pub const SUCCESS_MESSAGE: &str = "Mock workflow executed successfully";
pub const FAILURE_MESSAGE: &str = "Mock workflow execution failed";
pub const MOCK_RESULT: &str = "This is a simulated workflow response";

/// Synthetic result returned by the mock endpoint for every accepted body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockExecutionResult {
    pub success: bool,
    pub execution_id: ExecutionId,
    pub workflow_id: String,
    pub message: String,
    pub timestamp: String,
    pub received_data: Value,
    pub processed_data: Value,
}

impl MockExecutionResult {
    /// Build a result for `body`.
    ///
    /// `processedData` is `body` spread into an object plus exactly
    /// `processed`, `processedAt` and `mockResult`.
    pub fn for_body(body: Value) -> Self {
        let workflow_id = non_empty_str(&body, "workflowId")
            .unwrap_or(DEFAULT_WORKFLOW_ID)
            .to_string();

        let mut processed = spread(&body);
        processed.insert("processed".into(), Value::Bool(true));
        processed.insert("processedAt".into(), Value::String(iso_now()));
        processed.insert("mockResult".into(), Value::String(MOCK_RESULT.into()));

        Self {
            success: true,
            execution_id: ExecutionId::new(),
            workflow_id,
            message: SUCCESS_MESSAGE.to_string(),
            timestamp: iso_now(),
            received_data: body,
            processed_data: Value::Object(processed),
        }
    }
}
