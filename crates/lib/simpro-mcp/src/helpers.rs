//! Conversion from client results to the tool-surface contract.
//!
//! Failed upstream requests never propagate to MCP callers. A failed list
//! operation becomes an empty list, a failed detail operation becomes an
//! empty record, and the failure is logged here with the tool name.

use rmcp::ErrorData;
use rmcp::model::{CallToolResult, Content};
use serde_json::{Map, Value};
use simpro_client::ClientResult;
use tracing::warn;

pub(crate) fn list_or_empty(
    tool: &str,
    result: ClientResult<Vec<Value>>,
) -> Result<CallToolResult, ErrorData> {
    let records = match result {
        Ok(records) => records,
        Err(err) => {
            warn!(tool, error = %err, "upstream request failed, returning empty list");
            Vec::new()
        }
    };
    Ok(CallToolResult::success(vec![Content::json(records)?]))
}

pub(crate) fn record_or_empty(
    tool: &str,
    result: ClientResult<Value>,
) -> Result<CallToolResult, ErrorData> {
    let record = match result {
        Ok(record) => record,
        Err(err) => {
            warn!(tool, error = %err, "upstream request failed, returning empty record");
            Value::Object(Map::new())
        }
    };
    Ok(CallToolResult::success(vec![Content::json(record)?]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use simpro_client::ClientError;

    fn first_content_as_json(result: &CallToolResult) -> Value {
        let serialized = serde_json::to_value(result).expect("result serializes");
        let text = serialized["content"][0]["text"]
            .as_str()
            .expect("json content is text")
            .to_string();
        serde_json::from_str(&text).expect("content is valid JSON")
    }

    fn failure() -> ClientError {
        ClientError::Config("unit test failure".to_string())
    }

    #[test]
    fn successful_list_passes_through() {
        let result = list_or_empty("get_jobs", Ok(vec![json!({"ID": 1})])).expect("converts");
        assert_eq!(first_content_as_json(&result), json!([{"ID": 1}]));
    }

    #[test]
    fn failed_list_becomes_empty_list() {
        let result = list_or_empty("get_jobs", Err(failure())).expect("converts");
        assert_eq!(first_content_as_json(&result), json!([]));
    }

    #[test]
    fn failed_record_becomes_empty_record() {
        let result = record_or_empty("get_job", Err(failure())).expect("converts");
        assert_eq!(first_content_as_json(&result), json!({}));
    }
}
