//! Helpers shared across catalog tools.

use rmcp::model::{CallToolResult, Content};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::catalog::{Catalog, Field, Filters, Scope, render_records};
use crate::domains::tools::ToolError;

/// Parameters for the rule tools.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct RuleParams {
    /// Optional category filter.
    #[schemars(description = "Optional category filter (architecture, security, deployment, testing)")]
    #[serde(default)]
    pub category: Option<String>,
}

/// Query `scope` with an optional single-field filter and wrap the matches
/// as one JSON text content item.
pub fn query_result(
    catalog: &Catalog,
    scope: Scope,
    field: Field,
    value: Option<&str>,
) -> Result<CallToolResult, ToolError> {
    let filters = Filters::new().with(field, value);
    let records = catalog.query(scope, &filters);
    info!("{:?} query matched {} records", scope, records.len());

    let text = render_records(&records).map_err(|e| ToolError::internal(e.to_string()))?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// Parse the JSON text payload of a single-item tool result.
#[cfg(test)]
pub fn result_json(result: &CallToolResult) -> serde_json::Value {
    let value = serde_json::to_value(result).unwrap();
    let text = value["content"][0]["text"].as_str().unwrap().to_string();
    serde_json::from_str(&text).unwrap()
}
