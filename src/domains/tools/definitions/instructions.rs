//! Task instructions tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::instrument;

use super::ToolDefinition;
use super::common::query_result;
use crate::domains::catalog::{Catalog, Field, Scope};
use crate::domains::tools::ToolError;

/// Parameters for the instructions tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct InstructionsParams {
    /// Optional task type.
    #[schemars(description = "Task type (setup, deployment, testing, debugging)")]
    #[serde(default)]
    pub task: Option<String>,
}

/// Task instructions tool.
pub struct InstructionsTool;

impl ToolDefinition for InstructionsTool {
    const NAME: &'static str = "get-instructions";
    const DESCRIPTION: &'static str = "Get step-by-step instructions for common tasks";

    type Params = InstructionsParams;

    #[instrument(skip_all, fields(task = ?params.task))]
    fn execute(params: &InstructionsParams, catalog: &Catalog) -> Result<CallToolResult, ToolError> {
        query_result(catalog, Scope::Instructions, Field::Task, params.task.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::result_json;
    use serde_json::json;

    #[test]
    fn test_empty_task_returns_everything() {
        let instructions = vec![
            json!({ "id": 1, "task": "setup" }),
            json!({ "id": 2, "task": "debugging" }),
        ]
        .into_iter()
        .map(|v| serde_json::from_value(v).unwrap())
        .collect();
        let catalog = Catalog::new(vec![], vec![], instructions);

        let filtered = InstructionsTool::invoke(json!({ "task": "" }).as_object().cloned(), &catalog)
            .unwrap();
        let unfiltered = InstructionsTool::invoke(None, &catalog).unwrap();
        assert_eq!(result_json(&filtered), result_json(&unfiltered));
        assert_eq!(result_json(&filtered).as_array().unwrap().len(), 2);
    }
}
