//! Microservice rules tool definition.
//!
//! Returns the rules that apply to microservice development, optionally
//! narrowed to one category.

use rmcp::model::CallToolResult;
use tracing::instrument;

use super::ToolDefinition;
use super::common::{RuleParams, query_result};
use crate::domains::catalog::{Catalog, Field, Scope};
use crate::domains::tools::ToolError;

/// Microservice rules tool.
pub struct MicroserviceRulesTool;

impl ToolDefinition for MicroserviceRulesTool {
    const NAME: &'static str = "get-microservice-rules";
    const DESCRIPTION: &'static str = "Get all rules for microservice development";

    type Params = RuleParams;

    #[instrument(skip_all, fields(category = ?params.category))]
    fn execute(params: &RuleParams, catalog: &Catalog) -> Result<CallToolResult, ToolError> {
        query_result(
            catalog,
            Scope::MicroserviceRules,
            Field::Category,
            params.category.as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::Record;
    use crate::domains::tools::definitions::common::result_json;
    use serde_json::json;

    fn catalog() -> Catalog {
        let rules = vec![
            json!({ "id": 1, "type": "microservice", "category": "security" }),
            json!({ "id": 2, "type": "microfrontend", "category": "security" }),
        ]
        .into_iter()
        .map(|v| serde_json::from_value::<Record>(v).unwrap())
        .collect();
        Catalog::new(rules, vec![], vec![])
    }

    fn text(result: &CallToolResult) -> serde_json::Value {
        result_json(result)
    }

    #[test]
    fn test_metadata() {
        let tool = MicroserviceRulesTool::to_tool();
        assert_eq!(tool.name, "get-microservice-rules");
        assert!(tool.input_schema.get("properties").is_some());
    }

    #[test]
    fn test_without_category() {
        let result = MicroserviceRulesTool::invoke(None, &catalog()).unwrap();
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result.content.len(), 1);
        assert_eq!(
            text(&result),
            json!([{ "id": 1, "type": "microservice", "category": "security" }])
        );
    }

    #[test]
    fn test_unmatched_category_is_empty() {
        let params = RuleParams {
            category: Some("testing".to_string()),
        };
        let result = MicroserviceRulesTool::execute(&params, &catalog()).unwrap();
        assert_eq!(text(&result), json!([]));
    }

    #[test]
    fn test_non_string_category_is_rejected() {
        let args = json!({ "category": 5 }).as_object().cloned();
        let err = MicroserviceRulesTool::invoke(args, &catalog()).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }
}
