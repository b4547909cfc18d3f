//! Microfrontend rules tool definition.

use rmcp::model::CallToolResult;
use tracing::instrument;

use super::ToolDefinition;
use super::common::{RuleParams, query_result};
use crate::domains::catalog::{Catalog, Field, Scope};
use crate::domains::tools::ToolError;

/// Microfrontend rules tool.
pub struct MicrofrontendRulesTool;

impl ToolDefinition for MicrofrontendRulesTool {
    const NAME: &'static str = "get-microfrontend-rules";
    const DESCRIPTION: &'static str = "Get all rules for microfrontend development";

    type Params = RuleParams;

    #[instrument(skip_all, fields(category = ?params.category))]
    fn execute(params: &RuleParams, catalog: &Catalog) -> Result<CallToolResult, ToolError> {
        query_result(
            catalog,
            Scope::MicrofrontendRules,
            Field::Category,
            params.category.as_deref(),
        )
    }
}
