//! Development prompts tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::instrument;

use super::ToolDefinition;
use super::common::query_result;
use crate::domains::catalog::{Catalog, Field, Scope};
use crate::domains::tools::ToolError;

/// Parameters for the prompts tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct PromptsParams {
    /// Optional prompt kind.
    #[schemars(description = "Type of prompts (microservice, microfrontend, general)")]
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Development prompts tool.
pub struct PromptsTool;

impl ToolDefinition for PromptsTool {
    const NAME: &'static str = "get-prompts";
    const DESCRIPTION: &'static str = "Get development prompts and best practices";

    type Params = PromptsParams;

    #[instrument(skip_all, fields(kind = ?params.kind))]
    fn execute(params: &PromptsParams, catalog: &Catalog) -> Result<CallToolResult, ToolError> {
        query_result(catalog, Scope::Prompts, Field::Kind, params.kind.as_deref())
    }
}
