//! Tool definitions module.
//!
//! Each tool is defined in its own file with:
//! - A parameters struct (schema generated for clients)
//! - `execute()` (core logic against the catalog)
//!
//! Listing metadata, argument parsing and route construction are shared
//! through the `ToolDefinition` trait.

mod common;
pub mod instructions;
pub mod microfrontend_rules;
pub mod microservice_rules;
pub mod prompts;

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;

use super::error::ToolError;
use crate::domains::catalog::Catalog;

pub use common::RuleParams;
pub use instructions::{InstructionsParams, InstructionsTool};
pub use microfrontend_rules::MicrofrontendRulesTool;
pub use microservice_rules::MicroserviceRulesTool;
pub use prompts::{PromptsParams, PromptsTool};

/// Trait for tool definitions.
///
/// Every tool is a pure query against the immutable catalog.
pub trait ToolDefinition {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Arguments accepted by the tool.
    type Params: DeserializeOwned + JsonSchema + 'static;

    /// Run the query and shape the result.
    fn execute(params: &Self::Params, catalog: &Catalog) -> Result<CallToolResult, ToolError>;

    /// Parse raw call arguments and execute.
    ///
    /// Missing arguments are treated as an empty object.
    fn invoke(arguments: Option<JsonObject>, catalog: &Catalog) -> Result<CallToolResult, ToolError> {
        let arguments = serde_json::Value::Object(arguments.unwrap_or_default());
        let params: Self::Params = serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_arguments(format!("{}: {}", Self::NAME, e)))?;
        Self::execute(&params, catalog)
    }

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<Self::Params>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    fn create_route<S>(catalog: Arc<Catalog>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
        Self: 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone();
            let catalog = catalog.clone();
            async move { Self::invoke(args, &catalog).map_err(McpError::from) }.boxed()
        })
    }
}
