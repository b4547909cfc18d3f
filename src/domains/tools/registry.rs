//! Tool Registry - listing and direct dispatch of the catalog operations.
//!
//! The registry is used by the HTTP transport and by embedders that call
//! tools without going through the rmcp tool router.

use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::{info, warn};

use super::definitions::{
    InstructionsTool, MicrofrontendRulesTool, MicroserviceRulesTool, PromptsTool, ToolDefinition,
};
use super::error::ToolError;
use super::operation::Operation;
use crate::domains::catalog::Catalog;

/// Tool registry bound to a catalog.
#[derive(Clone)]
pub struct ToolRegistry {
    catalog: Arc<Catalog>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        Operation::ALL.iter().map(Operation::name).collect()
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// The list is fixed and does not depend on catalog contents.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            MicroserviceRulesTool::to_tool(),
            MicrofrontendRulesTool::to_tool(),
            PromptsTool::to_tool(),
            InstructionsTool::to_tool(),
        ]
    }

    /// Dispatch a tool call by name.
    pub fn call_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        let operation = Operation::from_name(name).inspect_err(|_| {
            warn!("Unknown tool requested: {}", name);
        })?;
        info!("Calling tool: {}", operation);
        operation.invoke(arguments, &self.catalog)
    }
}
