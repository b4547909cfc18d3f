//! The fixed table of catalog operations.

use std::fmt;

use rmcp::model::{CallToolResult, JsonObject};

use super::definitions::{
    InstructionsTool, MicrofrontendRulesTool, MicroserviceRulesTool, PromptsTool, ToolDefinition,
};
use super::error::ToolError;
use crate::domains::catalog::Catalog;

/// One of the four operations exposed as MCP tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    MicroserviceRules,
    MicrofrontendRules,
    Prompts,
    Instructions,
}

impl Operation {
    /// Every operation, in listing order.
    pub const ALL: [Operation; 4] = [
        Operation::MicroserviceRules,
        Operation::MicrofrontendRules,
        Operation::Prompts,
        Operation::Instructions,
    ];

    /// Resolve a tool name.
    pub fn from_name(name: &str) -> Result<Self, ToolError> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == name)
            .ok_or_else(|| ToolError::unknown_operation(name))
    }

    /// Tool name as registered in MCP.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MicroserviceRules => MicroserviceRulesTool::NAME,
            Self::MicrofrontendRules => MicrofrontendRulesTool::NAME,
            Self::Prompts => PromptsTool::NAME,
            Self::Instructions => InstructionsTool::NAME,
        }
    }

    /// Execute the operation against `catalog`.
    pub fn invoke(
        &self,
        arguments: Option<JsonObject>,
        catalog: &Catalog,
    ) -> Result<CallToolResult, ToolError> {
        match self {
            Self::MicroserviceRules => MicroserviceRulesTool::invoke(arguments, catalog),
            Self::MicrofrontendRules => MicrofrontendRulesTool::invoke(arguments, catalog),
            Self::Prompts => PromptsTool::invoke(arguments, catalog),
            Self::Instructions => InstructionsTool::invoke(arguments, catalog),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
