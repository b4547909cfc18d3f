//! Tool Router - builds the rmcp ToolRouter for STDIO/TCP transport.
//!
//! Each tool knows how to create its own route.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{
    InstructionsTool, MicrofrontendRulesTool, MicroserviceRulesTool, PromptsTool, ToolDefinition,
};
use crate::domains::catalog::Catalog;

/// Build the tool router with all catalog tools.
pub fn build_tool_router<S>(catalog: Arc<Catalog>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(MicroserviceRulesTool::create_route(catalog.clone()))
        .with_route(MicrofrontendRulesTool::create_route(catalog.clone()))
        .with_route(PromptsTool::create_route(catalog.clone()))
        .with_route(InstructionsTool::create_route(catalog))
}
