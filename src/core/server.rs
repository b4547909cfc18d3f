//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the catalog-backed tool and resource services.
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool
//! and routed through an rmcp `ToolRouter` built in `domains/tools/router.rs`.
//! Resources are registered in `domains/resources/registry.rs`.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::tool::{ToolCallContext, ToolRouter},
    model::*,
    service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Error;
use crate::domains::{
    catalog::{Catalog, FileSource},
    resources::{ResourceError, ResourceService},
    tools::{Operation, ToolError, ToolRegistry, build_tool_router},
};

const INSTRUCTIONS: &str = "Enterprise knowledge base. Use the tools to query microservice and \
microfrontend rules (optionally by category), development prompts (by type) and task \
instructions (by task). The same collections are available unfiltered as resources.";

/// The main MCP server handler.
///
/// Holds the immutable catalog shared by every connection.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// The loaded knowledge catalog.
    catalog: Arc<Catalog>,

    /// Direct tool dispatch (HTTP transport, embedding).
    tool_registry: ToolRegistry,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server over an already loaded catalog.
    pub fn new(config: Config, catalog: Catalog) -> Self {
        let config = Arc::new(config);
        let catalog = Arc::new(catalog);

        Self {
            tool_router: build_tool_router::<Self>(catalog.clone()),
            tool_registry: ToolRegistry::new(catalog.clone()),
            resource_service: Arc::new(ResourceService::new(catalog.clone())),
            catalog,
            config,
        }
    }

    /// Load the catalog from the configured directory and create the server.
    ///
    /// Domains that fail to load are served empty.
    pub async fn load(config: Config) -> Self {
        let source = FileSource::new(&config.catalog.base_path);
        info!("Loading catalog from {}", source.base_path().display());
        let catalog = Catalog::load(&source).await;
        Self::new(config, catalog)
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the loaded catalog.
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Server instructions sent to clients on initialize.
    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    // ========================================================================
    // Direct access (HTTP transport, embedding, tests)
    // ========================================================================

    /// List all available tools.
    pub fn list_tools(&self) -> Vec<Tool> {
        ToolRegistry::get_all_tools()
    }

    /// Call a tool by name.
    pub fn call_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        self.tool_registry.call_tool(name, arguments)
    }

    /// List all available resources.
    pub fn list_resources(&self) -> Vec<Resource> {
        self.resource_service.list_resources()
    }

    /// Read a resource by URI.
    pub fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        self.resource_service.read_resource(uri)
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.tool_router.list_all(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let operation = Operation::from_name(&request.name).map_err(Error::from)?;
        info!("Calling tool: {}", operation);
        let tcc = ToolCallContext::new(self, request, context);
        self.tool_router.call(tcc).await
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        Ok(ListResourcesResult {
            resources: self.resource_service.list_resources(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .map_err(|e| Error::from(e).into())
    }
}
