//! Enterprise knowledge MCP server library.
//!
//! This crate serves a read-only catalog of enterprise engineering knowledge
//! (microservice and microfrontend rules, development prompts and task
//! instructions) over the Model Context Protocol.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the protocol handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **catalog**: loading, storing and querying the knowledge records
//!   - **tools**: the four filtering query tools
//!   - **resources**: the four unfiltered collection resources
//!
//! # Example
//!
//! ```rust,no_run
//! use enterprise_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::load(config.clone()).await;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
pub use domains::catalog::Catalog;
