//! Tools domain module.
//!
//! Tools are the parameterized catalog queries MCP clients can call.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `operation.rs` - The fixed operation table (name -> tool)
//! - `router.rs` - ToolRouter builder for STDIO/TCP transport
//! - `registry.rs` - Tool listing and direct dispatch (HTTP transport)
//! - `error.rs` - Tool-specific error types

pub mod definitions;
mod error;
mod operation;
mod registry;
pub mod router;

pub use definitions::ToolDefinition;
pub use error::ToolError;
pub use operation::Operation;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
