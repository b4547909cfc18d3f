//! Domains module containing business logic organized by bounded contexts.
//!
//! - **catalog**: the knowledge collections and the query engine
//! - **tools**: parameterized catalog queries exposed as MCP tools
//! - **resources**: whole-scope catalog reads exposed as MCP resources

pub mod catalog;
pub mod resources;
pub mod tools;
