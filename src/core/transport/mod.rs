//! Transport layer for the MCP server.
//!
//! - **STDIO**: standard input/output (default for MCP) - feature: `stdio`
//! - **TCP**: line-delimited JSON-RPC over TCP - feature: `tcp`
//! - **HTTP**: JSON-RPC over HTTP POST - feature: `http`
//!
//! Each transport handles the connection lifecycle and delegates message
//! processing to the MCP server handler.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;

#[cfg(feature = "http")]
pub use config::HttpConfig;
