//! MCP Server Entry Point
//!
//! Loads configuration, initializes logging, loads the knowledge catalog and
//! then starts the configured transport. Requests are only accepted once the
//! catalog is in memory.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use enterprise_mcp_server::core::{Config, McpServer, TransportService, config::LoggingConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    init_logging(&config.logging);

    info!("Starting {} v{}", config.server.name, config.server.version);

    let server = McpServer::load(config.clone()).await;

    info!("Server initialized");

    let transport = TransportService::new(config.transport);
    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr: stdout carries the protocol stream in stdio mode.
/// `RUST_LOG` directives take precedence over the configured level.
fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.to_lowercase()));

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    if logging.with_timestamps {
        builder.init();
    } else {
        builder.without_time().init();
    }
}
