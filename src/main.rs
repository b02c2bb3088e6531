//! MCP Server Entry Point
//!
//! This is the main entry point for the Rootstock MCP server. It loads
//! configuration, derives the signing account, and serves the tool set
//! over stdio.

use std::sync::Arc;

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use rootstock_mcp_server::chain::ChainClient;
use rootstock_mcp_server::core::{Config, RskMcpServer, StdioTransport};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            // Logging is not up yet; the diagnostic goes straight to stderr.
            eprintln!("{e}");
            eprintln!("Set the SEED_PHRASE environment variable in your environment or .env file");
            std::process::exit(1);
        }
    };

    // Initialize logging
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    // Derive the signing account and connect the provider
    let client = ChainClient::from_seed_phrase(&config.credentials.seed_phrase, config.chain.clone())?;

    // Create the MCP server around the shared client
    let server = RskMcpServer::new(config, Arc::new(client));

    info!("Server initialized");

    // Serve until the orchestrating client disconnects
    StdioTransport::run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr: stdout carries the MCP protocol.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
