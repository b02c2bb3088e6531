//! Rootstock MCP Server Library
//!
//! This crate implements a Model Context Protocol (MCP) server exposing a
//! fixed set of Rootstock blockchain tools over stdio. One signing account
//! is derived from a seed phrase at startup and shared by every tool.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and
//!   the stdio transport
//! - **chain**: the shared Rootstock chain client (provider, signer,
//!   ERC-20 bindings)
//! - **domains::tools**: the tool registry and the individual tool
//!   implementations
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use rootstock_mcp_server::chain::ChainClient;
//! use rootstock_mcp_server::core::{Config, RskMcpServer, StdioTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = ChainClient::from_seed_phrase(
//!         &config.credentials.seed_phrase,
//!         config.chain.clone(),
//!     )?;
//!     let server = RskMcpServer::new(config, Arc::new(client));
//!     StdioTransport::run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod chain;
pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use chain::ChainClient;
pub use core::{Config, Error, Result, RskMcpServer};
