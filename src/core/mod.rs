//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP
//! server: configuration, error handling, the server handler itself and
//! the transport layer.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use server::RskMcpServer;
pub use transport::StdioTransport;
