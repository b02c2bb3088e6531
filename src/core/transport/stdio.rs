//! STDIO transport implementation.
//!
//! Standard input/output transport for MCP - the orchestrating client
//! spawns this process and drives it over its pipes.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::server::RskMcpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the server over stdin/stdout until the client disconnects.
    pub async fn run(server: RskMcpServer) -> TransportResult<()> {
        info!("Connecting server to stdio transport");

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        info!("Rootstock MCP Server running on stdio");

        service
            .waiting()
            .await
            .map_err(|e| TransportError::service(e.to_string()))?;

        info!("STDIO transport finished");
        Ok(())
    }
}
