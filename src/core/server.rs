//! MCP server implementation and request dispatch.
//!
//! [`RskMcpServer`] implements the MCP protocol surface: advertising the
//! tool catalog and routing `tools/call` requests to the registry. Every
//! failure is converted into a protocol error naming the tool that caused
//! it; a bad request never takes the server down.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use tracing::{error, info, instrument};

use super::config::Config;
use crate::chain::ChainClient;
use crate::domains::tools::{ToolError, ToolRegistry};

/// The main MCP server handler.
#[derive(Clone)]
pub struct RskMcpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// The canonical tool registry, sharing one chain client.
    registry: Arc<ToolRegistry>,
}

impl RskMcpServer {
    /// Create a new server around the shared chain client.
    pub fn new(config: Config, client: Arc<ChainClient>) -> Self {
        Self {
            config: Arc::new(config),
            registry: Arc::new(ToolRegistry::new(client)),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the tool registry.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }
}

impl ServerHandler for RskMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(format!(
                "{} exposes read and write tools for the Rootstock network ({}). \
                 Transactions are signed with the server's own wallet.",
                self.config.server.name,
                self.config.chain.network_name()
            )),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    #[instrument(skip_all)]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        info!("Received list tools request");
        Ok(ListToolsResult {
            tools: self.registry.tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip_all, fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        info!("Received call tool request: {}", request.name);
        let arguments = request.arguments.unwrap_or_default();

        match self.registry.dispatch(&request.name, arguments).await {
            Ok(result) => {
                let text = serde_json::to_string(&result).map_err(|e| {
                    McpError::internal_error(format!("Tool {} failed: {e}", request.name), None)
                })?;
                Ok(CallToolResult::success(vec![Content::text(text)]))
            }
            Err(ToolError::NotFound(name)) => {
                error!("Unknown tool requested: {name}");
                Err(McpError::invalid_params(
                    format!("Tool {name} not found"),
                    None,
                ))
            }
            Err(e) => {
                error!("Tool {} failed: {e}", request.name);
                Err(McpError::internal_error(
                    format!("Tool {} failed: {e}", request.name),
                    None,
                ))
            }
        }
    }
}
