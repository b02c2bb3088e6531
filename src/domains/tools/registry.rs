//! Tool Registry - the canonical tool list and dispatch.
//!
//! Every tool contributes one [`ToolDefinition`], a record pairing the
//! advertised descriptor with its handler. Both the `tools/list` view and
//! the `tools/call` lookup are derived from the same list, so the server
//! can never advertise a tool it cannot dispatch or dispatch one it does
//! not advertise.

use std::sync::Arc;

use futures::future::BoxFuture;
use rmcp::model::{JsonObject, Tool};
use serde_json::Value;
use tracing::debug;

use super::definitions::{
    GetAddressTool, GetBalanceTool, GetBlockNumberTool, GetGasPriceTool, GetTokenBalanceTool,
    GetTransactionReceiptTool, ReadContractTool, TransferRbtcTool, TransferTokenTool,
    WriteContractTool,
};
use super::error::ToolError;
use crate::chain::ChainClient;

/// Handler function shape shared by every tool: the shared chain client
/// plus the request arguments, resolving to a JSON result.
pub type HandlerFn =
    fn(Arc<ChainClient>, JsonObject) -> BoxFuture<'static, Result<Value, ToolError>>;

/// One registry entry: a tool descriptor and the handler that serves it.
pub struct ToolDefinition {
    tool: Tool,
    handler: HandlerFn,
}

impl ToolDefinition {
    /// Pair a descriptor with its handler.
    pub fn new(tool: Tool, handler: HandlerFn) -> Self {
        Self { tool, handler }
    }

    /// The tool's stable wire name.
    pub fn name(&self) -> &str {
        self.tool.name.as_ref()
    }

    /// The advertised descriptor.
    pub fn tool(&self) -> &Tool {
        &self.tool
    }
}

/// Tool registry - owns the shared chain client and the canonical tool
/// list, and dispatches calls by name.
pub struct ToolRegistry {
    client: Arc<ChainClient>,
    definitions: Vec<ToolDefinition>,
}

impl ToolRegistry {
    /// Create the registry with the full tool set.
    pub fn new(client: Arc<ChainClient>) -> Self {
        Self {
            client,
            definitions: build_definitions(),
        }
    }

    /// All advertised tool descriptors, in registration order.
    pub fn tools(&self) -> Vec<Tool> {
        self.definitions.iter().map(|d| d.tool.clone()).collect()
    }

    /// All tool names, in registration order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.definitions.iter().map(|d| d.name()).collect()
    }

    /// Whether a tool with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.definitions.iter().any(|d| d.name() == name)
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Look up a tool by name and invoke its handler with the shared
    /// chain client and the supplied arguments.
    pub async fn dispatch(&self, name: &str, arguments: JsonObject) -> Result<Value, ToolError> {
        let definition = self
            .definitions
            .iter()
            .find(|d| d.name() == name)
            .ok_or_else(|| ToolError::not_found(name))?;

        debug!(tool = name, "Dispatching tool call");
        (definition.handler)(Arc::clone(&self.client), arguments).await
    }
}

/// The canonical tool list. Registration order is the order clients see.
fn build_definitions() -> Vec<ToolDefinition> {
    vec![
        GetAddressTool::definition(),
        GetBalanceTool::definition(),
        GetBlockNumberTool::definition(),
        GetGasPriceTool::definition(),
        GetTransactionReceiptTool::definition(),
        TransferRbtcTool::definition(),
        GetTokenBalanceTool::definition(),
        TransferTokenTool::definition(),
        ReadContractTool::definition(),
        WriteContractTool::definition(),
    ]
}
