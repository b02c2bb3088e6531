//! Latest block number tool.

use futures::FutureExt;
use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::chain::ChainClient;
use crate::domains::tools::definitions::common::parse_params;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::registry::ToolDefinition;

/// Parameters for the block number tool. Takes no arguments.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetBlockNumberParams {}

/// Queries the latest block number.
pub struct GetBlockNumberTool;

impl GetBlockNumberTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "getBlockNumber";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get the number of the most recent block on the Rootstock network.";

    pub async fn execute(
        client: &ChainClient,
        _params: GetBlockNumberParams,
    ) -> Result<Value, ToolError> {
        let block_number = client.block_number().await?;
        Ok(json!({ "blockNumber": block_number }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetBlockNumberParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Registry entry pairing the descriptor with its handler.
    pub fn definition() -> ToolDefinition {
        ToolDefinition::new(Self::to_tool(), |client, arguments| {
            async move {
                let params = parse_params::<GetBlockNumberParams>(arguments)?;
                Self::execute(&client, params).await
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ChainConfig;
    use crate::domains::tools::definitions::common::test_support::TEST_SEED_PHRASE;

    #[test]
    fn test_params_accept_empty_object() {
        let params: Result<GetBlockNumberParams, _> = serde_json::from_str("{}");
        assert!(params.is_ok());
    }

    // Integration test (requires network, run with: cargo test -- --ignored)
    #[ignore]
    #[tokio::test]
    async fn test_block_number_against_testnet() {
        let client =
            ChainClient::from_seed_phrase(TEST_SEED_PHRASE, ChainConfig::testnet()).unwrap();
        let result = GetBlockNumberTool::execute(&client, GetBlockNumberParams {})
            .await
            .unwrap();
        assert!(result["blockNumber"].as_u64().unwrap() > 0);
    }
}
