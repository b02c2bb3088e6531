//! Gas price tool.

use alloy::primitives::U256;
use alloy::primitives::utils::format_units;
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

/// Parameters for the gas price tool. Takes no arguments.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetGasPriceParams {}

/// Queries the current gas price.
pub struct GetGasPriceTool;

impl GetGasPriceTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "getGasPrice";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get the current gas price on the Rootstock network, in wei and gwei.";

    pub async fn execute(
        client: &ChainClient,
        _params: GetGasPriceParams,
    ) -> Result<Value, ToolError> {
        let wei = client.gas_price().await?;
        let gwei = format_units(U256::from(wei), 9)
            .map_err(|e| ToolError::execution_failed(e.to_string()))?;

        Ok(json!({
            "wei": wei.to_string(),
            "gwei": gwei,
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetGasPriceParams>(),
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
                let params = parse_params::<GetGasPriceParams>(arguments)?;
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

    // Integration test (requires network, run with: cargo test -- --ignored)
    #[ignore]
    #[tokio::test]
    async fn test_gas_price_against_testnet() {
        let client =
            ChainClient::from_seed_phrase(TEST_SEED_PHRASE, ChainConfig::testnet()).unwrap();
        let result = GetGasPriceTool::execute(&client, GetGasPriceParams {})
            .await
            .unwrap();
        assert!(result["wei"].is_string());
        assert!(result["gwei"].is_string());
    }
}
