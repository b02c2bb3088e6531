//! RBTC balance lookup tool.

use alloy::primitives::utils::format_ether;
use futures::FutureExt;
use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use crate::chain::ChainClient;
use crate::domains::tools::definitions::common::{parse_address, parse_params};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::registry::ToolDefinition;

/// Parameters for the balance tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetBalanceParams {
    /// Address to query.
    #[schemars(description = "Address to query, as a 0x-prefixed hex string")]
    pub address: String,
}

/// Queries the RBTC balance of an address.
pub struct GetBalanceTool;

impl GetBalanceTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "getBalance";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get the RBTC balance of an address on the Rootstock network. Returns the balance both in wei and formatted in RBTC.";

    pub async fn execute(
        client: &ChainClient,
        params: GetBalanceParams,
    ) -> Result<Value, ToolError> {
        let address = parse_address(&params.address)?;

        info!("Querying RBTC balance of {}", params.address);
        let wei = client.balance(address).await?;

        Ok(json!({
            "address": params.address,
            "balance": format_ether(wei),
            "unit": "RBTC",
            "wei": wei.to_string(),
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetBalanceParams>(),
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
                let params = parse_params::<GetBalanceParams>(arguments)?;
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
    use crate::domains::tools::definitions::common::test_support::{
        TEST_SEED_PHRASE, offline_client,
    };

    #[test]
    fn test_params_require_address() {
        let result: Result<GetBalanceParams, _> = serde_json::from_str("{}");
        assert!(result.is_err());

        let params: GetBalanceParams =
            serde_json::from_str(r#"{"address": "0xabc"}"#).unwrap();
        assert_eq!(params.address, "0xabc");
    }

    #[tokio::test]
    async fn test_rejects_invalid_address() {
        let client = offline_client();
        let params = GetBalanceParams {
            address: "not-an-address".to_string(),
        };
        let result = GetBalanceTool::execute(&client, params).await;
        match result {
            Err(ToolError::InvalidArguments(msg)) => assert!(msg.contains("not-an-address")),
            other => panic!("expected InvalidArguments, got {other:?}"),
        }
    }

    // Integration test (requires network, run with: cargo test -- --ignored)
    #[ignore]
    #[tokio::test]
    async fn test_balance_against_testnet() {
        let config = ChainConfig::testnet();
        let client = ChainClient::from_seed_phrase(TEST_SEED_PHRASE, config).unwrap();
        let params = GetBalanceParams {
            address: "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".to_string(),
        };
        let result = GetBalanceTool::execute(&client, params).await.unwrap();
        assert_eq!(result["unit"], "RBTC");
        assert!(result["wei"].is_string());
    }
}
