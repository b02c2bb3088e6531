//! ERC-20 token balance tool.

use alloy::primitives::utils::format_units;
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

/// Parameters for the token balance tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetTokenBalanceParams {
    /// ERC-20 contract address.
    #[schemars(description = "ERC-20 token contract address")]
    pub token_address: String,

    /// Address whose balance to query.
    #[schemars(description = "Address whose token balance to query")]
    pub address: String,
}

/// Queries an ERC-20 token balance.
pub struct GetTokenBalanceTool;

impl GetTokenBalanceTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "getTokenBalance";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get the ERC-20 token balance of an address on the Rootstock network. Returns the raw balance and a value formatted with the token's decimals and symbol.";

    pub async fn execute(
        client: &ChainClient,
        params: GetTokenBalanceParams,
    ) -> Result<Value, ToolError> {
        let token = parse_address(&params.token_address)?;
        let owner = parse_address(&params.address)?;

        info!(
            "Querying token {} balance of {}",
            params.token_address, params.address
        );
        let balance = client.token_balance(token, owner).await?;
        let formatted = format_units(balance.amount, balance.decimals)
            .map_err(|e| ToolError::execution_failed(e.to_string()))?;

        Ok(json!({
            "tokenAddress": params.token_address,
            "address": params.address,
            "balance": formatted,
            "raw": balance.amount.to_string(),
            "decimals": balance.decimals,
            "symbol": balance.symbol,
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetTokenBalanceParams>(),
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
                let params = parse_params::<GetTokenBalanceParams>(arguments)?;
                Self::execute(&client, params).await
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::test_support::offline_client;

    #[test]
    fn test_params_use_camel_case_keys() {
        let params: GetTokenBalanceParams = serde_json::from_str(
            r#"{"tokenAddress": "0x1", "address": "0x2"}"#,
        )
        .unwrap();
        assert_eq!(params.token_address, "0x1");
        assert_eq!(params.address, "0x2");
    }

    #[tokio::test]
    async fn test_rejects_invalid_token_address() {
        let client = offline_client();
        let params = GetTokenBalanceParams {
            token_address: "definitely-not-hex".to_string(),
            address: "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".to_string(),
        };
        let result = GetTokenBalanceTool::execute(&client, params).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }
}
