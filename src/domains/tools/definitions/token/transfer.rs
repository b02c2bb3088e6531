//! ERC-20 token transfer tool.

use futures::FutureExt;
use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use crate::chain::ChainClient;
use crate::domains::tools::definitions::common::{parse_address, parse_params, parse_token_amount};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::registry::ToolDefinition;

/// Parameters for the token transfer tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransferTokenParams {
    /// ERC-20 contract address.
    #[schemars(description = "ERC-20 token contract address")]
    pub token_address: String,

    /// Recipient address.
    #[schemars(description = "Recipient address")]
    pub to: String,

    /// Amount in whole tokens as a decimal string, e.g. "1.5".
    #[schemars(
        description = "Amount to send in whole tokens, as a decimal string; scaled by the token's decimals"
    )]
    pub amount: String,
}

/// Transfers ERC-20 tokens from the server's wallet.
pub struct TransferTokenTool;

impl TransferTokenTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "transferToken";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Transfer ERC-20 tokens from the server's wallet to another address. The amount is given in whole tokens and scaled by the token's on-chain decimals. Returns the transaction hash without waiting for confirmation.";

    pub async fn execute(
        client: &ChainClient,
        params: TransferTokenParams,
    ) -> Result<Value, ToolError> {
        let token = parse_address(&params.token_address)?;
        let to = parse_address(&params.to)?;

        // The token decides its own scale; fetch it before parsing.
        let decimals = client.token_decimals(token).await?;
        let amount = parse_token_amount(&params.amount, decimals)?;

        info!(
            "Transferring {} of token {} to {}",
            params.amount, params.token_address, params.to
        );
        let hash = client.token_transfer(token, to, amount).await?;

        Ok(json!({
            "transactionHash": hash.to_string(),
            "tokenAddress": params.token_address,
            "from": client.address().to_string(),
            "to": params.to,
            "amount": params.amount,
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<TransferTokenParams>(),
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
                let params = parse_params::<TransferTokenParams>(arguments)?;
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

    #[tokio::test]
    async fn test_rejects_invalid_addresses() {
        let client = offline_client();
        let params = TransferTokenParams {
            token_address: "bogus".to_string(),
            to: "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".to_string(),
            amount: "1".to_string(),
        };
        let result = TransferTokenTool::execute(&client, params).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }
}
