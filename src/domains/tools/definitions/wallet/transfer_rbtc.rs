//! RBTC transfer tool.

use futures::FutureExt;
use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use crate::chain::ChainClient;
use crate::domains::tools::definitions::common::{parse_address, parse_params, parse_rbtc_amount};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::registry::ToolDefinition;

/// Parameters for the RBTC transfer tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TransferRbtcParams {
    /// Recipient address.
    #[schemars(description = "Recipient address, as a 0x-prefixed hex string")]
    pub to: String,

    /// Amount in RBTC as a decimal string, e.g. "0.5".
    #[schemars(description = "Amount to send in RBTC, as a decimal string (e.g. \"0.5\")")]
    pub amount: String,
}

/// Sends RBTC from the server's wallet.
pub struct TransferRbtcTool;

impl TransferRbtcTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "transferRbtc";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Transfer RBTC from the server's wallet to another address. The transaction is signed with the server's account and broadcast immediately; returns the transaction hash without waiting for confirmation.";

    pub async fn execute(
        client: &ChainClient,
        params: TransferRbtcParams,
    ) -> Result<Value, ToolError> {
        let to = parse_address(&params.to)?;
        let value = parse_rbtc_amount(&params.amount)?;

        info!("Transferring {} RBTC to {}", params.amount, params.to);
        let hash = client.transfer(to, value).await?;

        Ok(json!({
            "transactionHash": hash.to_string(),
            "from": client.address().to_string(),
            "to": params.to,
            "amount": params.amount,
            "unit": "RBTC",
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<TransferRbtcParams>(),
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
                let params = parse_params::<TransferRbtcParams>(arguments)?;
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
    async fn test_rejects_invalid_recipient() {
        let client = offline_client();
        let params = TransferRbtcParams {
            to: "nowhere".to_string(),
            amount: "1".to_string(),
        };
        let result = TransferRbtcTool::execute(&client, params).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[tokio::test]
    async fn test_rejects_invalid_amount() {
        let client = offline_client();
        let params = TransferRbtcParams {
            to: "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".to_string(),
            amount: "lots".to_string(),
        };
        let result = TransferRbtcTool::execute(&client, params).await;
        match result {
            Err(ToolError::InvalidArguments(msg)) => assert!(msg.contains("lots")),
            other => panic!("expected InvalidArguments, got {other:?}"),
        }
    }
}
