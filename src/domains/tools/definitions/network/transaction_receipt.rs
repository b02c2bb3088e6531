//! Transaction receipt lookup tool.

use futures::FutureExt;
use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::chain::ChainClient;
use crate::domains::tools::definitions::common::{parse_params, parse_tx_hash};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::registry::ToolDefinition;

/// Parameters for the transaction receipt tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetTransactionReceiptParams {
    /// Transaction hash to look up.
    #[schemars(description = "Transaction hash, as a 0x-prefixed 32-byte hex string")]
    pub hash: String,
}

/// Looks up the receipt for a transaction hash.
pub struct GetTransactionReceiptTool;

impl GetTransactionReceiptTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "getTransactionReceipt";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get the receipt for a transaction hash on the Rootstock network: execution status, block number and gas used. Reports the transaction as pending if it has not been mined yet.";

    pub async fn execute(
        client: &ChainClient,
        params: GetTransactionReceiptParams,
    ) -> Result<Value, ToolError> {
        let hash = parse_tx_hash(&params.hash)?;

        let receipt = match client.transaction_receipt(hash).await? {
            Some(receipt) => receipt,
            None => {
                return Ok(json!({
                    "hash": params.hash,
                    "status": "pending",
                }));
            }
        };

        Ok(json!({
            "hash": params.hash,
            "status": if receipt.status() { "success" } else { "reverted" },
            "blockNumber": receipt.block_number,
            "gasUsed": receipt.gas_used.to_string(),
            "from": receipt.from.to_string(),
            "to": receipt.to.map(|a| a.to_string()),
            "contractAddress": receipt.contract_address.map(|a| a.to_string()),
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetTransactionReceiptParams>(),
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
                let params = parse_params::<GetTransactionReceiptParams>(arguments)?;
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
    async fn test_rejects_malformed_hash() {
        let client = offline_client();
        let params = GetTransactionReceiptParams {
            hash: "0x1234".to_string(),
        };
        let result = GetTransactionReceiptTool::execute(&client, params).await;
        match result {
            Err(ToolError::InvalidArguments(msg)) => assert!(msg.contains("0x1234")),
            other => panic!("expected InvalidArguments, got {other:?}"),
        }
    }
}
