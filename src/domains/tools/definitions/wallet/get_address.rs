//! Signing-account address tool.

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

/// Parameters for the address tool. Takes no arguments.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetAddressParams {}

/// Reports the address the server signs transactions with.
pub struct GetAddressTool;

impl GetAddressTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "getAddress";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get the address of the wallet this server signs transactions with, along with the Rootstock network it is connected to.";

    pub async fn execute(
        client: &ChainClient,
        _params: GetAddressParams,
    ) -> Result<Value, ToolError> {
        Ok(json!({
            "address": client.address().to_string(),
            "network": client.config().network_name(),
            "chainId": client.chain_id(),
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetAddressParams>(),
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
                let params = parse_params::<GetAddressParams>(arguments)?;
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
    async fn test_reports_derived_address() {
        let client = offline_client();
        let result = GetAddressTool::execute(&client, GetAddressParams {})
            .await
            .unwrap();
        assert_eq!(
            result["address"].as_str().unwrap().to_lowercase(),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
        assert_eq!(result["network"], "rootstock-testnet");
        assert_eq!(result["chainId"], 31);
    }
}
