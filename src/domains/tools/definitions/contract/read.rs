//! Read-only contract call tool.

use futures::FutureExt;
use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use super::common::{decode_output, encode_call, parse_function};
use crate::chain::ChainClient;
use crate::domains::tools::definitions::common::{parse_address, parse_params};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::registry::ToolDefinition;

/// Parameters for the contract read tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReadContractParams {
    /// Contract address.
    #[schemars(description = "Contract address")]
    pub address: String,

    /// Human-readable function signature with output types, e.g.
    /// "balanceOf(address)(uint256)".
    #[schemars(
        description = "Function signature including output types, e.g. \"balanceOf(address)(uint256)\""
    )]
    pub function_signature: String,

    /// Positional arguments matching the signature's input types.
    #[serde(default)]
    #[schemars(description = "Positional arguments matching the signature's input types")]
    pub args: Vec<Value>,
}

/// Executes a read-only call (eth_call) against a contract.
pub struct ReadContractTool;

impl ReadContractTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "readContract";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Call a read-only function on a contract deployed on the Rootstock network. The function signature must include the output types so the return data can be decoded, e.g. \"balanceOf(address)(uint256)\". Sends no transaction and costs no gas.";

    pub async fn execute(
        client: &ChainClient,
        params: ReadContractParams,
    ) -> Result<Value, ToolError> {
        let address = parse_address(&params.address)?;
        let function = parse_function(&params.function_signature)?;
        let data = encode_call(&function, &params.args)?;

        info!("Calling {} on {}", function.name, params.address);
        let output = client.call(address, data.into()).await?;
        let result = decode_output(&function, &output)?;

        Ok(json!({
            "address": params.address,
            "function": function.name,
            "result": result,
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ReadContractParams>(),
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
                let params = parse_params::<ReadContractParams>(arguments)?;
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
    use serde_json::json;

    #[test]
    fn test_args_default_to_empty() {
        let params: ReadContractParams = serde_json::from_value(json!({
            "address": "0x1",
            "functionSignature": "totalSupply()(uint256)",
        }))
        .unwrap();
        assert!(params.args.is_empty());
    }

    #[tokio::test]
    async fn test_rejects_bad_signature() {
        let client = offline_client();
        let params = ReadContractParams {
            address: "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".to_string(),
            function_signature: "???".to_string(),
            args: vec![],
        };
        let result = ReadContractTool::execute(&client, params).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }
}
