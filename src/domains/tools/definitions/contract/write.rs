//! State-changing contract call tool.

use alloy::primitives::U256;
use futures::FutureExt;
use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use super::common::{encode_call, parse_function};
use crate::chain::ChainClient;
use crate::domains::tools::definitions::common::{parse_address, parse_params, parse_rbtc_amount};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::registry::ToolDefinition;

/// Parameters for the contract write tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WriteContractParams {
    /// Contract address.
    #[schemars(description = "Contract address")]
    pub address: String,

    /// Human-readable function signature, e.g. "transfer(address,uint256)".
    #[schemars(description = "Function signature, e.g. \"transfer(address,uint256)\"")]
    pub function_signature: String,

    /// Positional arguments matching the signature's input types.
    #[serde(default)]
    #[schemars(description = "Positional arguments matching the signature's input types")]
    pub args: Vec<Value>,

    /// Optional RBTC value to send with the call, as a decimal string.
    #[schemars(
        description = "Optional RBTC value to send with the call, as a decimal string (e.g. \"0.1\")"
    )]
    pub value: Option<String>,
}

/// Submits a signed state-changing call to a contract.
pub struct WriteContractTool;

impl WriteContractTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "writeContract";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Call a state-changing function on a contract deployed on the Rootstock network. The call is signed with the server's wallet and broadcast immediately; returns the transaction hash without waiting for confirmation.";

    pub async fn execute(
        client: &ChainClient,
        params: WriteContractParams,
    ) -> Result<Value, ToolError> {
        let address = parse_address(&params.address)?;
        let function = parse_function(&params.function_signature)?;
        let data = encode_call(&function, &params.args)?;
        let value = match &params.value {
            Some(value) => parse_rbtc_amount(value)?,
            None => U256::ZERO,
        };

        info!("Executing {} on {}", function.name, params.address);
        let hash = client.execute(address, data.into(), value).await?;

        Ok(json!({
            "transactionHash": hash.to_string(),
            "address": params.address,
            "function": function.name,
            "from": client.address().to_string(),
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<WriteContractParams>(),
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
                let params = parse_params::<WriteContractParams>(arguments)?;
                Self::execute(&client, params).await
            }
            .boxed()
        })
    }
}
