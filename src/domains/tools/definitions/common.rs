//! Shared helpers for tool implementations.

use alloy::primitives::utils::{parse_ether, parse_units};
use alloy::primitives::{Address, TxHash, U256};
use rmcp::model::JsonObject;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domains::tools::error::ToolError;

/// Deserialize the raw request arguments into a tool's params struct.
pub(crate) fn parse_params<P: DeserializeOwned>(arguments: JsonObject) -> Result<P, ToolError> {
    serde_json::from_value(Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Parse a 0x-prefixed hex address.
pub(crate) fn parse_address(s: &str) -> Result<Address, ToolError> {
    s.parse()
        .map_err(|_| ToolError::invalid_arguments(format!("invalid address '{s}'")))
}

/// Parse a 0x-prefixed 32-byte transaction hash.
pub(crate) fn parse_tx_hash(s: &str) -> Result<TxHash, ToolError> {
    s.parse()
        .map_err(|_| ToolError::invalid_arguments(format!("invalid transaction hash '{s}'")))
}

/// Parse a decimal RBTC amount ("0.5") into wei.
pub(crate) fn parse_rbtc_amount(s: &str) -> Result<U256, ToolError> {
    if s.trim_start().starts_with('-') {
        return Err(ToolError::invalid_arguments(format!(
            "amount '{s}' must not be negative"
        )));
    }
    parse_ether(s).map_err(|e| ToolError::invalid_arguments(format!("invalid RBTC amount '{s}': {e}")))
}

/// Parse a decimal token amount into the token's smallest unit.
pub(crate) fn parse_token_amount(s: &str, decimals: u8) -> Result<U256, ToolError> {
    if s.trim_start().starts_with('-') {
        return Err(ToolError::invalid_arguments(format!(
            "amount '{s}' must not be negative"
        )));
    }
    parse_units(s, decimals)
        .map(|parsed| parsed.get_absolute())
        .map_err(|e| ToolError::invalid_arguments(format!("invalid token amount '{s}': {e}")))
}
