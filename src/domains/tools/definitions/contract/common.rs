//! Human-readable ABI helpers shared by the contract tools.

use alloy::dyn_abi::{DynSolValue, FunctionExt, JsonAbiExt, Specifier};
use alloy::json_abi::Function;
use alloy::primitives::hex;
use serde_json::Value;

use crate::domains::tools::error::ToolError;

/// Parse a human-readable function signature such as
/// `balanceOf(address)(uint256)`. Output types are required to decode
/// return data.
pub(super) fn parse_function(signature: &str) -> Result<Function, ToolError> {
    Function::parse(signature).map_err(|e| {
        ToolError::invalid_arguments(format!("invalid function signature '{signature}': {e}"))
    })
}

/// Coerce JSON arguments against the function's inputs and ABI-encode the
/// call data, selector included.
pub(super) fn encode_call(function: &Function, args: &[Value]) -> Result<Vec<u8>, ToolError> {
    if args.len() != function.inputs.len() {
        return Err(ToolError::invalid_arguments(format!(
            "function '{}' takes {} argument(s), got {}",
            function.name,
            function.inputs.len(),
            args.len()
        )));
    }

    let mut values = Vec::with_capacity(args.len());
    for (param, arg) in function.inputs.iter().zip(args) {
        let ty = param.resolve().map_err(|e| {
            ToolError::invalid_arguments(format!("unsupported parameter type '{}': {e}", param.ty))
        })?;
        let raw = match arg {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        let value = ty.coerce_str(&raw).map_err(|e| {
            ToolError::invalid_arguments(format!(
                "argument '{raw}' does not match type '{}': {e}",
                param.ty
            ))
        })?;
        values.push(value);
    }

    function
        .abi_encode_input(&values)
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Decode return data against the function's outputs and render it as
/// JSON. Falls back to raw hex when the signature declares no outputs.
pub(super) fn decode_output(function: &Function, data: &[u8]) -> Result<Value, ToolError> {
    if function.outputs.is_empty() {
        return Ok(Value::String(hex::encode_prefixed(data)));
    }

    let decoded = function
        .abi_decode_output(data)
        .map_err(|e| ToolError::execution_failed(format!("failed to decode return data: {e}")))?;

    let mut rendered: Vec<Value> = decoded.into_iter().map(render_value).collect();
    Ok(if rendered.len() == 1 {
        rendered.remove(0)
    } else {
        Value::Array(rendered)
    })
}

/// Render a decoded Solidity value as JSON. Numbers become decimal
/// strings so values above 2^53 survive the trip through JSON.
fn render_value(value: DynSolValue) -> Value {
    match value {
        DynSolValue::Bool(b) => Value::Bool(b),
        DynSolValue::Int(i, _) => Value::String(i.to_string()),
        DynSolValue::Uint(u, _) => Value::String(u.to_string()),
        DynSolValue::Address(a) => Value::String(a.to_string()),
        DynSolValue::String(s) => Value::String(s),
        DynSolValue::Bytes(b) => Value::String(hex::encode_prefixed(b)),
        DynSolValue::FixedBytes(word, size) => Value::String(hex::encode_prefixed(&word[..size])),
        DynSolValue::Function(f) => Value::String(hex::encode_prefixed(f.0)),
        DynSolValue::Array(items) | DynSolValue::FixedArray(items) | DynSolValue::Tuple(items) => {
            Value::Array(items.into_iter().map(render_value).collect())
        }
        other => Value::String(format!("{other:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{Address, U256};
    use serde_json::json;

    #[test]
    fn test_parse_function_selector() {
        let function = parse_function("transfer(address,uint256)").unwrap();
        assert_eq!(function.selector().to_string(), "0xa9059cbb");

        let function = parse_function("balanceOf(address)(uint256)").unwrap();
        assert_eq!(function.selector().to_string(), "0x70a08231");
    }

    #[test]
    fn test_parse_function_rejects_garbage() {
        assert!(parse_function("not a signature at all!").is_err());
    }

    #[test]
    fn test_encode_call() {
        let function = parse_function("balanceOf(address)(uint256)").unwrap();
        let args = vec![json!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266")];
        let data = encode_call(&function, &args).unwrap();
        // 4-byte selector + one 32-byte word
        assert_eq!(data.len(), 36);
        assert_eq!(&data[..4], &[0x70, 0xa0, 0x82, 0x31]);
    }

    #[test]
    fn test_encode_call_wrong_arity() {
        let function = parse_function("balanceOf(address)(uint256)").unwrap();
        let result = encode_call(&function, &[]);
        match result {
            Err(ToolError::InvalidArguments(msg)) => assert!(msg.contains("1 argument")),
            other => panic!("expected InvalidArguments, got {other:?}"),
        }
    }

    #[test]
    fn test_encode_call_rejects_mismatched_argument() {
        let function = parse_function("balanceOf(address)(uint256)").unwrap();
        let result = encode_call(&function, &[json!("not-an-address")]);
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[test]
    fn test_encode_call_accepts_json_numbers() {
        let function = parse_function("setValue(uint256)").unwrap();
        let data = encode_call(&function, &[json!(42)]).unwrap();
        assert_eq!(data.len(), 36);
        assert_eq!(data[35], 42);
    }

    #[test]
    fn test_decode_single_output() {
        let function = parse_function("balanceOf(address)(uint256)").unwrap();
        let data = DynSolValue::Uint(U256::from(7), 256).abi_encode();
        let result = decode_output(&function, &data).unwrap();
        assert_eq!(result, json!("7"));
    }

    #[test]
    fn test_decode_without_outputs_returns_hex() {
        let function = parse_function("doSomething(uint256)").unwrap();
        let result = decode_output(&function, &[0xab, 0xcd]).unwrap();
        assert_eq!(result, json!("0xabcd"));
    }

    #[test]
    fn test_render_values() {
        assert_eq!(render_value(DynSolValue::Bool(true)), json!(true));
        assert_eq!(
            render_value(DynSolValue::Uint(U256::from(1000), 256)),
            json!("1000")
        );
        assert_eq!(
            render_value(DynSolValue::String("hello".to_string())),
            json!("hello")
        );
        assert_eq!(
            render_value(DynSolValue::Address(Address::ZERO)),
            json!("0x0000000000000000000000000000000000000000")
        );
        assert_eq!(
            render_value(DynSolValue::Tuple(vec![
                DynSolValue::Bool(false),
                DynSolValue::Uint(U256::from(2), 8),
            ])),
            json!([false, "2"])
        );
    }
}
