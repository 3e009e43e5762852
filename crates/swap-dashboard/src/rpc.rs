//! JSON-RPC client for BSC nodes (runs in the browser via `gloo-net`).
//!
//! Used for balance reads when the injected wallet cannot answer them.

use alloy::primitives::{Address, U256};
use gloo_net::http::Request;
use serde_json::{json, Value};

/// Public BSC endpoint used when no wallet provider is available.
pub const FALLBACK_RPC_URL: &str = "https://bsc-dataseed.binance.org";

/// Make a single JSON-RPC call and return the `result` field.
async fn rpc_call(url: &str, method: &str, params: &[Value]) -> Result<Value, String> {
    let body = json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": method,
        "params": params,
    });

    let resp = Request::post(url)
        .header("Content-Type", "application/json")
        .body(body.to_string())
        .map_err(|e| format!("request build error: {e}"))?
        .send()
        .await
        .map_err(|e| format!("network error: {e}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {} from RPC", resp.status()));
    }

    let json: Value = resp
        .json()
        .await
        .map_err(|e| format!("JSON parse error: {e}"))?;

    if let Some(err) = json.get("error") {
        let msg = err
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or("unknown RPC error");
        return Err(format!("RPC error: {msg}"));
    }

    Ok(json.get("result").cloned().unwrap_or(Value::Null))
}

/// Parse a hex quantity (with optional 0x prefix) into a U256.
pub fn parse_hex_u256(value: &Value) -> Result<U256, String> {
    let hex = value.as_str().ok_or("quantity is not a string")?;
    let digits = hex.strip_prefix("0x").unwrap_or(hex);
    if digits.is_empty() {
        return Ok(U256::ZERO);
    }
    U256::from_str_radix(digits, 16).map_err(|e| format!("parse quantity {hex}: {e}"))
}

/// Native balance of `account` at the latest block, in wei.
pub async fn fetch_balance(url: &str, account: Address) -> Result<U256, String> {
    let result = rpc_call(
        url,
        "eth_getBalance",
        &[json!(account.to_string()), json!("latest")],
    )
    .await?;
    parse_hex_u256(&result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_quantities() {
        assert_eq!(parse_hex_u256(&json!("0x0")).unwrap(), U256::ZERO);
        assert_eq!(parse_hex_u256(&json!("0x")).unwrap(), U256::ZERO);
        assert_eq!(
            parse_hex_u256(&json!("0xde0b6b3a7640000")).unwrap(),
            U256::from(1_000_000_000_000_000_000u128)
        );
    }

    #[test]
    fn rejects_non_string_quantities() {
        assert!(parse_hex_u256(&json!(12)).is_err());
        assert!(parse_hex_u256(&json!("0xzz")).is_err());
    }
}
