// nct: JSON-RPC Protocol Types
//
// namecoind speaks JSON-RPC 1.0 over HTTP with positional parameters.
// Only the request envelope, the response envelope and the daemon error
// codes the workflow reacts to are modelled here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::RpcError;

/// A JSON-RPC 1.0 request as namecoind expects it.
#[derive(Debug, Serialize)]
pub struct JsonRpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: &'a [Value],
}

/// A JSON-RPC response. Exactly one of `result` / `error` is meaningful;
/// a successful call may legitimately carry a `null` result.
#[derive(Debug, Deserialize)]
pub struct JsonRpcResponse {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<JsonRpcError>,
    #[serde(default)]
    pub id: Value,
}

/// A daemon-reported error object.
#[derive(Debug, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
}

// namecoind error codes
/// `name_update` needs the wallet unlocked first.
pub const RPC_WALLET_UNLOCK_NEEDED: i32 = -13;
/// `walletpassphrase` was given the wrong passphrase.
pub const RPC_WALLET_PASSPHRASE_INCORRECT: i32 = -14;
/// Generic wallet error; `name_show` reports unknown names with it.
pub const RPC_WALLET_ERROR: i32 = -4;

impl<'a> JsonRpcRequest<'a> {
    pub fn new(id: u64, method: &'a str, params: &'a [Value]) -> Self {
        Self {
            jsonrpc: "1.0",
            id,
            method,
            params,
        }
    }
}

impl JsonRpcResponse {
    /// Split the envelope into the call's result or the daemon's error.
    pub fn into_result(self) -> Result<Value, RpcError> {
        match self.error {
            Some(err) => Err(RpcError::Daemon {
                code: err.code,
                message: err.message,
            }),
            None => Ok(self.result.unwrap_or(Value::Null)),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
