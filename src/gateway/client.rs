// nct: RPC Gateway
//
// The single seam through which the workflow talks to namecoind. Callers
// issue named calls with positional parameters and get back either the
// decoded result or a classified `RpcError`. No retries happen here; retry
// policy belongs to the workflow.

use std::sync::atomic::{AtomicU64, Ordering};

use reqwest::StatusCode;
use serde_json::Value;

use crate::config::RpcConfig;

use super::RpcError;
use super::protocol::{JsonRpcRequest, JsonRpcResponse};

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over the daemon connection, enabling a scripted mock
/// in tests.
#[allow(async_fn_in_trait)]
pub trait Gateway {
    /// Invoke `method` with positional `params`.
    async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value, RpcError>;
}

// ─── HTTP Implementation ─────────────────────────────────────────────────────

/// JSON-RPC 1.0 over HTTP(S) with basic auth, as served by namecoind.
/// No request timeout is configured: calls block until the daemon answers.
pub struct HttpGateway {
    client: reqwest::Client,
    url: String,
    user: String,
    password: String,
    next_id: AtomicU64,
}

impl HttpGateway {
    pub fn new(config: &RpcConfig) -> Result<Self, RpcError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            url: config.url(),
            user: config.user.clone(),
            password: config.password.clone(),
            next_id: AtomicU64::new(1),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Gateway for HttpGateway {
    async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value, RpcError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        // Parameter values are deliberately not logged: walletpassphrase carries the secret.
        tracing::debug!(method, id, params = params.len(), "RPC call");

        let request = JsonRpcRequest::new(id, method, &params);
        let response = self
            .client
            .post(&self.url)
            .basic_auth(&self.user, Some(&self.password))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    RpcError::ConnectionRefused
                } else {
                    RpcError::Transport(e)
                }
            })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(RpcError::Unauthorized);
        }

        // namecoind sends daemon errors with a 500 status and a JSON body,
        // so the body is decoded regardless of status.
        let body = response.bytes().await?;
        let parsed: JsonRpcResponse = serde_json::from_slice(&body)
            .map_err(|e| RpcError::Malformed(format!("HTTP {}: {}", status, e)))?;

        let result = parsed.into_result();
        if let Err(ref e) = result {
            tracing::debug!(method, id, error = %e, "RPC call failed");
        }
        result
    }
}

// ─── Scripted Mock for Testing ───────────────────────────────────────────────


// ─── Tests ───────────────────────────────────────────────────────────────────
