// nct: Name operations
//
// Typed wrappers over the raw gateway calls the tool uses. `show` maps the
// daemon's "unknown name" code to `NctError::NameNotFound`; `update` and
// `wallet_passphrase` return the raw `RpcError` so the workflow can tell a
// locked wallet from other failures.

use serde_json::{Value, json};
use zeroize::Zeroizing;

use crate::error::{NctError, Result};
use crate::gateway::{FailureKind, Gateway, RpcError};

use super::models::NameRecord;

pub const NAME_SHOW: &str = "name_show";
pub const NAME_LIST: &str = "name_list";
pub const NAME_UPDATE: &str = "name_update";
pub const WALLET_PASSPHRASE: &str = "walletpassphrase";

pub struct NameClient<'a, G: Gateway> {
    gateway: &'a G,
}

impl<'a, G: Gateway> NameClient<'a, G> {
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    /// Raw `name_show` result, for display.
    pub async fn show_raw(&self, name: &str) -> Result<Value> {
        match self.gateway.call(NAME_SHOW, vec![json!(name)]).await {
            Ok(value) => Ok(value),
            Err(e) if e.kind() == FailureKind::NotFound => {
                Err(NctError::NameNotFound(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn show(&self, name: &str) -> Result<NameRecord> {
        let value = self.show_raw(name).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Names held by the wallet.
    pub async fn list(&self) -> Result<Vec<NameRecord>> {
        let value = self.gateway.call(NAME_LIST, vec![]).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Submit a new value; returns the transaction id.
    pub async fn update(&self, name: &str, value: &str) -> std::result::Result<String, RpcError> {
        let result = self
            .gateway
            .call(NAME_UPDATE, vec![json!(name), json!(value)])
            .await?;
        match result {
            Value::String(txid) => Ok(txid),
            other => Err(RpcError::Malformed(format!(
                "expected a transaction id from {}, got {}",
                NAME_UPDATE, other
            ))),
        }
    }

    /// Unlock the wallet for `timeout_secs` seconds.
    pub async fn wallet_passphrase(
        &self,
        passphrase: &Zeroizing<String>,
        timeout_secs: u64,
    ) -> std::result::Result<(), RpcError> {
        self.gateway
            .call(
                WALLET_PASSPHRASE,
                vec![json!(passphrase.as_str()), json!(timeout_secs)],
            )
            .await
            .map(|_| ())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
