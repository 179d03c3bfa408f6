// nct: Configuration Module
//
// Reads namecoind's own INI configuration (`~/.namecoin/namecoin.conf`)
// so the tool connects with the same credentials as the daemon.

mod error;
mod rpc;

pub use error::ConfigError;
pub use rpc::{DEFAULT_RPC_HOST, DEFAULT_RPC_PORT, RpcConfig};
