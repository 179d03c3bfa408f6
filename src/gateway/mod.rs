// nct: Gateway Module
//
// JSON-RPC client for namecoind. Every remote call the tool makes goes
// through the `Gateway` trait.

mod client;
mod error;
pub mod protocol;

pub use client::{Gateway, HttpGateway};
pub use error::{FailureKind, RpcError};

#[cfg(test)]
pub use client::mock;
