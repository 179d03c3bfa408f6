// nct: Gateway error types

use thiserror::Error;

use super::protocol::{RPC_WALLET_ERROR, RPC_WALLET_PASSPHRASE_INCORRECT, RPC_WALLET_UNLOCK_NEEDED};

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("Unable to connect to namecoind")]
    ConnectionRefused,

    #[error("namecoind error {code}: {message}")]
    Daemon { code: i32, message: String },

    #[error("namecoind rejected the RPC credentials (check rpcuser/rpcpassword)")]
    Unauthorized,

    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed RPC response: {0}")]
    Malformed(String),
}

/// How callers should react to a failed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    ConnectionRefused,
    WalletLocked,
    WrongPassphrase,
    NotFound,
    Other,
}

impl RpcError {
    pub fn kind(&self) -> FailureKind {
        match self {
            RpcError::ConnectionRefused => FailureKind::ConnectionRefused,
            RpcError::Daemon { code, .. } => match *code {
                RPC_WALLET_UNLOCK_NEEDED => FailureKind::WalletLocked,
                RPC_WALLET_PASSPHRASE_INCORRECT => FailureKind::WrongPassphrase,
                RPC_WALLET_ERROR => FailureKind::NotFound,
                _ => FailureKind::Other,
            },
            _ => FailureKind::Other,
        }
    }

    /// Daemon error code, if the daemon produced one.
    pub fn code(&self) -> Option<i32> {
        match self {
            RpcError::Daemon { code, .. } => Some(*code),
            _ => None,
        }
    }
}
