// nct: Top-level error types
//
// Aggregates errors from the gateway, configuration and passphrase prompt
// into a single error enum for the command boundary.

use thiserror::Error;

use crate::gateway::RpcError;

/// Top-level error type for all nct operations.
#[derive(Debug, Error)]
pub enum NctError {
    #[error(transparent)]
    Rpc(#[from] RpcError),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Passphrase prompt error: {0}")]
    Prompt(#[from] crate::unlock::PromptError),

    #[error("Name \"{0}\" does not exist")]
    NameNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NctError {
    /// Errors that end the process immediately, wherever they occur.
    pub fn is_fatal(&self) -> bool {
        matches!(self, NctError::Rpc(RpcError::ConnectionRefused))
    }
}

pub type Result<T> = std::result::Result<T, NctError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_refused_is_fatal() {
        let err = NctError::from(RpcError::ConnectionRefused);
        assert!(err.is_fatal());
        assert_eq!(err.to_string(), "Unable to connect to namecoind");
    }

    #[test]
    fn test_daemon_errors_are_not_fatal() {
        let err = NctError::from(RpcError::Daemon {
            code: -25,
            message: "bad tx".to_string(),
        });
        assert!(!err.is_fatal());
        assert!(!NctError::NameNotFound("d/x".to_string()).is_fatal());
    }

    #[test]
    fn test_name_not_found_message() {
        let err = NctError::NameNotFound("d/missing".to_string());
        assert_eq!(err.to_string(), "Name \"d/missing\" does not exist");
    }
}
