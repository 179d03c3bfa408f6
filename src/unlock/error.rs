// nct: Passphrase prompt error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("pinentry failed: {0}")]
    Pinentry(String),

    #[error("no pinentry program found")]
    Unavailable,

    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
}
