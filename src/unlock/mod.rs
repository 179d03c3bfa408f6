// nct: Unlock Module
//
// Secure passphrase entry and temporary wallet unlocking. Passphrases are
// held in zeroizing buffers and never logged.

mod error;
pub mod prompt;
mod unlocker;

pub use error::PromptError;
pub use prompt::{PassphrasePrompt, PromptRequest, PromptResponse, system_prompt};
pub use unlocker::{DEFAULT_UNLOCK_SECS, UnlockOutcome, Unlocker};
