// nct: Wallet unlocker
//
// Asks the operator for the wallet passphrase and hands it to
// `walletpassphrase` for a bounded window. Wrong passphrases re-prompt with
// a visible reason; empty answers re-prompt silently; cancelling the prompt
// is reported as a distinct outcome rather than an error.

use crate::error::Result;
use crate::gateway::{FailureKind, Gateway};
use crate::names::NameClient;

use super::prompt::{PassphrasePrompt, PromptRequest, PromptResponse};

/// How long an unlock lasts unless overridden, in seconds.
pub const DEFAULT_UNLOCK_SECS: u64 = 300;

const PROMPT: &str = "Unlock Namecoin wallet";
const DESCRIPTION: &str = "Please enter the wallet passphrase";
const WRONG_PASSPHRASE: &str = "The wallet passphrase entered was incorrect";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockOutcome {
    Unlocked,
    Cancelled,
}

pub struct Unlocker {
    prompt: Box<dyn PassphrasePrompt>,
    timeout_secs: u64,
}

impl Unlocker {
    pub fn new(prompt: Box<dyn PassphrasePrompt>, timeout_secs: u64) -> Self {
        Self {
            prompt,
            timeout_secs,
        }
    }

    /// Prompt until the wallet unlocks, the operator cancels, or the daemon
    /// fails with something other than a wrong passphrase.
    pub async fn unlock<G: Gateway>(&mut self, names: &NameClient<'_, G>) -> Result<UnlockOutcome> {
        let mut error: Option<&str> = None;

        loop {
            let request = PromptRequest {
                prompt: PROMPT,
                description: DESCRIPTION,
                error,
            };

            let passphrase = match self.prompt.request(&request)? {
                PromptResponse::Cancelled => {
                    tracing::debug!("passphrase entry cancelled");
                    return Ok(UnlockOutcome::Cancelled);
                }
                PromptResponse::Empty => {
                    error = None;
                    continue;
                }
                PromptResponse::Secret(passphrase) => passphrase,
            };

            match names.wallet_passphrase(&passphrase, self.timeout_secs).await {
                Ok(()) => {
                    tracing::info!(seconds = self.timeout_secs, "wallet unlocked");
                    return Ok(UnlockOutcome::Unlocked);
                }
                Err(e) if e.kind() == FailureKind::WrongPassphrase => {
                    tracing::warn!("incorrect wallet passphrase");
                    error = Some(WRONG_PASSPHRASE);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NctError;
    use crate::gateway::RpcError;
    use crate::gateway::mock::MockGateway;
    use crate::names::WALLET_PASSPHRASE;
    use crate::unlock::prompt::mock::{Scripted, ScriptedPrompt};
    use serde_json::{Value, json};

    #[tokio::test]
    async fn test_correct_passphrase_unlocks() {
        let gateway = MockGateway::new().expect(WALLET_PASSPHRASE, Ok(Value::Null));
        let names = NameClient::new(&gateway);
        let mut unlocker = Unlocker::new(
            Box::new(ScriptedPrompt::new(vec![Scripted::Secret("hunter2")])),
            DEFAULT_UNLOCK_SECS,
        );

        let outcome = unlocker.unlock(&names).await.unwrap();
        assert_eq!(outcome, UnlockOutcome::Unlocked);
        assert_eq!(gateway.calls()[0].1, vec![json!("hunter2"), json!(300)]);
    }

    #[tokio::test]
    async fn test_empty_answer_reprompts_without_rpc() {
        let gateway = MockGateway::new().expect(WALLET_PASSPHRASE, Ok(Value::Null));
        let names = NameClient::new(&gateway);
        let prompt = ScriptedPrompt::new(vec![Scripted::Empty, Scripted::Secret("pw")]);
        let seen = prompt.seen_errors();
        let mut unlocker = Unlocker::new(Box::new(prompt), 60);

        assert_eq!(unlocker.unlock(&names).await.unwrap(), UnlockOutcome::Unlocked);
        assert_eq!(gateway.calls_to(WALLET_PASSPHRASE), 1);
        assert_eq!(*seen.lock().unwrap(), vec![None, None]);
    }

    #[tokio::test]
    async fn test_wrong_passphrase_reprompts_with_reason() {
        let gateway = MockGateway::new()
            .expect_error(WALLET_PASSPHRASE, -14)
            .expect(WALLET_PASSPHRASE, Ok(Value::Null));
        let names = NameClient::new(&gateway);
        let prompt = ScriptedPrompt::new(vec![Scripted::Secret("wrong"), Scripted::Secret("right")]);
        let seen = prompt.seen_errors();
        let mut unlocker = Unlocker::new(Box::new(prompt), DEFAULT_UNLOCK_SECS);

        assert_eq!(unlocker.unlock(&names).await.unwrap(), UnlockOutcome::Unlocked);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![None, Some(WRONG_PASSPHRASE.to_string())]
        );
        assert_eq!(gateway.calls()[1].1[0], json!("right"));
    }

    #[tokio::test]
    async fn test_empty_after_wrong_passphrase_clears_reason() {
        let gateway = MockGateway::new()
            .expect_error(WALLET_PASSPHRASE, -14)
            .expect(WALLET_PASSPHRASE, Ok(Value::Null));
        let names = NameClient::new(&gateway);
        let prompt = ScriptedPrompt::new(vec![
            Scripted::Secret("wrong"),
            Scripted::Empty,
            Scripted::Secret("right"),
        ]);
        let seen = prompt.seen_errors();
        let mut unlocker = Unlocker::new(Box::new(prompt), DEFAULT_UNLOCK_SECS);

        unlocker.unlock(&names).await.unwrap();
        assert_eq!(
            *seen.lock().unwrap(),
            vec![None, Some(WRONG_PASSPHRASE.to_string()), None]
        );
    }

    #[tokio::test]
    async fn test_cancel_is_not_an_error() {
        let gateway = MockGateway::new();
        let names = NameClient::new(&gateway);
        let mut unlocker = Unlocker::new(
            Box::new(ScriptedPrompt::new(vec![Scripted::Cancel])),
            DEFAULT_UNLOCK_SECS,
        );

        assert_eq!(unlocker.unlock(&names).await.unwrap(), UnlockOutcome::Cancelled);
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_other_daemon_failure_propagates() {
        let gateway = MockGateway::new().expect_error(WALLET_PASSPHRASE, -15);
        let names = NameClient::new(&gateway);
        let mut unlocker = Unlocker::new(
            Box::new(ScriptedPrompt::new(vec![Scripted::Secret("pw")])),
            DEFAULT_UNLOCK_SECS,
        );

        let err = unlocker.unlock(&names).await.unwrap_err();
        assert!(matches!(err, NctError::Rpc(RpcError::Daemon { code: -15, .. })));
    }
}
