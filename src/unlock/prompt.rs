// nct: Secure passphrase prompt
//
// The passphrase is collected without echo, preferably through the GnuPG
// `pinentry` program (which also renders the error line after a wrong
// passphrase), falling back to a no-echo terminal read when no pinentry
// binary is installed. Entered secrets live in zeroizing buffers only.

use std::io;

use pinentry::PassphraseInput;
use secrecy::ExposeSecret;
use zeroize::Zeroizing;

use super::PromptError;

/// What the operator is being asked for.
#[derive(Debug, Clone, Copy)]
pub struct PromptRequest<'a> {
    pub prompt: &'a str,
    pub description: &'a str,
    /// Shown above the input after a failed attempt.
    pub error: Option<&'a str>,
}

/// The three ways a secure prompt can end.
pub enum PromptResponse {
    Secret(Zeroizing<String>),
    Empty,
    Cancelled,
}

impl PromptResponse {
    fn from_entry(entry: &str) -> Self {
        if entry.is_empty() {
            PromptResponse::Empty
        } else {
            PromptResponse::Secret(Zeroizing::new(entry.to_string()))
        }
    }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over non-echoing secret entry, enabling a scripted mock
/// in tests.
pub trait PassphrasePrompt {
    fn request(&mut self, request: &PromptRequest<'_>) -> Result<PromptResponse, PromptError>;
}

/// Pick pinentry when available, otherwise the terminal.
pub fn system_prompt() -> Box<dyn PassphrasePrompt> {
    if PassphraseInput::with_default_binary().is_some() {
        tracing::debug!("using pinentry for passphrase entry");
        Box::new(PinentryPrompt)
    } else {
        tracing::debug!("pinentry not found, using terminal passphrase entry");
        Box::new(TerminalPrompt)
    }
}

// ─── pinentry ────────────────────────────────────────────────────────────────

pub struct PinentryPrompt;

impl PassphrasePrompt for PinentryPrompt {
    fn request(&mut self, request: &PromptRequest<'_>) -> Result<PromptResponse, PromptError> {
        let mut input = PassphraseInput::with_default_binary().ok_or(PromptError::Unavailable)?;
        input
            .with_prompt(request.prompt)
            .with_description(request.description);
        if let Some(error) = request.error {
            input.with_error(error);
        }

        match input.interact() {
            Ok(secret) => Ok(PromptResponse::from_entry(secret.expose_secret())),
            Err(pinentry::Error::Cancelled) => Ok(PromptResponse::Cancelled),
            Err(e) => Err(PromptError::Pinentry(e.to_string())),
        }
    }
}

// ─── Terminal fallback ───────────────────────────────────────────────────────

/// No-echo read from the controlling terminal. End of input cancels.
pub struct TerminalPrompt;

impl PassphrasePrompt for TerminalPrompt {
    fn request(&mut self, request: &PromptRequest<'_>) -> Result<PromptResponse, PromptError> {
        if let Some(error) = request.error {
            eprintln!("{}", error);
        }
        eprintln!("{}", request.description);

        match rpassword::prompt_password(format!("{}: ", request.prompt)) {
            Ok(entry) => {
                let entry = Zeroizing::new(entry);
                Ok(PromptResponse::from_entry(&entry))
            }
            Err(e) if matches!(e.kind(), io::ErrorKind::UnexpectedEof | io::ErrorKind::Interrupted) => {
                Ok(PromptResponse::Cancelled)
            }
            Err(e) => Err(PromptError::Io(e)),
        }
    }
}

// ─── Scripted Mock for Testing ───────────────────────────────────────────────
