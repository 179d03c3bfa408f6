// nct: Reconciliation state machine
//
// Drives one name from fetched value to submitted transaction:
//
//   Editing ──> Unchanged? ──prompt──> Editing | Review | Cancelled
//      │
//      └──> Review ──> Validate (JSON) ──invalid──> prompt ──> Editing | Submit(raw) | Cancelled
//              │            └──valid──> Submit(canonical)
//              └──> Submit(raw)
//
//   Submit ──wallet locked──> unlock ──> Submit (once per unlock) | PassphraseCancelled
//
// Cancellation is always a returned value, and every path that ends in
// `Cancelled` returns before any `name_update` is issued.

use crate::error::Result;
use crate::gateway::{FailureKind, Gateway};
use crate::names::{NameClient, NameRecord};
use crate::unlock::{UnlockOutcome, Unlocker};

use super::classify::{canonicalize, classify, looks_structured};
use super::console::{Console, ReEdit, prompt_reedit, prompt_yes_no};
use super::editor::{EditSession, EditStep, Editor};

const UNCHANGED: &str = "Data is unchanged";
const INVALID_JSON: &str = "Invalid JSON";
const IS_THIS_JSON: &str = "Is this JSON?";

/// Terminal states of a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Submitted(String),
    PassphraseCancelled,
}

/// Terminal states of an interactive edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Submitted(String),
    Cancelled,
    EditorAborted,
    PassphraseCancelled,
}

impl From<SaveOutcome> for EditOutcome {
    fn from(outcome: SaveOutcome) -> Self {
        match outcome {
            SaveOutcome::Submitted(txid) => EditOutcome::Submitted(txid),
            SaveOutcome::PassphraseCancelled => EditOutcome::PassphraseCancelled,
        }
    }
}

/// Submit `value` for `name`, unlocking the wallet whenever the daemon says
/// it is locked. Each successful unlock is followed by exactly one
/// resubmission; any other failure propagates.
pub async fn save_name<G: Gateway>(
    names: &NameClient<'_, G>,
    unlocker: &mut Unlocker,
    name: &str,
    value: &str,
) -> Result<SaveOutcome> {
    loop {
        match names.update(name, value).await {
            Ok(txid) => {
                tracing::info!(name, %txid, "name updated");
                return Ok(SaveOutcome::Submitted(txid));
            }
            Err(e) if e.kind() == FailureKind::WalletLocked => {
                tracing::debug!(name, "wallet locked, requesting passphrase");
                match unlocker.unlock(names).await? {
                    UnlockOutcome::Unlocked => continue,
                    UnlockOutcome::Cancelled => return Ok(SaveOutcome::PassphraseCancelled),
                }
            }
            Err(e) => return Err(e.into()),
        }
    }
}

enum State {
    Editing,
    /// Edited (or explicitly accepted) text awaiting mode checks.
    Review(String),
    /// Text that must parse as JSON before submission.
    Validate(String),
    Submit(String),
}

/// The interactive edit workflow for one name.
pub struct Reconciler<'a, G: Gateway> {
    names: NameClient<'a, G>,
    unlocker: &'a mut Unlocker,
    console: &'a mut dyn Console,
}

impl<'a, G: Gateway> Reconciler<'a, G> {
    pub fn new(names: NameClient<'a, G>, unlocker: &'a mut Unlocker, console: &'a mut dyn Console) -> Self {
        Self {
            names,
            unlocker,
            console,
        }
    }

    /// Edit `record` in a fresh temp-file session and submit the result.
    pub async fn run<E: Editor>(&mut self, record: &NameRecord, editor: &E) -> Result<EditOutcome> {
        let mut session = EditSession::open(record, &classify(&record.value))?;
        self.drive(&mut session, editor).await
    }

    /// Run the state machine over an already opened session.
    pub async fn drive<E: Editor>(&mut self, session: &mut EditSession, editor: &E) -> Result<EditOutcome> {
        let mut state = State::Editing;

        loop {
            state = match state {
                State::Editing => {
                    let text = match session.run(editor).await? {
                        EditStep::AbortedNonZeroExit => {
                            tracing::debug!(name = session.name(), "editor exited non-zero");
                            return Ok(EditOutcome::EditorAborted);
                        }
                        EditStep::Edited(text) => text,
                    };

                    if session.is_unchanged(&text) {
                        match prompt_reedit(self.console, UNCHANGED)? {
                            ReEdit::Edit => State::Editing,
                            ReEdit::Use => State::Review(text),
                            ReEdit::Cancel => return Ok(EditOutcome::Cancelled),
                        }
                    } else {
                        State::Review(text)
                    }
                }

                State::Review(text) => {
                    if session.is_structured() {
                        State::Validate(text)
                    } else if looks_structured(&text) {
                        match prompt_yes_no(self.console, IS_THIS_JSON)? {
                            Some(true) => State::Validate(text),
                            Some(false) => State::Submit(text),
                            None => return Ok(EditOutcome::Cancelled),
                        }
                    } else {
                        State::Submit(text)
                    }
                }

                State::Validate(text) => match canonicalize(&text) {
                    Ok(canonical) => State::Submit(canonical),
                    Err(e) => {
                        tracing::debug!(name = session.name(), error = %e, "edited value is not valid JSON");
                        match prompt_reedit(self.console, INVALID_JSON)? {
                            ReEdit::Edit => {
                                session.mark_structured();
                                session.rebase(text);
                                State::Editing
                            }
                            ReEdit::Use => State::Submit(text),
                            ReEdit::Cancel => return Ok(EditOutcome::Cancelled),
                        }
                    }
                },

                State::Submit(value) => {
                    let outcome = save_name(&self.names, self.unlocker, session.name(), &value).await?;
                    return Ok(outcome.into());
                }
            };
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
