// nct: Workflow Module
//
// The interactive edit/update workflow: content classification, the editor
// session, the reconciliation state machine and the batch renewer.

pub mod batch;
pub mod classify;
pub mod console;
pub mod editor;
pub mod reconcile;

pub use batch::{BatchEvent, BatchItem, BatchUpdater, DEFAULT_EXPIRY_THRESHOLD, stale_names};
pub use classify::{Classified, canonicalize, classify, looks_structured};
pub use console::{Console, ReEdit, Terminal};
pub use editor::{EditSession, EditStep, Editor, ExternalEditor};
pub use reconcile::{EditOutcome, Reconciler, SaveOutcome, save_name};
