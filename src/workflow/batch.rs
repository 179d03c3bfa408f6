// nct: Batch updater
//
// Re-submits the current value of every stale name so it does not expire.
// Items are consumed front to back through the same save/unlock/retry path
// as an interactive edit. Cancelling the passphrase prompt stops the whole
// batch: the remaining items are dropped unattempted.

use std::collections::VecDeque;

use crate::error::{NctError, Result};
use crate::gateway::Gateway;
use crate::names::{NameClient, NameRecord};
use crate::unlock::Unlocker;

use super::reconcile::{SaveOutcome, save_name};

/// Names expiring within this many blocks are renewed.
pub const DEFAULT_EXPIRY_THRESHOLD: i64 = 5000;

/// A name queued for renewal with the value it will be re-submitted with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchItem {
    pub name: String,
    pub value: String,
}

impl From<NameRecord> for BatchItem {
    fn from(record: NameRecord) -> Self {
        Self {
            name: record.name,
            value: record.value,
        }
    }
}

/// Per-item result, in queue order.
#[derive(Debug)]
pub enum BatchEvent {
    Updated { name: String, txid: String },
    Failed { name: String, error: NctError },
    /// Reported once; nothing follows it.
    PassphraseCancelled,
}

/// Names whose remaining lifetime is below `threshold` blocks.
pub fn stale_names(listing: Vec<NameRecord>, threshold: i64) -> Vec<BatchItem> {
    listing
        .into_iter()
        .filter(|record| record.expires_in < threshold)
        .map(BatchItem::from)
        .collect()
}

pub struct BatchUpdater<'a, G: Gateway> {
    names: NameClient<'a, G>,
    unlocker: &'a mut Unlocker,
    queue: VecDeque<BatchItem>,
}

impl<'a, G: Gateway> BatchUpdater<'a, G> {
    pub fn new(names: NameClient<'a, G>, unlocker: &'a mut Unlocker, items: Vec<BatchItem>) -> Self {
        Self {
            names,
            unlocker,
            queue: items.into(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Process the next item. `Ok(None)` once the queue is exhausted or
    /// the batch was cancelled; `Err` only for fatal errors, after which the
    /// queue is empty too.
    pub async fn next(&mut self) -> Result<Option<BatchEvent>> {
        let Some(item) = self.queue.pop_front() else {
            return Ok(None);
        };

        let event = match save_name(&self.names, self.unlocker, &item.name, &item.value).await {
            Ok(SaveOutcome::Submitted(txid)) => BatchEvent::Updated {
                name: item.name,
                txid,
            },
            Ok(SaveOutcome::PassphraseCancelled) => {
                tracing::debug!(skipped = self.queue.len(), "batch cancelled at passphrase prompt");
                self.queue.clear();
                BatchEvent::PassphraseCancelled
            }
            Err(error) if error.is_fatal() => {
                self.queue.clear();
                return Err(error);
            }
            Err(error) => {
                tracing::warn!(name = %item.name, %error, "name update failed");
                BatchEvent::Failed {
                    name: item.name,
                    error,
                }
            }
        };
        Ok(Some(event))
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
