//! Change notification between a store and the views that read from it.
//!
//! Every successful mutation publishes a [`StoreChange`] naming the storage key
//! that changed. Consumers (a dashboard counting records, a second list of the
//! same collection) subscribe and reload their own copy when notified.

use tokio::sync::broadcast;
use tracing::trace;

use crate::models::RecordId;

const DEFAULT_CAPACITY: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeKind {
    Created(RecordId),
    Updated(RecordId),
    Deleted(RecordId),
    /// The collection was reloaded after another context wrote to it.
    Reloaded,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreChange {
    /// Storage key of the collection that changed.
    pub key: String,
    pub kind: ChangeKind,
}

#[derive(Clone, Debug)]
pub struct ChangeFeed {
    tx: broadcast::Sender<StoreChange>,
}

impl ChangeFeed {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreChange> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    pub fn publish(&self, change: StoreChange) {
        if let Err(broadcast::error::SendError(change)) = self.tx.send(change) {
            trace!(key = %change.key, "no subscribers for store change");
        }
    }
}

impl Default for ChangeFeed {
    fn default() -> Self {
        Self::new()
    }
}
