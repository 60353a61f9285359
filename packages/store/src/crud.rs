//! # CrudStore: an ordered record collection mirrored to a key-value store
//!
//! [`CrudStore`] owns the in-memory list of records of one kind (notes or
//! reminders) and keeps it mirrored, write-through, under a single key of a
//! [`KeyValueStore`]. The whole collection is stored as one JSON array, newest
//! record first.
//!
//! ## Operations
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`load`](CrudStore::load) | Re-reads the collection. A missing key, a read failure or malformed JSON all yield an empty collection. |
//! | [`create`](CrudStore::create) | Validates, assigns an id and timestamps, prepends, persists. |
//! | [`update`](CrudStore::update) | Validates, replaces the fields of the record with that id in place, refreshes `updated_at`, persists. Unknown id is a no-op. |
//! | [`delete`](CrudStore::delete) | Removes the record with that id, persists. Unknown id is a no-op. |
//!
//! ## Write path
//!
//! Every mutation is applied to the in-memory list, then the full list is
//! serialized and written under the key before the call returns. If the write
//! fails, the in-memory change is undone, so memory and storage never disagree.
//! A successful mutation is then published on the [`ChangeFeed`].
//!
//! No-op updates and deletes do not write and do not publish: the stored bytes
//! are left exactly as they were.

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, warn};

use crate::change::{ChangeFeed, ChangeKind, StoreChange};
use crate::errors::StoreError;
use crate::ids::{Clock, IdGenerator, SystemClock};
use crate::kv::KeyValueStore;
use crate::models::{Record, RecordId, RecordKind};

/// Records of kind `F` persisted through `S`.
pub struct CrudStore<F: RecordKind, S: KeyValueStore, C: Clock = SystemClock> {
    storage: S,
    key: String,
    records: Vec<Record<F>>,
    ids: IdGenerator,
    clock: C,
    feed: ChangeFeed,
}

impl<F: RecordKind, S: KeyValueStore> CrudStore<F, S> {
    /// Open the collection under the kind's default key and load it.
    pub fn open(storage: S, feed: ChangeFeed) -> Self {
        Self::open_with(storage, F::STORAGE_KEY, feed, SystemClock)
    }
}

impl<F: RecordKind, S: KeyValueStore, C: Clock> CrudStore<F, S, C> {
    /// Open the collection under `key` and load it.
    pub fn open_with(storage: S, key: impl Into<String>, feed: ChangeFeed, clock: C) -> Self {
        let mut store = Self {
            storage,
            key: key.into(),
            records: Vec::new(),
            ids: IdGenerator::new(),
            clock,
            feed,
        };
        store.load();
        store
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn feed(&self) -> &ChangeFeed {
        &self.feed
    }

    /// Records in display order, newest created first.
    pub fn records(&self) -> &[Record<F>] {
        &self.records
    }

    pub fn get(&self, id: RecordId) -> Option<&Record<F>> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Replace the in-memory collection with what is currently stored.
    pub fn load(&mut self) -> &[Record<F>] {
        self.records = load_collection(&self.storage, &self.key);
        for record in &self.records {
            self.ids.observe(record.id);
        }
        debug!(key = %self.key, count = self.records.len(), "loaded collection");
        &self.records
    }

    pub fn create(&mut self, fields: F) -> Result<&Record<F>, StoreError> {
        fields.validate()?;

        let now = self.clock.now();
        let id = self.ids.next(now);
        self.records.insert(
            0,
            Record {
                id,
                fields,
                created_at: now,
                updated_at: now,
            },
        );
        if let Err(err) = self.persist() {
            self.records.remove(0);
            return Err(err);
        }

        debug!(key = %self.key, id, "created {}", F::LABEL);
        self.publish(ChangeKind::Created(id));
        Ok(&self.records[0])
    }

    /// Returns `Ok(None)` when no record has `id`.
    pub fn update(&mut self, id: RecordId, fields: F) -> Result<Option<&Record<F>>, StoreError> {
        fields.validate()?;

        let Some(index) = self.position(id) else {
            debug!(key = %self.key, id, "update of unknown {} ignored", F::LABEL);
            return Ok(None);
        };

        let now = self.clock.now();
        let record = &mut self.records[index];
        let created_at = record.created_at;
        let updated_at = next_update_time(record.updated_at, now);
        let previous = std::mem::replace(
            record,
            Record {
                id,
                fields,
                created_at,
                updated_at,
            },
        );
        if let Err(err) = self.persist() {
            self.records[index] = previous;
            return Err(err);
        }

        debug!(key = %self.key, id, "updated {}", F::LABEL);
        self.publish(ChangeKind::Updated(id));
        Ok(Some(&self.records[index]))
    }

    /// Returns whether a record was removed.
    pub fn delete(&mut self, id: RecordId) -> Result<bool, StoreError> {
        let Some(index) = self.position(id) else {
            debug!(key = %self.key, id, "delete of unknown {} ignored", F::LABEL);
            return Ok(false);
        };

        let removed = self.records.remove(index);
        if let Err(err) = self.persist() {
            self.records.insert(index, removed);
            return Err(err);
        }

        debug!(key = %self.key, id, "deleted {}", F::LABEL);
        self.publish(ChangeKind::Deleted(id));
        Ok(true)
    }

    fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    fn persist(&self) -> Result<(), StoreError> {
        let serialized = serde_json::to_string(&self.records)?;
        self.storage
            .set_item(&self.key, &serialized)
            .map_err(|err| {
                warn!(key = %self.key, %err, "failed to persist collection");
                err.into()
            })
    }

    fn publish(&self, kind: ChangeKind) {
        self.feed.publish(StoreChange {
            key: self.key.clone(),
            kind,
        });
    }
}

/// Read a stored collection, treating a missing key, an unreadable store or
/// malformed data as an empty collection.
pub fn load_collection<F: RecordKind>(
    storage: &impl KeyValueStore,
    key: &str,
) -> Vec<Record<F>> {
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(err) => {
            warn!(key, %err, "failed to read collection, starting empty");
            return Vec::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(records) => records,
        Err(err) => {
            warn!(key, %err, "discarding malformed collection");
            Vec::new()
        }
    }
}

/// `updated_at` must move forward on every edit, even within one clock tick.
fn next_update_time(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    if now > previous {
        now
    } else {
        previous + Duration::milliseconds(1)
    }
}
