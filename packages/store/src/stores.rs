//! The per-process set of local stores and the dashboard's view of them.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::change::{ChangeFeed, ChangeKind, StoreChange};
use crate::config::StorageConfig;
use crate::crud::{load_collection, CrudStore};
use crate::kv::KeyValueStore;
use crate::models::{Note, NoteFields, Reminder, ReminderFields};

/// Notes and reminders over one storage adapter and one change feed.
pub struct LocalStores<S: KeyValueStore + Clone> {
    pub notes: CrudStore<NoteFields, S>,
    pub reminders: CrudStore<ReminderFields, S>,
    storage: S,
    config: StorageConfig,
    feed: ChangeFeed,
}

impl<S: KeyValueStore + Clone> LocalStores<S> {
    pub fn open(storage: S, config: StorageConfig) -> Self {
        let feed = ChangeFeed::new();
        let notes = CrudStore::open_with(
            storage.clone(),
            config.notes_key.clone(),
            feed.clone(),
            Default::default(),
        );
        let reminders = CrudStore::open_with(
            storage.clone(),
            config.reminders_key.clone(),
            feed.clone(),
            Default::default(),
        );
        Self {
            notes,
            reminders,
            storage,
            config,
            feed,
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    pub fn feed(&self) -> &ChangeFeed {
        &self.feed
    }

    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<crate::StoreChange> {
        self.feed.subscribe()
    }

    /// Reload whichever store lives under `key`. Returns false for other keys.
    pub fn reload(&mut self, key: &str) -> bool {
        if key == self.notes.key() {
            self.notes.load();
            true
        } else if key == self.reminders.key() {
            self.reminders.load();
            true
        } else {
            false
        }
    }

    /// React to a write made by another context (another browser tab) over the
    /// same storage: reload the affected collection and tell local subscribers.
    /// `None` means the whole storage area was cleared. Returns whether any
    /// collection was reloaded.
    pub fn apply_external_change(&mut self, key: Option<&str>) -> bool {
        let keys: Vec<String> = match key {
            Some(key) => vec![key.to_string()],
            None => vec![self.notes.key().to_string(), self.reminders.key().to_string()],
        };
        let mut reloaded = false;
        for key in keys {
            if self.reload(&key) {
                debug!(%key, "reloaded after external change");
                self.feed.publish(StoreChange {
                    key,
                    kind: ChangeKind::Reloaded,
                });
                reloaded = true;
            }
        }
        reloaded
    }

    /// Re-read both collections from storage, independently of the live stores.
    pub fn read_summary(&self, now: NaiveDateTime) -> Summary {
        Summary::load(&self.storage, &self.config, now)
    }
}

/// Counts shown on the dashboard.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Summary {
    pub notes: usize,
    pub reminders: usize,
    /// Reminders whose due time is still ahead.
    pub upcoming: usize,
    pub next_due: Option<Reminder>,
}

impl Summary {
    pub fn from_records(notes: &[Note], reminders: &[Reminder], now: NaiveDateTime) -> Self {
        let mut upcoming: Vec<(NaiveDateTime, &Reminder)> = reminders
            .iter()
            .filter_map(|r| r.due_at().map(|due| (due, r)))
            .filter(|(due, _)| *due >= now)
            .collect();
        upcoming.sort_by_key(|(due, r)| (*due, r.id));

        Self {
            notes: notes.len(),
            reminders: reminders.len(),
            upcoming: upcoming.len(),
            next_due: upcoming.first().map(|(_, r)| (*r).clone()),
        }
    }

    pub fn load(storage: &impl KeyValueStore, config: &StorageConfig, now: NaiveDateTime) -> Self {
        let notes: Vec<Note> = load_collection(storage, &config.notes_key);
        let reminders: Vec<Reminder> = load_collection(storage, &config.reminders_key);
        Self::from_records(&notes, &reminders, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_stores_share_feed_and_storage() {
        let storage = MemoryStore::new();
        let mut stores = LocalStores::open(storage.clone(), StorageConfig::default());
        let mut changes = stores.subscribe();

        stores.notes.create(NoteFields::new("n", "body")).unwrap();
        stores
            .reminders
            .create(ReminderFields::new("r", "2024-06-02T09:00"))
            .unwrap();

        let keys: Vec<String> = std::iter::from_fn(|| changes.try_recv().ok())
            .map(|c: StoreChange| c.key)
            .collect();
        assert_eq!(keys, vec!["localNotes", "localReminders"]);
        assert!(storage.get_item("localNotes").unwrap().is_some());
    }

    #[test]
    fn test_reload_picks_up_other_context() {
        let storage = MemoryStore::new();
        let mut tab_a = LocalStores::open(storage.clone(), StorageConfig::default());
        let mut tab_b = LocalStores::open(storage, StorageConfig::default());

        tab_a.notes.create(NoteFields::new("from a", "x")).unwrap();
        assert!(tab_b.notes.is_empty());

        assert!(tab_b.reload("localNotes"));
        assert_eq!(tab_b.notes.len(), 1);
        assert!(!tab_b.reload("somethingElse"));
    }

    #[test]
    fn test_external_change_keeps_other_context_records() {
        let storage = MemoryStore::new();
        let mut tab_a = LocalStores::open(storage.clone(), StorageConfig::default());
        let mut tab_b = LocalStores::open(storage.clone(), StorageConfig::default());
        let mut dashboard_b = tab_b.subscribe();

        let from_a = tab_a.notes.create(NoteFields::new("from a", "x")).unwrap().id;

        // Tab B hears about the write through the storage event
        assert!(tab_b.apply_external_change(Some("localNotes")));
        assert_eq!(
            dashboard_b.try_recv().unwrap(),
            StoreChange {
                key: "localNotes".to_string(),
                kind: ChangeKind::Reloaded,
            }
        );

        let from_b = tab_b.notes.create(NoteFields::new("from b", "y")).unwrap().id;
        let stored: Vec<Note> = load_collection(&storage, "localNotes");
        let ids: Vec<_> = stored.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![from_b, from_a]);
    }

    #[test]
    fn test_external_change_to_unrelated_key() {
        let storage = MemoryStore::new();
        let mut stores = LocalStores::open(storage, StorageConfig::default());
        let mut changes = stores.subscribe();

        assert!(!stores.apply_external_change(Some("theme")));
        assert!(changes.try_recv().is_err());
    }

    #[test]
    fn test_storage_cleared_elsewhere() {
        let storage = MemoryStore::new();
        let mut stores = LocalStores::open(storage.clone(), StorageConfig::default());
        stores.notes.create(NoteFields::new("n", "b")).unwrap();
        stores
            .reminders
            .create(ReminderFields::new("r", "2024-06-02T09:00"))
            .unwrap();
        let mut changes = stores.subscribe();

        storage.remove_item("localNotes").unwrap();
        storage.remove_item("localReminders").unwrap();
        assert!(stores.apply_external_change(None));

        assert!(stores.notes.is_empty());
        assert!(stores.reminders.is_empty());
        let kinds: Vec<ChangeKind> = std::iter::from_fn(|| changes.try_recv().ok())
            .map(|c| c.kind)
            .collect();
        assert_eq!(kinds, vec![ChangeKind::Reloaded, ChangeKind::Reloaded]);
    }

    #[test]
    fn test_custom_keys() {
        let storage = MemoryStore::new();
        let config = StorageConfig {
            notes_key: "crmNotes".to_string(),
            ..StorageConfig::default()
        };
        let mut stores = LocalStores::open(storage.clone(), config);
        stores.notes.create(NoteFields::new("n", "b")).unwrap();
        assert!(storage.get_item("crmNotes").unwrap().is_some());
        assert!(storage.get_item("localNotes").unwrap().is_none());
    }

    #[test]
    fn test_summary_counts_upcoming() {
        let storage = MemoryStore::new();
        let mut stores = LocalStores::open(storage, StorageConfig::default());
        stores.notes.create(NoteFields::new("n1", "b")).unwrap();
        stores.notes.create(NoteFields::new("n2", "b")).unwrap();
        let past = ReminderFields::new("past", "2024-06-01T08:00");
        let soon = ReminderFields::new("soon", "2024-06-03T09:00");
        let later = ReminderFields::new("later", "2024-06-10T09:00");
        let vague = ReminderFields::new("vague", "someday");
        for fields in [later, past, vague, soon] {
            stores.reminders.create(fields).unwrap();
        }

        let summary = stores.read_summary(at(2, 12));
        assert_eq!(summary.notes, 2);
        assert_eq!(summary.reminders, 4);
        assert_eq!(summary.upcoming, 2);
        assert_eq!(summary.next_due.unwrap().text, "soon");
    }

    #[test]
    fn test_summary_of_empty_storage() {
        let summary = Summary::load(&MemoryStore::new(), &StorageConfig::default(), at(1, 0));
        assert_eq!(summary, Summary::default());
    }
}
