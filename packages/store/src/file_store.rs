//! # Filesystem-backed key-value store
//!
//! [`FileStore`] is a [`KeyValueStore`] implementation that persists each key as
//! a JSON file in a base directory. It is used when the UI runs natively
//! (desktop / mobile) to retain notes and reminders across restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── localNotes.json
//! ├── localReminders.json
//! └── theme.json
//! ```
//!
//! Writes go to `<key>.json.tmp` first and are renamed into place, so a value
//! on disk is always either the previous one or the new one.
//!
//! ## Platform data directories
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS / iOS | `~/Library/Application Support/pulse-crm/` |
//! | Linux | `~/.local/share/pulse-crm/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\pulse-crm\` |

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::errors::StorageError;
use crate::kv::KeyValueStore;

/// Filesystem-backed KeyValueStore for desktop and mobile persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    fn item_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        if key.is_empty()
            || key.starts_with('.')
            || key.contains(['/', '\\'])
        {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.base.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.item_path(key)?) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.item_path(key)?;
        fs::create_dir_all(&self.base)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.item_path(key)?) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChangeFeed, CrudStore, NoteFields};

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("pulse-crm"));

        assert!(store.get_item("localNotes").unwrap().is_none());
        store.set_item("localNotes", "[]").unwrap();
        assert_eq!(store.get_item("localNotes").unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("pulse-crm/localNotes.json").exists());
        assert!(!dir.path().join("pulse-crm/localNotes.json.tmp").exists());

        store.remove_item("localNotes").unwrap();
        assert!(store.get_item("localNotes").unwrap().is_none());
        store.remove_item("localNotes").unwrap();
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());

        for key in ["", "../escape", "a/b", ".hidden"] {
            assert!(matches!(
                store.set_item(key, "x"),
                Err(StorageError::InvalidKey(_))
            ));
        }
    }

    #[test]
    fn test_notes_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();

        let mut notes = CrudStore::<NoteFields, _>::open(
            FileStore::new(dir.path().to_path_buf()),
            ChangeFeed::new(),
        );
        let id = notes.create(NoteFields::new("hello", "from disk")).unwrap().id;

        // Re-open from same directory
        let reopened = CrudStore::<NoteFields, _>::open(
            FileStore::new(dir.path().to_path_buf()),
            ChangeFeed::new(),
        );
        assert_eq!(reopened.len(), 1);
        let note = reopened.get(id).unwrap();
        assert_eq!(note.title, "hello");
        assert_eq!(note.content, "from disk");
    }
}
