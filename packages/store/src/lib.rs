pub mod change;
pub mod config;
pub mod crud;
pub mod errors;
pub mod ids;
pub mod kv;
pub mod models;
pub mod stores;
pub mod timestamp;

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorage;

pub use change::{ChangeFeed, ChangeKind, StoreChange};
pub use config::{BackendConfig, PulseConfig, StorageConfig};
pub use crud::CrudStore;
pub use errors::{ConfigError, StorageError, StoreError, ValidationError};
pub use ids::{Clock, SystemClock};
pub use kv::KeyValueStore;
pub use models::{Note, NoteFields, Record, RecordId, RecordKind, Reminder, ReminderFields};
pub use stores::{LocalStores, Summary};
