//! # Browser local storage
//!
//! [`LocalStorage`] is the [`KeyValueStore`] implementation used on the **web
//! platform**. It wraps `window.localStorage` through [`web_sys::Storage`], so
//! records survive page reloads and are scoped to the page's origin.
//!
//! ## Error handling
//!
//! `localStorage` throws from `setItem` when the origin's quota is exhausted;
//! that surfaces as [`StorageError::QuotaExceeded`] so the store can keep its
//! in-memory copy consistent with what was actually written. Any other thrown
//! value surfaces as [`StorageError::Unavailable`].

use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::errors::StorageError;
use crate::kv::KeyValueStore;

#[derive(Clone, Debug)]
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// Open the current window's `localStorage`.
    pub fn from_window() -> Result<Self, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(unavailable)?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(unavailable)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|_| StorageError::QuotaExceeded {
                key: key.to_string(),
            })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.storage.remove_item(key).map_err(unavailable)
    }
}

fn unavailable(err: JsValue) -> StorageError {
    StorageError::Unavailable(format!("{err:?}"))
}
