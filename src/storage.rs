//! Local Key-Value Persistence
//!
//! JSON values stored under string keys. The browser implementation is backed by
//! `window.localStorage`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("storage access failed: {0}")]
    Access(String),
    #[error("failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),
}

/// String key-value store
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, looked up on every access
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|e| StorageError::Access(format!("{:?}", e)))?
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }
}

/// Decode a stored value, falling back to `T::default()` when absent or malformed
pub fn decode_or_default<T: DeserializeOwned + Default>(key: &str, raw: Option<&str>) -> T {
    let Some(raw) = raw else {
        return T::default();
    };
    match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("[STORAGE] Discarding malformed value under '{}': {}", key, e);
            T::default()
        }
    }
}

/// Read and decode `key`; unreadable storage is treated like an absent value
pub fn load_or_default<T, S>(store: &S, key: &str) -> T
where
    T: DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    match store.read(key) {
        Ok(raw) => decode_or_default(key, raw.as_deref()),
        Err(e) => {
            log::warn!("[STORAGE] Could not read '{}': {}", key, e);
            T::default()
        }
    }
}

/// Serialize `value` and overwrite `key`
pub fn save<T, S>(store: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let json = serde_json::to_string(value)?;
    store.write(key, &json)
}

#[cfg(test)]
pub(crate) mod memory {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory store for tests
    #[derive(Default)]
    pub struct MemoryStorage {
        values: RefCell<HashMap<String, String>>,
        fail_writes: bool,
    }

    impl MemoryStorage {
        pub fn with(key: &str, value: &str) -> Self {
            let store = Self::default();
            store.values.borrow_mut().insert(key.to_string(), value.to_string());
            store
        }

        /// Store whose writes always fail
        pub fn failing() -> Self {
            Self {
                fail_writes: true,
                ..Default::default()
            }
        }

        pub fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }
    }

    impl KeyValueStore for MemoryStorage {
        fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.get(key))
        }

        fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.fail_writes {
                return Err(StorageError::Access("quota exceeded".to_string()));
            }
            self.values.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryStorage;
    use super::*;
    use crate::tasks::TaskList;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_absent_key_defaults() {
        let store = MemoryStorage::default();
        let list: TaskList = load_or_default(&store, "tasks");
        assert!(list.is_empty());
    }

    #[test]
    fn test_malformed_value_defaults() {
        for raw in ["not json", "{\"id\":1}", "[{\"text\":\"missing fields\"}]", ""] {
            let store = MemoryStorage::with("tasks", raw);
            let list: TaskList = load_or_default(&store, "tasks");
            assert!(list.is_empty(), "expected default for {:?}", raw);
        }
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStorage::default();
        let mut list = TaskList::default();
        list.add("Write docs", Utc.timestamp_millis_opt(1_000).unwrap());
        list.add("Ship it", Utc.timestamp_millis_opt(2_000).unwrap());

        save(&store, "tasks", &list).unwrap();
        let loaded: TaskList = load_or_default(&store, "tasks");
        assert_eq!(loaded, list);
    }

    #[test]
    fn test_reads_hand_written_snapshot() {
        let raw = r#"[{"id":"17","text":"Buy milk","completed":true,"createdAt":"2024-05-01T10:00:00.000Z"}]"#;
        let list: TaskList = decode_or_default("tasks", Some(raw));
        assert_eq!(list.len(), 1);
        assert_eq!(list.tasks()[0].id, "17");
        assert!(list.tasks()[0].completed);
    }

    #[test]
    fn test_failed_write_reports_error() {
        let store = MemoryStorage::failing();
        let result = save(&store, "tasks", &TaskList::default());
        assert!(matches!(result, Err(StorageError::Access(_))));
        assert!(store.get("tasks").is_none());
    }
}
