//! In-memory storage backend

use std::collections::HashMap;
use std::sync::RwLock;

use super::KeyValueStorage;
use crate::error::StoreResult;

/// HashMap-backed storage, used by tests and as the demo fallback
#[derive(Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.read().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.entries.write().unwrap().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove_round_trip() {
        let storage = MemoryStorage::new();
        assert!(storage.get("currentUser").unwrap().is_none());

        storage.set("currentUser", "{\"id\":\"1\"}").unwrap();
        assert_eq!(
            storage.get("currentUser").unwrap().as_deref(),
            Some("{\"id\":\"1\"}")
        );

        storage.remove("currentUser").unwrap();
        assert!(storage.get("currentUser").unwrap().is_none());
    }

    #[test]
    fn remove_missing_key_is_ok() {
        let storage = MemoryStorage::new();
        storage.remove("nothing-here").unwrap();
    }
}
