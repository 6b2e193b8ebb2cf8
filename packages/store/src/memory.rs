use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::kv::KeyValueStore;

/// In-memory KeyValueStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let kv = MemoryStore::new();
        assert!(kv.get("gym_token").is_none());

        kv.set("gym_token", "T");
        assert_eq!(kv.get("gym_token").as_deref(), Some("T"));

        kv.set("gym_token", "U");
        assert_eq!(kv.get("gym_token").as_deref(), Some("U"));

        kv.remove("gym_token");
        assert!(kv.get("gym_token").is_none());
    }

    #[test]
    fn test_clones_share_storage() {
        let kv = MemoryStore::new();
        let other = kv.clone();

        kv.set("gym_email", "a@x.com");
        assert_eq!(other.get("gym_email").as_deref(), Some("a@x.com"));

        other.remove("gym_email");
        assert!(kv.get("gym_email").is_none());
    }
}
