use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::models::User;
use crate::session::{decode_user, encode_user, SessionStore, SESSION_KEY};

/// In-memory SessionStore for testing and native builds.
///
/// Records are kept encoded, the same way the browser store keeps them, so
/// both go through the same decode path.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a raw record in place, as if written by an older client.
    pub fn insert_raw(&self, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(SESSION_KEY.to_string(), value.to_string());
        }
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Option<User> {
        let entries = self.entries.lock().ok()?;
        entries.get(SESSION_KEY).and_then(|raw| decode_user(raw))
    }

    fn save(&self, user: &User) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(SESSION_KEY.to_string(), encode_user(user));
        }
    }

    fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(SESSION_KEY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> User {
        User {
            id: "u1".into(),
            username: "ada".into(),
            email: "ada@example.com".into(),
            avatar: String::new(),
        }
    }

    #[test]
    fn test_save_and_load() {
        let store = MemoryStore::new();
        assert!(store.load().is_none());

        store.save(&ada());
        assert_eq!(store.load(), Some(ada()));

        // Clones share state
        let other = store.clone();
        other.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_corrupt_record_loads_as_none() {
        let store = MemoryStore::new();
        store.insert_raw("{not json");
        assert!(store.load().is_none());

        store.insert_raw(r#"{"username": "no id"}"#);
        assert!(store.load().is_none());
    }
}
