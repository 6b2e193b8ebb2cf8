//! Persisted session record.
//!
//! Three flat string keys, no schema versioning. The client trusts whatever
//! was last written here; the backend rejects stale tokens on its own.

use serde::{Deserialize, Serialize};

use crate::kv::KeyValueStore;

pub const TOKEN_KEY: &str = "gym_token";
pub const EMAIL_KEY: &str = "gym_email";
pub const ROLE_KEY: &str = "gym_role";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub token: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl SessionRecord {
    pub fn load<S: KeyValueStore>(kv: &S) -> Self {
        Self {
            token: kv.get(TOKEN_KEY),
            email: kv.get(EMAIL_KEY),
            role: kv.get(ROLE_KEY),
        }
    }

    pub fn save<S: KeyValueStore>(&self, kv: &S) {
        match &self.token {
            Some(token) => kv.set(TOKEN_KEY, token),
            None => kv.remove(TOKEN_KEY),
        }
        match &self.email {
            Some(email) => kv.set(EMAIL_KEY, email),
            None => kv.remove(EMAIL_KEY),
        }
        match &self.role {
            Some(role) => kv.set(ROLE_KEY, role),
            None => kv.remove(ROLE_KEY),
        }
    }

    pub fn clear<S: KeyValueStore>(kv: &S) {
        kv.remove(TOKEN_KEY);
        kv.remove(EMAIL_KEY);
        kv.remove(ROLE_KEY);
    }

    /// An identity is restorable only when both email and role survived.
    pub fn is_authenticated(&self) -> bool {
        self.email.is_some() && self.role.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_roundtrip() {
        let kv = MemoryStore::new();
        let record = SessionRecord {
            token: Some("T".into()),
            email: Some("a@x.com".into()),
            role: Some("admin".into()),
        };
        record.save(&kv);

        let loaded = SessionRecord::load(&kv);
        assert_eq!(loaded, record);
        assert!(loaded.is_authenticated());
    }

    #[test]
    fn test_partial_record_is_not_authenticated() {
        let kv = MemoryStore::new();
        kv.set(EMAIL_KEY, "a@x.com");

        let loaded = SessionRecord::load(&kv);
        assert_eq!(loaded.email.as_deref(), Some("a@x.com"));
        assert!(loaded.role.is_none());
        assert!(!loaded.is_authenticated());
    }

    #[test]
    fn test_save_with_absent_fields_removes_keys() {
        let kv = MemoryStore::new();
        kv.set(TOKEN_KEY, "stale");

        let record = SessionRecord {
            token: None,
            email: Some("a@x.com".into()),
            role: Some("user".into()),
        };
        record.save(&kv);

        assert!(kv.get(TOKEN_KEY).is_none());
        assert_eq!(kv.get(ROLE_KEY).as_deref(), Some("user"));
    }

    #[test]
    fn test_clear_removes_all_keys() {
        let kv = MemoryStore::new();
        SessionRecord {
            token: Some("T".into()),
            email: Some("a@x.com".into()),
            role: Some("member".into()),
        }
        .save(&kv);

        SessionRecord::clear(&kv);
        assert!(kv.get(TOKEN_KEY).is_none());
        assert!(kv.get(EMAIL_KEY).is_none());
        assert!(kv.get(ROLE_KEY).is_none());
        assert_eq!(SessionRecord::load(&kv), SessionRecord::default());
    }
}
