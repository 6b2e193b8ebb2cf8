//! Platform-appropriate backend client constructors.
//!
//! Web builds persist the session in browser `localStorage`; native builds
//! (tests, previews) share one in-memory store for the life of the process.

use api::{ApiConfig, GymClient};
use store::KeyValueStore;

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn process_store() -> store::MemoryStore {
    use std::sync::OnceLock;
    static STORE: OnceLock<store::MemoryStore> = OnceLock::new();
    STORE.get_or_init(store::MemoryStore::new).clone()
}

/// The device-local key/value store backing the persisted session.
pub fn make_store() -> impl KeyValueStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        process_store()
    }
}

/// A backend client over the platform store. Cheap to construct; clones
/// share the credential store and connection pool.
pub fn gym_client() -> GymClient<impl KeyValueStore> {
    GymClient::new(ApiConfig::default(), make_store())
}
