/// Flat string key/value persistence.
///
/// Implementations must be cheap to clone; every clone observes the same
/// underlying storage.
pub trait KeyValueStore: Clone {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}
