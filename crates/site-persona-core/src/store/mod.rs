//! Storage abstraction for Site Persona.
//!
//! The [`KeyValueStore`] trait is the only way the tracker and engine touch
//! persisted state. It mirrors browser local storage: string keys, string
//! values, and operations that may fail when storage is unavailable.
//!
//! Implementations must be `Send + Sync` so one store can be shared by the
//! tracker, the engine, and the popularity tracker.
//!
//! # Operations
//!
//! | Method | Purpose |
//! |--------|---------|
//! | [`get`](KeyValueStore::get) | Read a raw value |
//! | [`set`](KeyValueStore::set) | Write a raw value |
//! | [`remove`](KeyValueStore::remove) | Delete a key |

pub mod memory;

use std::sync::Arc;

use anyhow::Result;
use tracing::warn;

/// Abstract string key-value storage.
pub trait KeyValueStore: Send + Sync {
    /// Read the value for `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// Read and decode a JSON entry, clearing it if it is corrupt.
///
/// - `Ok(Some(v))`: present and decoded.
/// - `Ok(None)`: absent, or corrupt and now removed.
/// - `Err`: the store itself failed the read.
///
/// A failed removal of a corrupt value is logged; the caller still sees
/// `Ok(None)` and may overwrite the key.
pub fn load_healing<S, T, F>(store: &S, key: &str, decode: F) -> Result<Option<T>>
where
    S: KeyValueStore + ?Sized,
    F: FnOnce(&str) -> Result<T>,
{
    let raw = match store.get(key)? {
        Some(raw) => raw,
        None => return Ok(None),
    };
    match decode(&raw) {
        Ok(v) => Ok(Some(v)),
        Err(e) => {
            warn!(key, error = %e, "clearing corrupt stored value");
            if let Err(e) = store.remove(key) {
                warn!(key, error = %e, "failed to clear corrupt stored value");
            }
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::memory::InMemoryStore;
    use super::*;

    fn decode_number(raw: &str) -> Result<u32> {
        Ok(raw.parse()?)
    }

    #[test]
    fn test_load_absent() {
        let store = InMemoryStore::new();
        assert_eq!(load_healing(&store, "k", decode_number).unwrap(), None);
    }

    #[test]
    fn test_load_present() {
        let store = InMemoryStore::new().with_entry("k", "42");
        assert_eq!(load_healing(&store, "k", decode_number).unwrap(), Some(42));
        assert_eq!(store.get("k").unwrap().as_deref(), Some("42"));
    }

    #[test]
    fn test_load_corrupt_clears() {
        let store = InMemoryStore::new().with_entry("k", "forty-two");
        assert_eq!(load_healing(&store, "k", decode_number).unwrap(), None);
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_arc_and_ref_delegate() {
        let store = Arc::new(InMemoryStore::new());
        let shared = Arc::clone(&store);
        shared.set("a", "1").unwrap();
        let by_ref: &InMemoryStore = &store;
        assert_eq!(KeyValueStore::get(&by_ref, "a").unwrap().as_deref(), Some("1"));
    }
}
