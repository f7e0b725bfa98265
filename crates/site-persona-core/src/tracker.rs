//! Best-effort interest tracking.
//!
//! [`InterestTracker::track_interest`] is called from UI event handlers. It
//! never fails: unknown keys are ignored, and storage problems are logged and
//! swallowed so the calling action always completes.

use tracing::{debug, warn};

use crate::category::Category;
use crate::profile::{InterestProfile, PROFILE_KEY};
use crate::resolver::resolve;
use crate::store::{load_healing, KeyValueStore};

/// Records interest keys as category counts in a [`KeyValueStore`].
pub struct InterestTracker<S> {
    store: S,
}

impl<S: KeyValueStore> InterestTracker<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Credit the category `key` resolves to with one interaction.
    ///
    /// Returns the category credited, or `None` when the key is untracked or
    /// the update could not be persisted. Untracked keys do not touch
    /// storage at all.
    pub fn track_interest(&self, key: &str) -> Option<Category> {
        let category = match resolve(key) {
            Some(c) => c,
            None => {
                debug!(key, "interest key not tracked");
                return None;
            }
        };

        let mut profile = match load_healing(&self.store, PROFILE_KEY, InterestProfile::decode) {
            Ok(p) => p.unwrap_or_default(),
            Err(e) => {
                warn!(key, error = %e, "could not read interest profile; interest not tracked");
                return None;
            }
        };

        profile.increment(category);

        if let Err(e) = self.store.set(PROFILE_KEY, &profile.encode()) {
            warn!(key, error = %e, "could not save interest profile; interest not tracked");
            return None;
        }

        debug!(key, category = %category, count = profile.count(category), "tracked interest");
        Some(category)
    }

    /// Current persisted profile. Corrupt data is cleared; failures read as
    /// empty.
    pub fn profile(&self) -> InterestProfile {
        match load_healing(&self.store, PROFILE_KEY, InterestProfile::decode) {
            Ok(p) => p.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "could not read interest profile");
                InterestProfile::default()
            }
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use anyhow::{bail, Result};

    struct UnavailableStore;

    impl KeyValueStore for UnavailableStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            bail!("storage disabled")
        }
        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            bail!("storage disabled")
        }
        fn remove(&self, _key: &str) -> Result<()> {
            bail!("storage disabled")
        }
    }

    /// Reads succeed, writes are denied.
    struct ReadOnlyStore(InMemoryStore);

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.0.get(key)
        }
        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            bail!("quota exceeded")
        }
        fn remove(&self, _key: &str) -> Result<()> {
            bail!("quota exceeded")
        }
    }

    #[test]
    fn test_track_from_empty() {
        let store = InMemoryStore::new();
        let tracker = InterestTracker::new(&store);
        assert_eq!(
            tracker.track_interest("Cybersecurity"),
            Some(Category::SecurityInfrastructure)
        );
        assert_eq!(
            store.get(PROFILE_KEY).unwrap().as_deref(),
            Some(r#"{"Security & Infrastructure":1}"#)
        );
    }

    #[test]
    fn test_track_increments_by_one() {
        let store = InMemoryStore::new();
        let tracker = InterestTracker::new(&store);
        tracker.track_interest("React");
        tracker.track_interest("Python");
        tracker.track_interest("Shopify");
        let p = tracker.profile();
        assert_eq!(p.count(Category::DevelopmentTraining), 2);
        assert_eq!(p.count(Category::GrowthMarketing), 1);
    }

    #[test]
    fn test_unknown_key_leaves_store_untouched() {
        let store = InMemoryStore::new().with_entry(PROFILE_KEY, r#"{ "Growth & Marketing" : 2 }"#);
        let before = store.snapshot();
        let tracker = InterestTracker::new(&store);
        assert_eq!(tracker.track_interest("totally-unknown-xyz"), None);
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_unknown_key_on_empty_store_creates_nothing() {
        let store = InMemoryStore::new();
        InterestTracker::new(&store).track_interest("nope");
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn test_corrupt_profile_is_replaced() {
        let store = InMemoryStore::new().with_entry(PROFILE_KEY, "not-json");
        let tracker = InterestTracker::new(&store);
        assert_eq!(tracker.track_interest("SEO"), Some(Category::GrowthMarketing));
        assert_eq!(
            store.get(PROFILE_KEY).unwrap().as_deref(),
            Some(r#"{"Growth & Marketing":1}"#)
        );
    }

    #[test]
    fn test_profile_read_heals_corruption() {
        let store = InMemoryStore::new().with_entry(PROFILE_KEY, "{broken");
        let tracker = InterestTracker::new(&store);
        assert!(tracker.profile().is_empty());
        assert_eq!(store.get(PROFILE_KEY).unwrap(), None);
    }

    #[test]
    fn test_unavailable_storage_is_swallowed() {
        let tracker = InterestTracker::new(UnavailableStore);
        assert_eq!(tracker.track_interest("Cybersecurity"), None);
        assert!(tracker.profile().is_empty());
    }

    #[test]
    fn test_write_denied_is_swallowed() {
        let inner = InMemoryStore::new().with_entry(PROFILE_KEY, r#"{"Business Strategy":1}"#);
        let tracker = InterestTracker::new(ReadOnlyStore(inner));
        assert_eq!(tracker.track_interest("CRM"), None);
        assert_eq!(tracker.profile().count(Category::BusinessStrategy), 1);
    }
}
