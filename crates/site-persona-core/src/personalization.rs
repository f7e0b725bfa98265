//! Read-on-mount personalization accessor for UI code.
//!
//! [`Personalization::load`] computes recommendations once. Later calls to
//! [`Personalization::track_interest`] persist new interest but leave the
//! loaded snapshot alone; the next load picks them up.

use crate::catalog::{Catalog, Service};
use crate::category::Category;
use crate::engine::{RecommendationEngine, Recommendations};
use crate::hero::HeroContent;
use crate::store::KeyValueStore;
use crate::tracker::InterestTracker;

/// Hero copy, recommended services, and a tracking handle for one page load.
pub struct Personalization<S> {
    snapshot: Recommendations,
    tracker: InterestTracker<S>,
}

impl<S: KeyValueStore> Personalization<S> {
    pub fn load(store: S, catalog: &Catalog) -> Self {
        let snapshot = RecommendationEngine::new(&store, catalog).compute_recommendations();
        Self {
            snapshot,
            tracker: InterestTracker::new(store),
        }
    }

    pub fn hero_content(&self) -> &HeroContent {
        &self.snapshot.hero
    }

    pub fn recommended_services(&self) -> &[Service] {
        &self.snapshot.services
    }

    pub fn recommendations(&self) -> &Recommendations {
        &self.snapshot
    }

    /// Fire-and-forget interest tracking. See [`InterestTracker::track_interest`].
    pub fn track_interest(&self, key: &str) -> Option<Category> {
        self.tracker.track_interest(key)
    }
}
