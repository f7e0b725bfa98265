//! Per-service view counts used to order service listings.
//!
//! Shares the storage mechanism with the interest profile but carries no
//! category semantics: keys are service titles.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::catalog::{Catalog, Service};
use crate::store::{load_healing, KeyValueStore};

/// Storage key holding the title → count map.
pub const POPULARITY_KEY: &str = "servicePopularity";

fn decode(raw: &str) -> Result<BTreeMap<String, u64>> {
    serde_json::from_str(raw).context("service popularity is not a JSON object of counts")
}

/// Records and reads service popularity counts.
pub struct PopularityTracker<S> {
    store: S,
}

impl<S: KeyValueStore> PopularityTracker<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Add one view for `title`. Best-effort; returns whether it was saved.
    pub fn record(&self, title: &str) -> bool {
        let mut counts = match load_healing(&self.store, POPULARITY_KEY, decode) {
            Ok(c) => c.unwrap_or_default(),
            Err(e) => {
                warn!(title, error = %e, "could not read service popularity");
                return false;
            }
        };
        let n = counts.entry(title.to_string()).or_insert(0);
        *n = n.saturating_add(1);

        let encoded = match serde_json::to_string(&counts) {
            Ok(s) => s,
            Err(e) => {
                warn!(title, error = %e, "could not encode service popularity");
                return false;
            }
        };
        if let Err(e) = self.store.set(POPULARITY_KEY, &encoded) {
            warn!(title, error = %e, "could not save service popularity");
            return false;
        }
        debug!(title, "recorded service view");
        true
    }

    /// Current counts. Corrupt data is cleared; failures read as empty.
    pub fn counts(&self) -> BTreeMap<String, u64> {
        match load_healing(&self.store, POPULARITY_KEY, decode) {
            Ok(c) => c.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "could not read service popularity");
                BTreeMap::new()
            }
        }
    }

    /// Catalog entries, most viewed first. Equal counts keep catalog order.
    pub fn sort_catalog<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Service> {
        let counts = self.counts();
        let mut services: Vec<&Service> = catalog.iter().collect();
        services.sort_by_key(|s| std::cmp::Reverse(counts.get(&s.title).copied().unwrap_or(0)));
        services
    }
}
