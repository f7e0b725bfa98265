//! Recommendation engine.
//!
//! Turns the persisted [`InterestProfile`] into hero copy and a short list of
//! recommended services. Runs once per page load; never fails.
//!
//! # Algorithm
//!
//! 1. Read the profile. Corrupt data is cleared and read as empty.
//! 2. Empty profile: default hero and [`DEFAULT_RECOMMENDATIONS`].
//! 3. Otherwise rank categories by count (ties by category priority).
//! 4. Hero copy comes from the top category.
//! 5. Walk ranked categories, appending each one's services in catalog
//!    order; dedup by title; keep the first [`MAX_RECOMMENDATIONS`].

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, warn};

use crate::catalog::{Catalog, Service};
use crate::category::Category;
use crate::hero::{hero_for, HeroContent};
use crate::profile::{InterestProfile, PROFILE_KEY};
use crate::store::{load_healing, KeyValueStore};

/// Upper bound on recommended services.
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Services recommended to visitors with no history, in order.
pub const DEFAULT_RECOMMENDATIONS: [&str; 3] = [
    "Cybersecurity Solutions",
    "Software Development",
    "Data Analysis & Insights",
];

/// Output of one engine run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendations {
    pub hero: HeroContent,
    /// At most [`MAX_RECOMMENDATIONS`] services, unique by title.
    pub services: Vec<Service>,
    /// Categories with their counts, highest first. Empty without history.
    pub ranking: Vec<(Category, u64)>,
}

impl Recommendations {
    /// Default output for visitors with no history.
    pub fn fallback(catalog: &Catalog) -> Self {
        Self {
            hero: HeroContent::default_content(),
            services: DEFAULT_RECOMMENDATIONS
                .iter()
                .filter_map(|title| catalog.get(title).cloned())
                .collect(),
            ranking: Vec::new(),
        }
    }

    pub fn top_category(&self) -> Option<Category> {
        self.ranking.first().map(|(c, _)| *c)
    }
}

/// Computes [`Recommendations`] from a store and a catalog.
pub struct RecommendationEngine<'c, S> {
    store: S,
    catalog: &'c Catalog,
}

impl<'c, S: KeyValueStore> RecommendationEngine<'c, S> {
    pub fn new(store: S, catalog: &'c Catalog) -> Self {
        Self { store, catalog }
    }

    /// Read the persisted profile and derive hero copy and services.
    pub fn compute_recommendations(&self) -> Recommendations {
        let profile = match load_healing(&self.store, PROFILE_KEY, InterestProfile::decode) {
            Ok(p) => p.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "could not read interest profile; using defaults");
                InterestProfile::default()
            }
        };
        let recs = recommend(&profile, self.catalog);
        debug!(
            top = ?recs.top_category(),
            services = recs.services.len(),
            "computed recommendations"
        );
        recs
    }
}

/// Pure recommendation step over an already-loaded profile.
pub fn recommend(profile: &InterestProfile, catalog: &Catalog) -> Recommendations {
    let ranking = profile.ranked();
    let top = match ranking.first() {
        Some((c, _)) => *c,
        None => return Recommendations::fallback(catalog),
    };

    let hero = hero_for(top).unwrap_or_default();

    let mut seen: HashSet<&str> = HashSet::new();
    let services: Vec<Service> = ranking
        .iter()
        .flat_map(|(cat, _)| catalog.in_category(*cat))
        .filter(|s| seen.insert(s.title.as_str()))
        .take(MAX_RECOMMENDATIONS)
        .cloned()
        .collect();

    Recommendations {
        hero,
        services,
        ranking,
    }
}
