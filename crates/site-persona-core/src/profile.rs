//! The persisted category → count map.

use std::collections::BTreeMap;

use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};
use tracing::warn;

use crate::category::Category;

/// Storage key holding the serialized [`InterestProfile`].
pub const PROFILE_KEY: &str = "userInterestProfile";

/// Accumulated interest signal for one visitor.
///
/// Persisted as a JSON object keyed by category display name, e.g.
/// `{"Security & Infrastructure":1}`. Keys are restricted to the four
/// categories by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterestProfile {
    counts: BTreeMap<Category, u64>,
}

impl InterestProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Count for `category` (zero when never tracked).
    pub fn count(&self, category: Category) -> u64 {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    /// Add exactly one to `category`.
    pub fn increment(&mut self, category: Category) {
        let c = self.counts.entry(category).or_insert(0);
        *c = c.saturating_add(1);
    }

    /// Categories with a non-zero count, highest first.
    ///
    /// Equal counts fall back to category priority order
    /// ([`Category::ALL`]), so the result never depends on insertion or
    /// serialization order.
    pub fn ranked(&self) -> Vec<(Category, u64)> {
        let mut ranked: Vec<(Category, u64)> = self
            .counts
            .iter()
            .filter(|(_, n)| **n > 0)
            .map(|(c, n)| (*c, *n))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked
    }

    /// The highest-ranked category, if any.
    pub fn top(&self) -> Option<Category> {
        self.ranked().first().map(|(c, _)| *c)
    }

    /// Parse the persisted JSON form.
    ///
    /// Fails when the value is not a JSON object of non-negative integers.
    /// Unknown category names are dropped with a warning.
    pub fn decode(raw: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(raw).context("interest profile is not valid JSON")?;
        let obj = match value {
            Value::Object(obj) => obj,
            other => bail!("interest profile must be a JSON object, got: {}", other),
        };

        let mut profile = Self::new();
        for (key, v) in obj {
            let n = match v.as_u64() {
                Some(n) => n,
                None => bail!("interest profile count for '{}' is not a non-negative integer", key),
            };
            match key.parse::<Category>() {
                Ok(cat) if n > 0 => {
                    profile.counts.insert(cat, n);
                }
                Ok(_) => {}
                Err(_) => warn!(key = %key, "dropping unknown category from interest profile"),
            }
        }
        Ok(profile)
    }

    /// Serialize to the persisted JSON form.
    pub fn encode(&self) -> String {
        let obj: Map<String, Value> = self
            .counts
            .iter()
            .map(|(c, n)| (c.as_str().to_string(), Value::from(*n)))
            .collect();
        Value::Object(obj).to_string()
    }
}
