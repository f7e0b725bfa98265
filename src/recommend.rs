//! Recommendation and profile commands (the read path).

use anyhow::Result;
use serde::Serialize;
use site_persona_core::catalog::{Catalog, Service};
use site_persona_core::hero::HeroContent;
use site_persona_core::personalization::Personalization;
use site_persona_core::popularity::POPULARITY_KEY;
use site_persona_core::profile::PROFILE_KEY;
use site_persona_core::store::KeyValueStore;
use site_persona_core::tracker::InterestTracker;

use crate::catalog::load_catalog;
use crate::config::Config;
use crate::file_store::FileStore;

/// One ranked category with its interaction count.
#[derive(Debug, Clone, Serialize)]
pub struct RankedCategory {
    pub category: String,
    pub count: u64,
}

/// JSON shape printed by `persona recommend --json`.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendOutput {
    pub hero: HeroContent,
    pub services: Vec<Service>,
    pub ranking: Vec<RankedCategory>,
}

/// Compute recommendations the way a page load would.
pub fn recommend_with(store: FileStore, catalog: &Catalog) -> RecommendOutput {
    let page = Personalization::load(store, catalog);
    let recs = page.recommendations();
    RecommendOutput {
        hero: recs.hero.clone(),
        services: recs.services.clone(),
        ranking: recs
            .ranking
            .iter()
            .map(|(c, n)| RankedCategory {
                category: c.to_string(),
                count: *n,
            })
            .collect(),
    }
}

pub fn run_recommend(config: &Config, json: bool) -> Result<()> {
    let catalog = load_catalog(config)?;
    let out = recommend_with(FileStore::new(&config.storage.path), &catalog);

    if json {
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{}", out.hero.headline);
    println!("{}", out.hero.subheadline);
    println!();
    if out.services.is_empty() {
        println!("No recommended services.");
        return Ok(());
    }
    println!("Recommended for you:");
    for (i, s) in out.services.iter().enumerate() {
        println!("  {}. {} [{}]", i + 1, s.title, s.category);
        println!("     {}", s.description);
    }
    Ok(())
}

pub fn run_profile(config: &Config, json: bool) -> Result<()> {
    let tracker = InterestTracker::new(FileStore::new(&config.storage.path));
    let profile = tracker.profile();

    if json {
        println!("{}", profile.encode());
        return Ok(());
    }

    if profile.is_empty() {
        println!("No interests tracked yet.");
        return Ok(());
    }
    println!("{:<28} COUNT", "CATEGORY");
    for (category, count) in profile.ranked() {
        println!("{:<28} {}", category.as_str(), count);
    }
    Ok(())
}

/// Forget all tracked interest and popularity data.
pub fn run_reset(config: &Config) -> Result<()> {
    let store = FileStore::new(&config.storage.path);
    store.remove(PROFILE_KEY)?;
    store.remove(POPULARITY_KEY)?;
    println!("Interest profile and service popularity cleared.");
    Ok(())
}
