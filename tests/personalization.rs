//! End-to-end behavior of tracking and recommending over the file store.
//!
//! Each test gets a fresh storage file in a temp directory and drives the
//! same tracker and engine the website and the CLI use.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use site_persona::file_store::FileStore;
use site_persona_core::catalog::{Catalog, Service};
use site_persona_core::category::Category;
use site_persona_core::engine::{RecommendationEngine, DEFAULT_RECOMMENDATIONS, MAX_RECOMMENDATIONS};
use site_persona_core::hero::{hero_for, HeroContent};
use site_persona_core::profile::PROFILE_KEY;
use site_persona_core::resolver::RESOLVER_TABLE;
use site_persona_core::store::KeyValueStore;
use site_persona_core::tracker::InterestTracker;
use tempfile::TempDir;

// ─── Helpers ────────────────────────────────────────────────────────

fn storage_path(tmp: &TempDir) -> PathBuf {
    tmp.path().join("data").join("storage.json")
}

fn titles(services: &[Service]) -> Vec<String> {
    services.iter().map(|s| s.title.clone()).collect()
}

fn make_service(title: &str, category: Category) -> Service {
    Service {
        title: title.to_string(),
        description: String::new(),
        category,
        icon: String::new(),
        features: Vec::new(),
    }
}

// ─── Tests ──────────────────────────────────────────────────────────

#[test]
fn test_absent_profile_gives_defaults() {
    let tmp = TempDir::new().unwrap();
    let catalog = Catalog::builtin();
    let recs = RecommendationEngine::new(FileStore::new(storage_path(&tmp)), &catalog)
        .compute_recommendations();

    assert_eq!(recs.hero, HeroContent::default_content());
    assert_eq!(titles(&recs.services), DEFAULT_RECOMMENDATIONS.to_vec());
}

#[test]
fn test_first_track_creates_profile() {
    let tmp = TempDir::new().unwrap();
    let store = FileStore::new(storage_path(&tmp));
    InterestTracker::new(&store).track_interest("Cybersecurity");

    assert_eq!(
        store.get(PROFILE_KEY).unwrap().as_deref(),
        Some(r#"{"Security & Infrastructure":1}"#)
    );
}

#[test]
fn test_unknown_key_leaves_file_bytes_unchanged() {
    let tmp = TempDir::new().unwrap();
    let path = storage_path(&tmp);
    let store = FileStore::new(&path);
    InterestTracker::new(&store).track_interest("React");
    let before = fs::read(&path).unwrap();

    InterestTracker::new(&store).track_interest("totally-unknown-xyz");

    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn test_ranking_orders_categories() {
    let tmp = TempDir::new().unwrap();
    let store = FileStore::new(storage_path(&tmp));
    store
        .set(PROFILE_KEY, r#"{"Growth & Marketing":5,"Business Strategy":2}"#)
        .unwrap();

    // one Growth & Marketing service, so the list must spill into Business Strategy
    let catalog = Catalog::new(vec![
        make_service("Strategy Sprint", Category::BusinessStrategy),
        make_service("Security Review", Category::SecurityInfrastructure),
        make_service("Launch Campaign", Category::GrowthMarketing),
        make_service("Data Audit", Category::BusinessStrategy),
    ])
    .unwrap();
    let recs = RecommendationEngine::new(&store, &catalog).compute_recommendations();

    assert_eq!(recs.top_category(), Some(Category::GrowthMarketing));
    assert_eq!(
        titles(&recs.services),
        vec!["Launch Campaign", "Strategy Sprint", "Data Audit"]
    );
    let cats: Vec<Category> = recs.services.iter().map(|s| s.category).collect();
    assert_eq!(
        cats,
        vec![
            Category::GrowthMarketing,
            Category::BusinessStrategy,
            Category::BusinessStrategy
        ]
    );
}

#[test]
fn test_object_valued_profile_entry_recovers() {
    let tmp = TempDir::new().unwrap();
    let path = storage_path(&tmp);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, r#"{"userInterestProfile":{"Security & Infrastructure":1}}"#).unwrap();

    let store = FileStore::new(&path);
    let tracker = InterestTracker::new(&store);
    for _ in 0..3 {
        assert_eq!(
            tracker.track_interest("Cybersecurity"),
            Some(Category::SecurityInfrastructure)
        );
    }
    assert_eq!(
        store.get(PROFILE_KEY).unwrap().as_deref(),
        Some(r#"{"Security & Infrastructure":3}"#)
    );

    store.remove(PROFILE_KEY).unwrap();
    assert_eq!(store.get(PROFILE_KEY).unwrap(), None);
}

#[test]
fn test_object_valued_profile_entry_can_be_removed_directly() {
    let tmp = TempDir::new().unwrap();
    let path = storage_path(&tmp);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, r#"{"userInterestProfile":{"Security & Infrastructure":1}}"#).unwrap();

    FileStore::new(&path).remove(PROFILE_KEY).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    assert!(!raw.contains("Security & Infrastructure"));
}

#[test]
fn test_corrupt_profile_is_cleared_by_engine() {
    let tmp = TempDir::new().unwrap();
    let store = FileStore::new(storage_path(&tmp));
    store.set(PROFILE_KEY, "not-json").unwrap();

    let catalog = Catalog::builtin();
    let recs = RecommendationEngine::new(&store, &catalog).compute_recommendations();

    assert_eq!(recs.hero, HeroContent::default_content());
    assert_eq!(titles(&recs.services), DEFAULT_RECOMMENDATIONS.to_vec());
    assert_eq!(store.get(PROFILE_KEY).unwrap(), None);
}

#[test]
fn test_unreadable_storage_does_not_fail() {
    let tmp = TempDir::new().unwrap();
    let path = storage_path(&tmp);
    // a directory where the storage file should be cannot be read
    fs::create_dir_all(&path).unwrap();

    let store = FileStore::new(&path);
    assert_eq!(InterestTracker::new(&store).track_interest("Cybersecurity"), None);

    let catalog = Catalog::builtin();
    let recs = RecommendationEngine::new(&store, &catalog).compute_recommendations();
    assert_eq!(titles(&recs.services), DEFAULT_RECOMMENDATIONS.to_vec());
}

#[test]
fn test_output_bounded_unique_and_deterministic() {
    let tmp = TempDir::new().unwrap();
    let store = FileStore::new(storage_path(&tmp));
    let tracker = InterestTracker::new(&store);
    let catalog = Catalog::builtin();

    // Walk the resolver table so every category accumulates some count
    for (i, (key, _)) in RESOLVER_TABLE.iter().enumerate() {
        for _ in 0..(i % 3) {
            tracker.track_interest(key);
        }

        let engine = RecommendationEngine::new(&store, &catalog);
        let recs = engine.compute_recommendations();
        assert!(recs.services.len() <= MAX_RECOMMENDATIONS);
        let unique: HashSet<&str> = recs.services.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(unique.len(), recs.services.len());
        assert_eq!(engine.compute_recommendations(), recs);
    }
}

#[test]
fn test_three_cybersecurity_filters_scenario() {
    let tmp = TempDir::new().unwrap();
    let store = FileStore::new(storage_path(&tmp));
    let tracker = InterestTracker::new(&store);
    for _ in 0..3 {
        tracker.track_interest("Cybersecurity");
    }

    let catalog = Catalog::builtin();
    let recs = RecommendationEngine::new(&store, &catalog).compute_recommendations();

    assert_eq!(recs.top_category(), Some(Category::SecurityInfrastructure));
    assert_eq!(recs.ranking, vec![(Category::SecurityInfrastructure, 3)]);
    assert_eq!(recs.hero, hero_for(Category::SecurityInfrastructure).unwrap());
    assert_eq!(recs.services[0].category, Category::SecurityInfrastructure);
    assert_eq!(recs.services[0].title, "Cybersecurity Solutions");
}
