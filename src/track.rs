//! Interest tracking commands.
//!
//! `persona track` is the write path a UI event handler would call;
//! `persona resolve` shows what a key would count toward without tracking it.

use anyhow::Result;
use site_persona_core::resolver::resolve;
use site_persona_core::tracker::InterestTracker;

use crate::config::Config;
use crate::file_store::FileStore;

/// Track each key in order and report the category credited.
///
/// Never fails on unknown keys or storage trouble; those are reported and
/// logged, and the remaining keys are still tracked.
pub fn run_track(config: &Config, keys: &[String]) -> Result<()> {
    let tracker = InterestTracker::new(FileStore::new(&config.storage.path));

    for key in keys {
        match tracker.track_interest(key) {
            Some(category) => println!("{:<32} -> {}", key, category),
            None if resolve(key).is_none() => println!("{:<32} -> (untracked)", key),
            None => println!("{:<32} -> (not saved)", key),
        }
    }
    Ok(())
}

pub fn run_resolve(key: &str) -> Result<()> {
    match resolve(key) {
        Some(category) => println!("{}", category),
        None => println!("untracked"),
    }
    Ok(())
}
