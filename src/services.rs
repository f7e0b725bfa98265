//! Catalog listing and service-view commands.

use anyhow::{bail, Result};
use site_persona_core::catalog::Service;
use site_persona_core::popularity::PopularityTracker;
use site_persona_core::tracker::InterestTracker;

use crate::catalog::load_catalog;
use crate::config::Config;
use crate::file_store::FileStore;

pub fn run_services(config: &Config, popular: bool) -> Result<()> {
    let catalog = load_catalog(config)?;
    let pop = PopularityTracker::new(FileStore::new(&config.storage.path));

    let services: Vec<&Service> = if popular {
        pop.sort_catalog(&catalog)
    } else {
        catalog.iter().collect()
    };
    let counts = pop.counts();

    println!("{:<28} {:<28} VIEWS", "SERVICE", "CATEGORY");
    for s in services {
        println!(
            "{:<28} {:<28} {}",
            s.title,
            s.category.as_str(),
            counts.get(&s.title).copied().unwrap_or(0)
        );
    }
    Ok(())
}

/// Record that a visitor opened a service: bumps its popularity and tracks
/// its title as an interest key.
pub fn run_view(config: &Config, title: &str) -> Result<()> {
    let catalog = load_catalog(config)?;
    if catalog.get(title).is_none() {
        bail!("Unknown service: '{}'. Run `persona services` to list titles.", title);
    }

    let pop = PopularityTracker::new(FileStore::new(&config.storage.path));
    let tracker = InterestTracker::new(FileStore::new(&config.storage.path));

    let saved = pop.record(title);
    let category = tracker.track_interest(title);
    let note = if saved { "" } else { " (not saved)" };
    match category {
        Some(category) => println!("Viewed '{}' ({}){}", title, category, note),
        None => println!("Viewed '{}'{}", title, note),
    }
    Ok(())
}
